//! Requests sent from a [`ControllerHandle`](super::ControllerHandle) to the
//! controller task.

use crate::state::{AppState, Msg};
use tokio::sync::oneshot;

/// Type alias for the one-shot channel a state copy is returned on.
pub type Reply = oneshot::Sender<AppState>;

#[derive(Debug)]
pub enum Command {
    /// Feed a UI event through the reducer.
    Dispatch(Msg),
    /// Reply with the current state right away.
    Snapshot { respond_to: Reply },
    /// Reply with the state once no API request is in flight.
    Settle { respond_to: Reply },
}

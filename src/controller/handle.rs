//! # Controller Handle
//!
//! Typed async front door to the controller task. One method per UI event; each
//! returns as soon as the event is queued, not when the API calls it triggers finish.
//! Use [`ControllerHandle::settle`] to wait for those.

use super::error::ControllerError;
use super::message::Command;
use crate::model::{ProductId, SortKey};
use crate::session::FormField;
use crate::state::{AppState, Msg};
use crate::store::{FilterKind, SortDirection};
use tokio::sync::{mpsc, oneshot};

/// Cloneable, cheap: holds only a channel sender.
#[derive(Clone)]
pub struct ControllerHandle {
    sender: mpsc::Sender<Command>,
}

impl ControllerHandle {
    pub fn new(sender: mpsc::Sender<Command>) -> Self {
        Self { sender }
    }

    async fn dispatch(&self, msg: Msg) -> Result<(), ControllerError> {
        self.sender
            .send(Command::Dispatch(msg))
            .await
            .map_err(|_| ControllerError::Closed)
    }

    /// `loadAll()`
    pub async fn load_all(&self) -> Result<(), ControllerError> {
        self.dispatch(Msg::LoadRequested).await
    }

    /// A keystroke in one of the filter boxes; `text` is the box's full new contents.
    pub async fn apply_filter(
        &self,
        kind: FilterKind,
        text: impl Into<String>,
    ) -> Result<(), ControllerError> {
        self.dispatch(Msg::FilterChanged {
            kind,
            text: text.into(),
        })
        .await
    }

    pub async fn sort(&self, key: SortKey, direction: SortDirection) -> Result<(), ControllerError> {
        self.dispatch(Msg::SortRequested { key, direction }).await
    }

    /// Add click.
    pub async fn begin_create(&self) -> Result<(), ControllerError> {
        self.dispatch(Msg::AddClicked).await
    }

    /// Edit click on the row of product `id`.
    pub async fn begin_edit(&self, id: ProductId) -> Result<(), ControllerError> {
        self.dispatch(Msg::EditClicked(id)).await
    }

    pub async fn edit_field(
        &self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), ControllerError> {
        self.dispatch(Msg::FieldEdited {
            field,
            value: value.into(),
        })
        .await
    }

    /// Modal closed without submitting.
    pub async fn discard(&self) -> Result<(), ControllerError> {
        self.dispatch(Msg::Dismissed).await
    }

    pub async fn submit(&self) -> Result<(), ControllerError> {
        self.dispatch(Msg::Submitted).await
    }

    /// Delete click on the row of product `id`. Asks for confirmation first.
    pub async fn remove(&self, id: ProductId) -> Result<(), ControllerError> {
        self.dispatch(Msg::DeleteClicked(id)).await
    }

    /// Current state, after every command sent before this one.
    pub async fn snapshot(&self) -> Result<AppState, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Command::Snapshot { respond_to })
            .await
            .map_err(|_| ControllerError::Closed)?;
        response.await.map_err(|_| ControllerError::Dropped)
    }

    /// State once every API request started so far, and the refreshes they trigger,
    /// has completed.
    pub async fn settle(&self) -> Result<AppState, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Command::Settle { respond_to })
            .await
            .map_err(|_| ControllerError::Closed)?;
        response.await.map_err(|_| ControllerError::Dropped)
    }
}

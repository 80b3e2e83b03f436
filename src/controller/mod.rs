//! # Inventory Controller
//!
//! The single event loop that owns the page state.
//!
//! ## Concurrency Model
//!
//! [`InventoryController`] runs in one Tokio task and is the only owner of
//! [`AppState`], so no locks are needed. It processes one message at a time:
//!
//! - **Commands** arrive from any number of [`ControllerHandle`] clones.
//! - **Completions** of API requests arrive from the requests it spawned. Each API
//!   effect runs as its own task, so a slow request never blocks the loop; its
//!   outcome is fed back through the reducer as a later message.
//!
//! Nothing de-duplicates or cancels overlapping requests. The only ordering guard is
//! the load generation kept by the [`ProductStore`](crate::store::ProductStore).
//!
//! ## Confirmation
//!
//! A [`Effect::ConfirmDelete`] is awaited inline: like a modal prompt, nothing else
//! is processed until the user answers.
//!
//! ## Shutdown
//!
//! The loop ends when every handle has been dropped. Requests still in flight are
//! awaited and their completions processed (including the refresh a successful
//! mutation triggers) before the task returns.

pub mod error;
pub mod handle;
pub mod message;

pub use error::*;
pub use handle::*;
pub use message::*;

use crate::api::ProductApi;
use crate::state::{update, AppState, Effect, Msg, DELETE_PROMPT};
use crate::store::FilterMode;
use crate::ui::{Confirm, Notifier};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

/// External collaborators, injected when the loop starts.
#[derive(Clone)]
pub struct Collaborators {
    pub api: Arc<dyn ProductApi>,
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn Confirm>,
}

pub struct InventoryController {
    commands: mpsc::Receiver<Command>,
    requests: JoinSet<Msg>,
    state: AppState,
    settle_waiters: Vec<Reply>,
}

impl InventoryController {
    /// Creates the controller and its first handle.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the command channel. When full, handle calls
    ///   wait for space.
    /// * `mode` - How the two filter boxes combine.
    pub fn new(buffer_size: usize, mode: FilterMode) -> (Self, ControllerHandle) {
        let (sender, commands) = mpsc::channel(buffer_size);
        let controller = Self {
            commands,
            requests: JoinSet::new(),
            state: AppState::new(mode),
            settle_waiters: Vec::new(),
        };
        (controller, ControllerHandle::new(sender))
    }

    /// Runs the event loop until every handle is dropped and no request is in flight.
    pub async fn run(mut self, ctx: Collaborators) {
        info!(mode = ?self.state.store.mode(), "Controller started");

        loop {
            tokio::select! {
                biased;
                Some(joined) = self.requests.join_next(), if !self.requests.is_empty() => {
                    self.completed(joined, &ctx).await;
                }
                command = self.commands.recv() => match command {
                    Some(Command::Dispatch(msg)) => self.process(msg, &ctx).await,
                    Some(Command::Snapshot { respond_to }) => {
                        let _ = respond_to.send(self.state.clone());
                    }
                    Some(Command::Settle { respond_to }) => self.settle_waiters.push(respond_to),
                    None => break,
                },
            }
            self.release_settled();
        }

        while let Some(joined) = self.requests.join_next().await {
            self.completed(joined, &ctx).await;
        }
        info!(products = self.state.store.master().len(), "Controller stopped");
    }

    async fn completed(&mut self, joined: Result<Msg, JoinError>, ctx: &Collaborators) {
        match joined {
            Ok(msg) => self.process(msg, ctx).await,
            Err(e) => warn!(error = %e, "Request task failed"),
        }
    }

    /// Runs `msg` through the reducer and carries out the effects. Confirmation
    /// answers are fed straight back in before anything else is processed.
    async fn process(&mut self, msg: Msg, ctx: &Collaborators) {
        let mut pending = VecDeque::from([msg]);

        while let Some(msg) = pending.pop_front() {
            for effect in update(&mut self.state, msg) {
                match effect {
                    Effect::FetchAll { generation } => {
                        let api = ctx.api.clone();
                        self.spawn(async move {
                            Msg::Loaded {
                                generation,
                                result: api.list().await,
                            }
                        });
                    }
                    Effect::Create(draft) => {
                        let api = ctx.api.clone();
                        self.spawn(async move { Msg::Created(api.create(&draft).await) });
                    }
                    Effect::Update { id, draft } => {
                        let api = ctx.api.clone();
                        self.spawn(async move { Msg::Updated(api.update(id, &draft).await) });
                    }
                    Effect::Delete(id) => {
                        let api = ctx.api.clone();
                        self.spawn(async move { Msg::Deleted(api.delete(id).await) });
                    }
                    Effect::ConfirmDelete(product) => {
                        let prompt = format!("Delete \"{}\"? {}", product.name, DELETE_PROMPT);
                        let confirmed = ctx.confirm.confirm(&prompt).await;
                        pending.push_back(Msg::DeleteConfirmed { product, confirmed });
                    }
                    Effect::Notify(notification) => ctx.notifier.notify(notification),
                }
            }
        }
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = Msg> + Send + 'static,
    {
        self.requests.spawn(request);
        debug!(in_flight = self.requests.len(), "Request started");
    }

    fn release_settled(&mut self) {
        if !self.requests.is_empty() {
            return;
        }
        for waiter in self.settle_waiters.drain(..) {
            let _ = waiter.send(self.state.clone());
        }
    }
}

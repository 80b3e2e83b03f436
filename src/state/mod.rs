//! # Application State & Reducer
//!
//! All state the page owns lives in one [`AppState`]. It only changes through
//! [`update`], which takes one [`Msg`] (a UI event or an API completion), mutates the
//! state, and returns the [`Effect`]s the caller must perform. `update` never does
//! I/O itself; the [`controller`](crate::controller) runs the effects and feeds
//! their outcomes back in as new messages.
//!
//! ```text
//!   UI event ──► update(&mut state, msg) ──► [Effect]
//!                     ▲                         │
//!                     └──── completion Msg ◄────┘  (API call, confirmation)
//! ```

mod update;

pub use update::*;

use crate::api::ApiError;
use crate::model::{Product, ProductDraft, ProductId, SortKey};
use crate::session::{EditSession, FormField};
use crate::store::{FilterKind, FilterMode, ProductStore, SortDirection};
use crate::ui::Notification;

pub const ADDED_MESSAGE: &str = "Product has been added.";
pub const UPDATED_MESSAGE: &str = "Product has been updated.";
pub const DELETED_MESSAGE: &str = "Product has been deleted.";
pub const DELETE_PROMPT: &str = "Are you sure?";

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: ProductStore,
    pub session: EditSession,
}

impl AppState {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            store: ProductStore::new(mode),
            session: EditSession::default(),
        }
    }
}

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum Msg {
    // --- UI events ---
    /// Page mounted or a refresh was requested.
    LoadRequested,
    FilterChanged { kind: FilterKind, text: String },
    SortRequested { key: SortKey, direction: SortDirection },
    AddClicked,
    EditClicked(ProductId),
    FieldEdited { field: FormField, value: String },
    /// Modal closed without submitting.
    Dismissed,
    Submitted,
    DeleteClicked(ProductId),

    // --- Completions ---
    DeleteConfirmed { product: Product, confirmed: bool },
    Loaded {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
    Created(Result<(), ApiError>),
    Updated(Result<(), ApiError>),
    Deleted(Result<(), ApiError>),
}

/// Side effects requested by [`update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `GET` the whole collection; answer with [`Msg::Loaded`] carrying `generation`.
    FetchAll { generation: u64 },
    /// `POST` a new product; answer with [`Msg::Created`].
    Create(ProductDraft),
    /// `PUT` product `id`; answer with [`Msg::Updated`].
    Update { id: ProductId, draft: ProductDraft },
    /// Ask the user; answer with [`Msg::DeleteConfirmed`].
    ConfirmDelete(Product),
    /// `DELETE` product `id`; answer with [`Msg::Deleted`].
    Delete(ProductId),
    Notify(Notification),
}

//! # Inventory Client
//!
//! > **State controller for a product inventory page, backed by a REST API.**
//!
//! The crate owns the in-memory product list behind an inventory page: it loads the
//! collection from the Products API, keeps a filtered and sorted view of it, drives
//! the add/edit form, and sends create, update and delete requests. A small
//! `inventory` binary puts a command line on top of it.
//!
//! ## 🏗️ Design
//!
//! ### State and Reducer
//! All page state lives in one [`AppState`](state::AppState). It is changed only by
//! [`update`](state::update), a pure function from a message to a list of effects.
//! Everything interesting about the page (filters, sort, form, notifications) can
//! be tested without a runtime.
//!
//! ### One Controller Task
//! [`InventoryController`](controller::InventoryController) owns the state on a
//! single Tokio task and runs the effects. API calls are spawned so they never block
//! the loop; their outcomes come back as later messages. Callers talk to it through
//! a cloneable [`ControllerHandle`](controller::ControllerHandle).
//!
//! ### Collaborators
//! The HTTP API, notifications and the delete confirmation are traits injected at
//! [`run`](controller::InventoryController::run) time, so tests swap in
//! [`MockProductApi`](api::mock::MockProductApi),
//! [`RecordingNotifier`](ui::RecordingNotifier) and [`AutoConfirm`](ui::AutoConfirm).
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: wire types ([`Product`](model::Product), [`ProductDraft`](model::ProductDraft)).
//! - [`store`]: master and display collections, filtering, sorting.
//! - [`session`]: the add/edit form and number coercion.
//! - [`state`]: [`AppState`](state::AppState), messages, effects and the reducer.
//! - [`controller`]: the event loop and its handle.
//! - [`api`]: the [`ProductApi`](api::ProductApi) trait, the `reqwest` client and a mock.
//! - [`ui`]: notifications, confirmation prompts, table rendering.
//! - [`lifecycle`]: start and shutdown, logging setup.
//! - [`config`], [`cli`]: settings and the command line.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # The dev server uses a self-signed certificate
//! RUST_LOG=info inventory --insecure list --sort price --desc
//!
//! inventory --insecure add --name Widget --category Tools --price 9.99 --stock 5
//! inventory --insecure delete 3
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;

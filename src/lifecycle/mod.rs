//! # Application Lifecycle
//!
//! Starts the controller with its collaborators and shuts it down cleanly.
//!
//! ```rust,ignore
//! let app = InventoryApp::start(&config, Collaborators {
//!     api: Arc::new(HttpProductApi::new(&config)?),
//!     notifier: Arc::new(ConsoleNotifier),
//!     confirm: Arc::new(StdinConfirm),
//! });
//!
//! let handle = app.handle();
//! handle.load_all().await?;
//! let state = handle.settle().await?;
//!
//! app.shutdown().await?;
//! ```
//!
//! Shutdown drops the app's handle and waits for the controller task. Any handle
//! cloned out of the app keeps the controller alive until it is dropped too.

pub mod inventory_app;
pub mod tracing;

pub use inventory_app::*;
pub use self::tracing::setup_tracing;

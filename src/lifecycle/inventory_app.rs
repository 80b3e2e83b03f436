use crate::config::Config;
use crate::controller::{Collaborators, ControllerHandle, InventoryController};
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Controller task failed: {0}")]
    ControllerFailed(#[from] tokio::task::JoinError),
}

/// A running controller and the handle used to drive it.
pub struct InventoryApp {
    handle: ControllerHandle,
    task: JoinHandle<()>,
}

impl InventoryApp {
    /// Spawns the controller on the current Tokio runtime.
    pub fn start(config: &Config, ctx: Collaborators) -> Self {
        let (controller, handle) =
            InventoryController::new(config.channel_capacity, config.filter_mode);
        let task = tokio::spawn(controller.run(ctx));
        info!(api = %config.api_base, "Inventory app started");
        Self { handle, task }
    }

    pub fn handle(&self) -> ControllerHandle {
        self.handle.clone()
    }

    /// Closes the command channel and waits for in-flight requests to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the controller exited cleanly
    /// - `Err(AppError::ControllerFailed)` if its task panicked or was cancelled
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down...");
        drop(self.handle);

        if let Err(e) = self.task.await {
            error!(error = %e, "Controller task failed");
            return Err(e.into());
        }

        info!("Shutdown complete.");
        Ok(())
    }
}

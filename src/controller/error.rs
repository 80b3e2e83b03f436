//! Errors seen by holders of a [`ControllerHandle`](super::ControllerHandle).

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Controller closed")]
    Closed,
    #[error("Controller dropped response channel")]
    Dropped,
}

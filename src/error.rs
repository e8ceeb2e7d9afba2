use thiserror::Error;

/// Rejected clicker transitions. Reported to API callers, never fatal.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ClickerError {
    #[error("Clicker is already running.")]
    AlreadyRunning,

    #[error("Clicker is not running.")]
    NotRunning,
}

#[derive(Debug, Error)]
pub enum EmitError {
    /// The input backend could not be opened. Fatal at startup.
    #[error("Input backend unavailable: {0}")]
    Unavailable(String),

    #[error("Click failed: {0}")]
    Failed(String),
}

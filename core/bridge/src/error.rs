//! FILENAME: core/bridge/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A method that needs the execution context ran before `on_startup`.
    #[error("Bridge not started: on_startup has not been called")]
    NotStarted,

    #[error("Event emission failed: {0}")]
    Emit(String),
}

use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced by a windowed count statement.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid window interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid statement configuration: {0}")]
    InvalidConfig(String),

    #[error("Statement is already running")]
    AlreadyRunning,

    #[error("Statement is not running")]
    NotRunning,

    #[error("No Tokio runtime available to drive the window clock")]
    NoRuntime,

    #[error("Event type mismatch: expected '{expected}', got '{actual}'")]
    EventTypeMismatch { expected: String, actual: String },

    #[error("Invalid event payload: {0}")]
    InvalidPayload(String),

    #[error("Attribute '{field}' must be a string or null, found {found}")]
    InvalidAttribute { field: String, found: &'static str },
}

impl EngineError {
    pub fn log_error(&self) {
        match self {
            EngineError::InvalidInterval(e) => {
                error!("Invalid window interval: {}", e);
            }
            EngineError::InvalidConfig(e) => {
                error!("Invalid statement configuration: {}", e);
            }
            EngineError::AlreadyRunning | EngineError::NotRunning | EngineError::NoRuntime => {
                error!("Statement lifecycle error: {}", self);
                debug!("Lifecycle error details: {:?}", self);
            }
            EngineError::EventTypeMismatch { expected, actual } => {
                error!("Rejected event of type '{}'", actual);
                debug!("Statement is bound to event type '{}'", expected);
            }
            EngineError::InvalidPayload(e) => {
                error!("Rejected event payload: {}", e);
            }
            EngineError::InvalidAttribute { field, found } => {
                error!("Rejected event: attribute '{}' is {}", field, found);
                debug!("Group attributes accept only strings or null");
            }
        }
    }

    /// True for errors caused by the shape of an ingested event.
    pub fn is_event_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::EventTypeMismatch { .. }
                | EngineError::InvalidPayload(_)
                | EngineError::InvalidAttribute { .. }
        )
    }
}

use thiserror::Error;

/// Failure that stops the server, as opposed to a failed request.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    pub message: String,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("`{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unsupported aspect ratio {0:?}")]
    InvalidAspectRatio(String),
    #[error("unsupported output format {0:?}")]
    InvalidOutputFormat(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("HTTP error! status: {status}, message: {message}")]
    Http { status: u16, message: String },
    #[error("No image generated")]
    NoImage,
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

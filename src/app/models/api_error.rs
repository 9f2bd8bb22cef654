use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub const NO_ADDITIONAL_DETAILS: &str = "No additional details";

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn body(&self) -> Value {
        json!({
            "error": self.message,
            "details": match &self.details {
                Some(details) => details.clone(),
                None => Value::String(NO_ADDITIONAL_DETAILS.to_string()),
            },
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(self.body())).into_response()
    }
}

// Malformed bodies are reported like every other failure of the endpoint.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::internal(rejection.body_text())
    }
}

use serde_json::Value;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    PredictionFailed(Option<Value>),
    PredictionCanceled,
    UnexpectedStatus(String),
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::PredictionFailed(error) => {
                let message = match error {
                    Some(Value::String(e)) => format!("Prediction failed: {}", e),
                    Some(e) => format!("Prediction failed: {}", e),
                    None => "Prediction failed.".to_string(),
                };

                match error {
                    Some(e) => ApiError::internal(message).with_details(e.clone()),
                    None => ApiError::internal(message),
                }
            }
            Self::PredictionCanceled => ApiError::internal("Prediction canceled."),
            Self::UnexpectedStatus(status) => {
                ApiError::internal(format!("Prediction ended with status {}.", status))
            }
        }
    }
}

use serde_json::Value;

use crate::{app::models::api_error::ApiError, AppState};

use super::{apis::replicate, models::generation_result::GenerationResult};

/// Forwards `input` to the upstream model as is and relays its output, even an empty one.
pub async fn generate_image(input: &Value, state: &AppState) -> Result<GenerationResult, ApiError> {
    let output = replicate::service::run(input, state).await?;

    Ok(GenerationResult { output })
}

/// Top level keys of a request body. Values are left out because `image` holds a whole file.
pub fn field_names(input: &Value) -> Vec<&str> {
    match input.as_object() {
        Some(object) => object.keys().map(String::as_str).collect(),
        None => Vec::new(),
    }
}

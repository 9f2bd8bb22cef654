use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{models::generation_result::GenerationResult, service};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(input): JsonFromRequest<Value>,
) -> Result<Json<GenerationResult>, ApiError> {
    tracing::info!("received request with fields {:?}", service::field_names(&input));

    match service::generate_image(&input, &state).await {
        Ok(result) => {
            tracing::info!("replicate returned {} image(s)", result.output.len());
            Ok(Json(result))
        }
        Err(e) => {
            tracing::error!("generate_image failed: {} ({:?})", e.message, e.details);
            Err(e)
        }
    }
}

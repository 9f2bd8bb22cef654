use reqwest::Response;
use serde_json::{json, Value};
use tokio::time::sleep;

use crate::{
    app::models::api_error::ApiError,
    images::{
        apis::replicate::enums::replicate_prediction_status::ReplicatePredictionStatus,
        errors::ImagesApiError,
    },
    AppState,
};

use super::{config::POLL_INTERVAL, structs::replicate_prediction_response::ReplicatePredictionResponse};

/// Runs the configured model on `input` and returns its output list.
///
/// The prediction is created with `Prefer: wait`, so most runs finish in the
/// first round trip. Predictions still running after that are polled until
/// they reach a terminal status. There is no overall deadline.
pub async fn run(input: &Value, state: &AppState) -> Result<Vec<Value>, ApiError> {
    let prediction = create_prediction(input, state).await?;
    tracing::info!(
        "created prediction {} ({})",
        prediction.id,
        prediction.status.value()
    );

    let prediction = await_prediction_completion(prediction, state).await?;

    match prediction.status {
        ReplicatePredictionStatus::Succeeded => Ok(prediction.output_list()),
        ReplicatePredictionStatus::Failed => {
            tracing::warn!("prediction {} failed: {:?}", prediction.id, prediction.logs);
            Err(ImagesApiError::PredictionFailed(prediction.error).value())
        }
        ReplicatePredictionStatus::Canceled => Err(ImagesApiError::PredictionCanceled.value()),
        ref status => Err(ImagesApiError::UnexpectedStatus(status.value().to_string()).value()),
    }
}

async fn await_prediction_completion(
    prediction: ReplicatePredictionResponse,
    state: &AppState,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let mut prediction = prediction;

    while !prediction.status.is_terminal() {
        tracing::debug!(
            "waiting for prediction {} ({})",
            prediction.id,
            prediction.status.value()
        );
        sleep(POLL_INTERVAL).await;

        prediction = get_prediction_by_id(&prediction.id, state).await?;
    }

    Ok(prediction)
}

async fn create_prediction(
    input: &Value,
    state: &AppState,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let url = format!(
        "{}/models/{}/predictions",
        state.envy.replicate_api_url(),
        state.envy.replicate_model()
    );

    let result = state
        .client
        .post(&url)
        .bearer_auth(&state.envy.replicate_api_token)
        .header("Prefer", "wait")
        .json(&json!({ "input": input }))
        .send()
        .await;

    parse_prediction_response(&url, result).await
}

async fn get_prediction_by_id(
    id: &str,
    state: &AppState,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let url = format!("{}/predictions/{}", state.envy.replicate_api_url(), id);

    let result = state
        .client
        .get(&url)
        .bearer_auth(&state.envy.replicate_api_token)
        .send()
        .await;

    parse_prediction_response(&url, result).await
}

async fn parse_prediction_response(
    url: &str,
    result: Result<Response, reqwest::Error>,
) -> Result<ReplicatePredictionResponse, ApiError> {
    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!("request to {} failed: {:?}", url, e);
            return Err(ApiError::internal(e.to_string()));
        }
    };

    let status = res.status();
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("reading response from {} failed: {:?}", url, e);
            return Err(ApiError::internal(e.to_string()));
        }
    };

    if !status.is_success() {
        let details = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text.to_string()),
        };

        return Err(ApiError::internal(format!(
            "Request to {} failed with status {}: {}.",
            url, status, text
        ))
        .with_details(details));
    }

    match serde_json::from_str(&text) {
        Ok(prediction) => Ok(prediction),
        Err(e) => {
            tracing::warn!("unexpected prediction body from {}: {:?}", url, text);
            Err(
                ApiError::internal(format!("Failed to parse prediction response: {}", e))
                    .with_details(Value::String(text)),
            )
        }
    }
}

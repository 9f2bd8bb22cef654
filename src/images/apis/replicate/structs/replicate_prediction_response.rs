use serde::Deserialize;
use serde_json::Value;

use crate::images::apis::replicate::enums::replicate_prediction_status::ReplicatePredictionStatus;

#[derive(Debug, Deserialize)]
pub struct ReplicatePredictionResponse {
    pub id: String,
    pub status: ReplicatePredictionStatus,
    pub output: Option<Value>,
    pub error: Option<Value>,
    pub logs: Option<String>,
}

impl ReplicatePredictionResponse {
    /// Output of a finished prediction, element for element. A scalar output is
    /// returned as a one element list, a missing one as an empty list.
    pub fn output_list(&self) -> Vec<Value> {
        match &self.output {
            Some(Value::Array(values)) => values.to_vec(),
            Some(Value::Null) | None => Vec::new(),
            Some(value) => vec![value.clone()],
        }
    }
}

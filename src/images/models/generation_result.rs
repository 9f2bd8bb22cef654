use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream output as relayed by the proxy. For this model every element is an image url.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub output: Vec<Value>,
}

impl GenerationResult {
    pub fn first_url(&self) -> Option<&str> {
        self.output.first().and_then(Value::as_str)
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::images::enums::{aspect_ratio::AspectRatio, output_format::OutputFormat};

/// Input of one stable diffusion 3 run, as sent by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_image_pairing", skip_on_field_errors = false))]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub aspect_ratio: AspectRatio,
    #[validate(range(min = 0.0, max = 20.0, message = "cfg must be between 0 and 20."))]
    pub cfg: f64,
    #[validate(range(min = 1, max = 28, message = "steps must be between 1 and 28."))]
    pub steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    pub output_format: OutputFormat,
    #[validate(range(max = 100, message = "output_quality must be between 0 and 100."))]
    pub output_quality: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(
        min = 0.0,
        max = 1.0,
        message = "prompt_strength must be between 0 and 1."
    ))]
    pub prompt_strength: Option<f64>,
}

fn validate_image_pairing(request: &GenerationRequest) -> Result<(), ValidationError> {
    if request.image.is_some() != request.prompt_strength.is_some() {
        let mut error = ValidationError::new("validate_image_pairing");
        error.message = Some("image and prompt_strength must be sent together.".into());
        return Err(error);
    }

    Ok(())
}

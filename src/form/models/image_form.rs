use mime::Mime;
use validator::Validate;

use crate::{
    form::errors::FormError,
    images::{
        dtos::generation_request::GenerationRequest,
        enums::{aspect_ratio::AspectRatio, output_format::OutputFormat},
    },
};

/// Mutable state behind the generator form.
///
/// Numeric inputs are kept as the text the user typed and only coerced when a
/// request is built, the way an html input hands them over.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageForm {
    pub prompt: String,
    pub negative_prompt: String,
    pub aspect_ratio: AspectRatio,
    pub cfg: String,
    pub steps: String,
    pub seed: String,
    pub output_format: OutputFormat,
    pub output_quality: String,
    pub image: Option<String>,
    pub prompt_strength: String,
}

impl Default for ImageForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: String::new(),
            aspect_ratio: AspectRatio::default(),
            cfg: "3.5".to_string(),
            steps: "28".to_string(),
            seed: String::new(),
            output_format: OutputFormat::default(),
            output_quality: "90".to_string(),
            image: None,
            prompt_strength: "0.85".to_string(),
        }
    }
}

impl ImageForm {
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "prompt" => self.prompt = value.to_string(),
            "negative_prompt" => self.negative_prompt = value.to_string(),
            "aspect_ratio" => {
                self.aspect_ratio = AspectRatio::from_value(value)
                    .ok_or_else(|| FormError::InvalidAspectRatio(value.to_string()))?
            }
            "output_format" => {
                self.output_format = OutputFormat::from_value(value)
                    .ok_or_else(|| FormError::InvalidOutputFormat(value.to_string()))?
            }
            "cfg" => self.cfg = value.to_string(),
            "steps" => self.steps = value.to_string(),
            "seed" => self.seed = value.to_string(),
            "output_quality" => self.output_quality = value.to_string(),
            "prompt_strength" => self.prompt_strength = value.to_string(),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }

        Ok(())
    }

    /// Stores an uploaded file as a base64 data uri.
    pub fn set_image(&mut self, data: &[u8], mime_type: &Mime) {
        self.image = Some(format!(
            "data:{};base64,{}",
            mime_type.essence_str(),
            base64::encode(data)
        ));
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn build_request(&self) -> Result<GenerationRequest, FormError> {
        let mut request = GenerationRequest {
            prompt: self.prompt.to_string(),
            negative_prompt: Some(self.negative_prompt.to_string()),
            aspect_ratio: self.aspect_ratio,
            cfg: parse_float("cfg", &self.cfg)?,
            steps: parse_unsigned("steps", &self.steps)?,
            seed: parse_seed(&self.seed),
            output_format: self.output_format,
            output_quality: parse_unsigned("output_quality", &self.output_quality)?,
            image: None,
            prompt_strength: None,
        };

        // prompt_strength only means something for image to image
        if let Some(image) = &self.image {
            request.image = Some(image.to_string());
            request.prompt_strength = Some(parse_float("prompt_strength", &self.prompt_strength)?);
        }

        request.validate()?;

        Ok(request)
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, FormError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FormError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

// Leading integer of `value`, read the way javascript's parseInt reads it:
// "12.9" is 12, "42abc" is 42, "1e3" is 1, "0x1A" is 26.
fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => (16, rest),
        None => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let number = i64::from_str_radix(&digits[..end], radix).ok()?;

    Some(if negative { -number } else { number })
}

fn parse_unsigned(field: &'static str, value: &str) -> Result<u32, FormError> {
    match parse_integer(value).map(u32::try_from) {
        Some(Ok(number)) => Ok(number),
        _ => Err(FormError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

// An empty or unparseable seed means a random one.
fn parse_seed(value: &str) -> Option<i64> {
    parse_integer(value)
}

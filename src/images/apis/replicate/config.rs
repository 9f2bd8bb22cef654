use std::time::Duration;

pub static API_URL: &str = "https://api.replicate.com/v1";
pub static MODEL: &str = "stability-ai/stable-diffusion-3";

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

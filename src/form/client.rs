use crate::{
    app::util::reqwest::get_bytes,
    images::{
        dtos::generation_request::GenerationRequest, enums::output_format::OutputFormat,
        models::generation_result::GenerationResult,
    },
};

use super::{
    errors::ClientError,
    models::{downloaded_image::DownloadedImage, image_form::ImageForm},
};

/// Talks to a running proxy. Every call is a single attempt.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    client: reqwest::Client,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Builds the request from `form`, sends it and returns the url to display.
    pub async fn submit(&self, form: &ImageForm) -> Result<String, ClientError> {
        let request = form.build_request()?;
        let result = self.generate(&request).await?;

        match result.first_url() {
            Some(url) => Ok(url.to_string()),
            None => {
                tracing::error!("No image generated");
                Err(ClientError::NoImage)
            }
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ClientError> {
        let url = format!("{}/generate-image", self.base_url);
        let res = self.client.post(url).json(request).send().await?;

        let status = res.status();
        if !status.is_success() {
            let message = res.text().await?;
            tracing::error!("Error generating image: {} {}", status, message);

            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json::<GenerationResult>().await?)
    }

    pub async fn download(&self, url: &str, format: OutputFormat) -> Result<DownloadedImage, ClientError> {
        let data = get_bytes(&self.client, url).await?;

        Ok(DownloadedImage {
            file_name: format.download_file_name(),
            data,
        })
    }
}

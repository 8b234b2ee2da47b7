use async_trait::async_trait;
use std::time::Instant;

use crate::error::GenerationError;
use crate::metrics::{GENERATION_FAILURES, GENERATION_LATENCY};
use crate::models::{ImageRequest, ImageResponse};

pub const DEFAULT_MODEL: &str = "hidream";
pub const DEFAULT_SIZE: &str = "1024x1024";

/// Turns a prompt into base64-encoded image data.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// Client for the remote image generation endpoint
pub struct ImageClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    size: String,
}

impl ImageClient {
    // `api_base` without trailing path, e.g. "https://nano-gpt.com/api"
    pub fn new(http: reqwest::Client, api_base: &str, api_key: Option<String>) -> Self {
        Self {
            http,
            endpoint: format!("{}/generate-image", api_base.trim_end_matches('/')),
            api_key: api_key.unwrap_or_default(),
            model: DEFAULT_MODEL.to_string(),
            size: DEFAULT_SIZE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ImageRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
        };

        let res = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ImageResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::MalformedResponse(format!("{e}: {text}")))?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|output| output.b64_json)
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let start_time = Instant::now();
        let result = self.request_image(prompt).await;
        GENERATION_LATENCY.observe(start_time.elapsed().as_secs_f64());

        if let Err(e) = &result {
            GENERATION_FAILURES.inc();
            tracing::warn!(error = %e, model = %self.model, "image generation failed");
        }
        result
    }
}

//! GeminiApiAgent - Direct REST API implementation for Gemini and Imagen.
//!
//! Text goes through `:generateContent`, images through the Imagen `:predict`
//! endpoint. Both are authenticated with the `key` query parameter.

use async_trait::async_trait;
use marid_core::config::{AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use marid_core::error::{BackendError, MaridError, Result};
use marid_core::generation::{AiBackend, ImageGenerationRequest, TextGenerationRequest};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    text_model: String,
    image_model: String,
    base_url: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and default models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Builds an agent from `config.toml` settings.
    pub fn from_config(config: &AppConfig, api_key: impl Into<String>) -> Result<Self> {
        let settings = &config.gemini;
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| MaridError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            text_model: settings.text_model.clone(),
            image_model: settings.image_model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Overrides the text model after construction.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Points the agent at another endpoint (e.g. a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/{model}:{method}?key={api_key}",
            self.base_url,
            api_key = self.api_key
        )
    }

    async fn post_json<B, R>(&self, url: String, body: &B) -> std::result::Result<R, BackendError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| BackendError::ProcessError {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        response
            .json()
            .await
            .map_err(|err| BackendError::Other(format!("Failed to parse Gemini response: {err}")))
    }
}

#[async_trait]
impl AiBackend for GeminiApiAgent {
    async fn generate_text(
        &self,
        request: TextGenerationRequest,
    ) -> std::result::Result<String, BackendError> {
        let model = request.model.as_deref().unwrap_or(&self.text_model).to_string();
        tracing::debug!(
            "[GeminiApiAgent] generateContent model={} schema={}",
            model,
            request.response_schema.is_some()
        );

        let body = GenerateContentRequest::from(request);
        let parsed: GenerateContentResponse = self
            .post_json(self.endpoint(&model, "generateContent"), &body)
            .await?;
        extract_text_response(parsed)
    }

    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> std::result::Result<String, BackendError> {
        let model = request.model.as_deref().unwrap_or(&self.image_model).to_string();
        tracing::debug!("[GeminiApiAgent] predict model={}", model);

        let body = PredictRequest::from(request);
        let parsed: PredictResponse = self.post_json(self.endpoint(&model, "predict"), &body).await?;
        extract_image_response(parsed)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl From<TextGenerationRequest> for GenerateContentRequest {
    fn from(request: TextGenerationRequest) -> Self {
        let generation_config = if request.response_schema.is_some() || request.temperature.is_some() {
            Some(GenerationConfig {
                response_mime_type: request
                    .response_schema
                    .as_ref()
                    .map(|_| "application/json".to_string()),
                response_schema: request.response_schema,
                temperature: request.temperature,
            })
        } else {
            None
        };

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

impl From<ImageGenerationRequest> for PredictRequest {
    fn from(request: ImageGenerationRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: request.prompt,
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: request.aspect_ratio,
                output_options: OutputOptions {
                    mime_type: request.mime_type,
                },
            },
        }
    }
}

#[derive(Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Option<Vec<Prediction>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

// ============================================================================
// Response handling
// ============================================================================

fn extract_text_response(response: GenerateContentResponse) -> std::result::Result<String, BackendError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            BackendError::ExecutionFailed("Gemini API returned no text in the response candidates".into())
        })
}

fn extract_image_response(response: PredictResponse) -> std::result::Result<String, BackendError> {
    response
        .predictions
        .and_then(|predictions| predictions.into_iter().next())
        .and_then(|prediction| prediction.bytes_base64_encoded)
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| BackendError::ExecutionFailed("Image API returned no image".into()))
}

fn map_http_error(status: StatusCode, body: String) -> BackendError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    BackendError::ProcessError {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
    }
}

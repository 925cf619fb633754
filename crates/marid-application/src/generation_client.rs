//! Typed generation façade over an [`AiBackend`].
//!
//! Every operation renders its prompt, declares a response schema where the
//! reply is structured, and parses the reply into the strict domain type. Any
//! failure along the way becomes [`MaridError::Generation`] tagged with the
//! operation; partial data is never returned.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use marid_core::analysis::{InstagramAnalysis, ProfileMetricsSource};
use marid_core::brand_voice::{BrandVoice, UserInput};
use marid_core::content::ApiResponse;
use marid_core::error::{MaridError, Result};
use marid_core::generation::{
    AiBackend, GenerationClient, GenerationOperation, ImageGenerationRequest, TextGenerationRequest,
};
use marid_core::ideas::{IdeaList, SubTopicList};
use marid_core::scamper::ScamperResponse;
use marid_core::trend::TrendInfo;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::{prompts, schemas};

const CONTENT_TEMPERATURE: f32 = 0.8;
const IDEAS_TEMPERATURE: f32 = 0.9;
const SUB_TOPICS_TEMPERATURE: f32 = 0.8;
const NODE_IDEAS_TEMPERATURE: f32 = 0.9;
const SCAMPER_TEMPERATURE: f32 = 0.9;

static CODE_FENCE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?s)^```[a-zA-Z]*\s*\n?(.*?)\n?\s*```$")
        .map_err(|e| tracing::error!("[MaridGenerationClient] Invalid fence pattern: {}", e))
        .ok()
});

/// Production [`GenerationClient`].
pub struct MaridGenerationClient {
    backend: Arc<dyn AiBackend>,
    metrics: Arc<dyn ProfileMetricsSource>,
}

impl MaridGenerationClient {
    pub fn new(backend: Arc<dyn AiBackend>, metrics: Arc<dyn ProfileMetricsSource>) -> Self {
        Self { backend, metrics }
    }

    async fn request_text(
        &self,
        operation: GenerationOperation,
        request: TextGenerationRequest,
    ) -> Result<String> {
        tracing::debug!("[MaridGenerationClient] {} request", operation);
        self.backend
            .generate_text(request)
            .await
            .map_err(|e| failure(operation, e.to_string()))
    }

    async fn request_json<T>(
        &self,
        operation: GenerationOperation,
        prompt: String,
        schema: serde_json::Value,
        temperature: f32,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = TextGenerationRequest::new(prompt)
            .with_schema(schema)
            .with_temperature(temperature);
        let text = self.request_text(operation, request).await?;
        parse_json(operation, &text)
    }

    async fn request_plain(&self, operation: GenerationOperation, prompt: String) -> Result<String> {
        let text = self
            .request_text(operation, TextGenerationRequest::new(prompt))
            .await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(failure(operation, "empty reply"));
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl GenerationClient for MaridGenerationClient {
    async fn generate_content_strategy(&self, input: &UserInput) -> Result<ApiResponse> {
        let op = GenerationOperation::GenerateContentStrategy;
        let prompt = prompts::content_strategy(input).map_err(|e| failure(op, e.to_string()))?;
        self.request_json(op, prompt, schemas::content_strategy(), CONTENT_TEMPERATURE)
            .await
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let op = GenerationOperation::GenerateImage;
        let image = self
            .backend
            .generate_image(ImageGenerationRequest::square_jpeg(prompt))
            .await
            .map_err(|e| failure(op, e.to_string()))?;

        BASE64_STANDARD
            .decode(image.as_bytes())
            .map_err(|e| failure(op, format!("image payload is not base64: {e}")))?;
        Ok(image)
    }

    async fn generate_ideas_from_keyword(&self, keyword: &str) -> Result<IdeaList> {
        let op = GenerationOperation::GenerateIdeasFromKeyword;
        let prompt = prompts::ideas_from_keyword(keyword).map_err(|e| failure(op, e.to_string()))?;
        self.request_json(
            op,
            prompt,
            schemas::ideas("قائمة من 5 أفكار للمحتوى."),
            IDEAS_TEMPERATURE,
        )
        .await
    }

    async fn generate_mind_map_sub_topics(
        &self,
        main_topic: &str,
        brand_voice: Option<&BrandVoice>,
    ) -> Result<SubTopicList> {
        let op = GenerationOperation::GenerateMindMapSubTopics;
        let prompt = prompts::mind_map_sub_topics(main_topic, brand_voice)
            .map_err(|e| failure(op, e.to_string()))?;
        self.request_json(op, prompt, schemas::sub_topics(), SUB_TOPICS_TEMPERATURE)
            .await
    }

    async fn generate_content_ideas_for_node(
        &self,
        main_topic: &str,
        sub_topic: &str,
        brand_voice: Option<&BrandVoice>,
    ) -> Result<IdeaList> {
        let op = GenerationOperation::GenerateContentIdeasForNode;
        let prompt = prompts::node_content_ideas(main_topic, sub_topic, brand_voice)
            .map_err(|e| failure(op, e.to_string()))?;
        self.request_json(
            op,
            prompt,
            schemas::ideas("قائمة من 3 أفكار محتوى ملموسة."),
            NODE_IDEAS_TEMPERATURE,
        )
        .await
    }

    async fn generate_scamper_ideas(&self, source_text: &str) -> Result<ScamperResponse> {
        let op = GenerationOperation::GenerateScamperIdeas;
        let prompt = prompts::scamper_ideas(source_text).map_err(|e| failure(op, e.to_string()))?;
        self.request_json(op, prompt, schemas::scamper(), SCAMPER_TEMPERATURE)
            .await
    }

    async fn analyze_instagram_profile(&self, profile_url: &str) -> Result<InstagramAnalysis> {
        let op = GenerationOperation::AnalyzeInstagramProfile;
        let metrics = self
            .metrics
            .fetch(profile_url)
            .await
            .map_err(|e| failure(op, e.to_string()))?;

        let prompt =
            prompts::profile_insight(profile_url, &metrics).map_err(|e| failure(op, e.to_string()))?;
        let insight = self.request_plain(op, prompt).await?;
        Ok(InstagramAnalysis::new(&metrics, insight))
    }

    async fn generate_trend_draft_post(&self, trend: &TrendInfo) -> Result<String> {
        let op = GenerationOperation::GenerateTrendDraftPost;
        let prompt = prompts::trend_draft(trend).map_err(|e| failure(op, e.to_string()))?;
        self.request_plain(op, prompt).await
    }
}

fn failure(operation: GenerationOperation, message: impl Into<String>) -> MaridError {
    let err = MaridError::generation(operation, message);
    tracing::error!("[MaridGenerationClient] {}", err);
    err
}

/// Removes a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    CODE_FENCE
        .as_ref()
        .and_then(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(trimmed)
}

fn parse_json<T: DeserializeOwned>(operation: GenerationOperation, text: &str) -> Result<T> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| failure(operation, format!("reply does not match schema: {e}")))
}

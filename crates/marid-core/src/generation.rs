//! Generation seams.
//!
//! Two traits separate the workflows from the external AI service:
//!
//! - [`AiBackend`]: the raw transport (prompt in, text or image bytes out).
//!   Implemented by the Gemini REST agent.
//! - [`GenerationClient`]: the typed façade with one operation per AI task.
//!   Every structured operation declares a response schema and returns a
//!   validated value or a [`MaridError::Generation`] tagged with the
//!   operation name. Workflows depend only on this trait, so tests can stub
//!   it with canned responses.

use crate::analysis::InstagramAnalysis;
use crate::brand_voice::{BrandVoice, UserInput};
use crate::content::ApiResponse;
use crate::error::{BackendError, Result};
use crate::ideas::{IdeaList, SubTopicList};
use crate::scamper::ScamperResponse;
use crate::trend::TrendInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Names of the operations exposed by a [`GenerationClient`].
///
/// Used to tag generation failures so the workflow boundary can pick the
/// matching user-facing message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GenerationOperation {
    GenerateContentStrategy,
    GenerateImage,
    GenerateIdeasFromKeyword,
    GenerateMindMapSubTopics,
    GenerateContentIdeasForNode,
    GenerateScamperIdeas,
    AnalyzeInstagramProfile,
    GenerateTrendDraftPost,
}

/// A text generation request sent to the AI service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextGenerationRequest {
    /// Model override; the backend's configured text model is used when `None`
    pub model: Option<String>,
    /// Prompt text
    pub prompt: String,
    /// Declared response schema; when present the service is asked for JSON
    pub response_schema: Option<serde_json::Value>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl TextGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            response_schema: None,
            temperature: None,
        }
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// An image generation request. Exactly one image is produced per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageGenerationRequest {
    /// Model override; the backend's configured image model is used when `None`
    pub model: Option<String>,
    pub prompt: String,
    pub aspect_ratio: String,
    pub mime_type: String,
}

impl ImageGenerationRequest {
    /// Square JPEG, the only shape any caller needs.
    pub fn square_jpeg(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            aspect_ratio: "1:1".to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }
}

/// Raw access to the external generative AI service.
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Returns the text payload of the first candidate (JSON or plain text).
    async fn generate_text(
        &self,
        request: TextGenerationRequest,
    ) -> std::result::Result<String, BackendError>;

    /// Returns a single base64-encoded image.
    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> std::result::Result<String, BackendError>;
}

/// Typed façade over the AI service, one method per task.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Full content strategy (post, platform versions, insights) for a user idea.
    async fn generate_content_strategy(&self, input: &UserInput) -> Result<ApiResponse>;

    /// A single base64-encoded image for the prompt.
    async fn generate_image(&self, prompt: &str) -> Result<String>;

    /// Post ideas for a sector keyword.
    async fn generate_ideas_from_keyword(&self, keyword: &str) -> Result<IdeaList>;

    /// First level of a mind map.
    async fn generate_mind_map_sub_topics(
        &self,
        main_topic: &str,
        brand_voice: Option<&BrandVoice>,
    ) -> Result<SubTopicList>;

    /// Concrete ideas for one sub-topic of a mind map.
    async fn generate_content_ideas_for_node(
        &self,
        main_topic: &str,
        sub_topic: &str,
        brand_voice: Option<&BrandVoice>,
    ) -> Result<IdeaList>;

    /// Seven SCAMPER variants of the source text.
    async fn generate_scamper_ideas(&self, source_text: &str) -> Result<ScamperResponse>;

    /// Profile metrics plus a qualitative AI insight.
    async fn analyze_instagram_profile(&self, profile_url: &str) -> Result<InstagramAnalysis>;

    /// Free-form draft post tying a trend to the brand.
    async fn generate_trend_draft_post(&self, trend: &TrendInfo) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_operation_names_are_camel_case() {
        assert_eq!(
            GenerationOperation::GenerateContentStrategy.to_string(),
            "generateContentStrategy"
        );
        assert_eq!(
            GenerationOperation::AnalyzeInstagramProfile.to_string(),
            "analyzeInstagramProfile"
        );
        assert_eq!(GenerationOperation::iter().count(), 8);
    }

    #[test]
    fn test_request_builders() {
        let request = TextGenerationRequest::new("hello")
            .with_schema(serde_json::json!({"type": "OBJECT"}))
            .with_temperature(0.9);
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.temperature, Some(0.9));
        assert!(request.response_schema.is_some());

        let image = ImageGenerationRequest::square_jpeg("a cat");
        assert_eq!(image.aspect_ratio, "1:1");
        assert_eq!(image.mime_type, "image/jpeg");
    }
}

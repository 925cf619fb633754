//! Content strategy response model.

use serde::{Deserialize, Serialize};

/// The post itself plus the prompt used to illustrate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreation {
    pub post_text: String,
    pub image_prompt: String,
    pub hashtags: Vec<String>,
}

/// Platform-specific rewrites of the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAdaptation {
    pub twitter_version: String,
    pub linkedin_version: String,
}

/// Hook suggestions and a follow-up idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicInsights {
    pub hook_suggestion: Vec<String>,
    pub next_step_idea: String,
}

/// Result of the content strategy operation. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub content_creation: ContentCreation,
    pub platform_adaptation: PlatformAdaptation,
    pub strategic_insights: StrategicInsights,
}

impl ApiResponse {
    /// Prompt for the dependent image generation step.
    pub fn image_prompt(&self) -> &str {
        &self.content_creation.image_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_camel_case_sections() {
        let raw = r##"{
            "contentCreation": {"post_text": "p", "image_prompt": "i", "hashtags": ["#a"]},
            "platformAdaptation": {"twitter_version": "t", "linkedin_version": "l"},
            "strategicInsights": {"hook_suggestion": ["h"], "next_step_idea": "n"}
        }"##;
        let response: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.image_prompt(), "i");
        assert_eq!(response.content_creation.hashtags, vec!["#a"]);
        assert_eq!(response.strategic_insights.hook_suggestion, vec!["h"]);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let raw = r#"{
            "contentCreation": {"post_text": "p", "image_prompt": "i", "hashtags": []},
            "platformAdaptation": {"twitter_version": "t", "linkedin_version": "l"}
        }"#;
        assert!(serde_json::from_str::<ApiResponse>(raw).is_err());
    }
}

//! Shared test doubles for the unit tests of this crate.

use async_trait::async_trait;
use marid_core::analysis::{InstagramAnalysis, MetricsSource, ProfileMetrics};
use marid_core::brand_voice::{BrandVoice, UserInput};
use marid_core::content::{ApiResponse, ContentCreation, PlatformAdaptation, StrategicInsights};
use marid_core::error::{MaridError, Result};
use marid_core::generation::{GenerationClient, GenerationOperation};
use marid_core::ideas::{IdeaList, SubTopicList};
use marid_core::scamper::ScamperResponse;
use marid_core::store::PersistedStore;
use marid_core::trend::TrendInfo;
use marid_infrastructure::MemoryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn memory_store() -> (Arc<MemoryStore>, PersistedStore) {
    let backend = Arc::new(MemoryStore::new());
    (backend.clone(), PersistedStore::new(backend))
}

pub fn sample_input() -> UserInput {
    UserInput::new(
        "عرض خصم 20%",
        BrandVoice::new("ودي ومرح", "شباب", "", "زيادة المبيعات"),
    )
}

pub fn sample_response() -> ApiResponse {
    ApiResponse {
        content_creation: ContentCreation {
            post_text: "خصم 20% على كل شي!".to_string(),
            image_prompt: "coffee cup".to_string(),
            hashtags: vec!["#خصم".to_string()],
        },
        platform_adaptation: PlatformAdaptation {
            twitter_version: "خصم 20%".to_string(),
            linkedin_version: "عرض خاص".to_string(),
        },
        strategic_insights: StrategicInsights {
            hook_suggestion: vec!["لا تفوتك!".to_string()],
            next_step_idea: "مسابقة".to_string(),
        },
    }
}

pub fn sample_scamper() -> ScamperResponse {
    ScamperResponse {
        substitute: "s".to_string(),
        combine: "c".to_string(),
        adapt: "a".to_string(),
        modify: "m".to_string(),
        put_to_another_use: "p".to_string(),
        eliminate: "e".to_string(),
        reverse: "r".to_string(),
    }
}

/// Canned replies; `None` makes the operation fail.
#[derive(Default)]
struct Script {
    content: Option<ApiResponse>,
    image: Option<String>,
    ideas: Option<Vec<String>>,
    sub_topics: Option<Vec<String>>,
    scamper: Option<ScamperResponse>,
    insight: Option<String>,
    draft: Option<String>,
    calls: usize,
    image_prompts: Vec<String>,
    expanded: Vec<String>,
}

pub struct StubClient {
    script: Mutex<Script>,
}

impl StubClient {
    /// Every operation succeeds.
    pub fn succeeding() -> Self {
        Self {
            script: Mutex::new(Script {
                content: Some(sample_response()),
                image: Some("aW1hZ2U=".to_string()),
                ideas: Some(vec!["فكرة 1".to_string(), "فكرة 2".to_string(), "فكرة 3".to_string()]),
                sub_topics: Some(vec!["محور 1".to_string(), "محور 2".to_string()]),
                scamper: Some(sample_scamper()),
                insight: Some("أداء ممتاز.".to_string()),
                draft: Some("مسودة جاهزة".to_string()),
                ..Script::default()
            }),
        }
    }

    /// Every operation fails.
    pub fn failing() -> Self {
        Self {
            script: Mutex::new(Script::default()),
        }
    }

    pub async fn calls(&self) -> usize {
        self.script.lock().await.calls
    }

    pub async fn image_prompts(&self) -> Vec<String> {
        self.script.lock().await.image_prompts.clone()
    }

    /// Sub-topics passed to node expansion, in call order.
    pub async fn expanded(&self) -> Vec<String> {
        self.script.lock().await.expanded.clone()
    }

    pub async fn set_image(&self, image: &str) {
        self.script.lock().await.image = Some(image.to_string());
    }

    pub async fn fail_images(&self) {
        self.script.lock().await.image = None;
    }

    pub async fn fail_ideas(&self) {
        self.script.lock().await.ideas = None;
    }

    pub async fn set_ideas(&self, ideas: &[&str]) {
        self.script.lock().await.ideas = Some(ideas.iter().map(|s| s.to_string()).collect());
    }
}

fn reply<T: Clone>(value: &Option<T>, operation: GenerationOperation) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| MaridError::generation(operation, "scripted failure"))
}

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate_content_strategy(&self, _input: &UserInput) -> Result<ApiResponse> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        reply(&script.content, GenerationOperation::GenerateContentStrategy)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        script.image_prompts.push(prompt.to_string());
        reply(&script.image, GenerationOperation::GenerateImage)
    }

    async fn generate_ideas_from_keyword(&self, _keyword: &str) -> Result<IdeaList> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        reply(&script.ideas, GenerationOperation::GenerateIdeasFromKeyword)
            .map(|ideas| IdeaList { ideas })
    }

    async fn generate_mind_map_sub_topics(
        &self,
        _main_topic: &str,
        _brand_voice: Option<&BrandVoice>,
    ) -> Result<SubTopicList> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        reply(&script.sub_topics, GenerationOperation::GenerateMindMapSubTopics)
            .map(|sub_topics| SubTopicList { sub_topics })
    }

    async fn generate_content_ideas_for_node(
        &self,
        _main_topic: &str,
        sub_topic: &str,
        _brand_voice: Option<&BrandVoice>,
    ) -> Result<IdeaList> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        script.expanded.push(sub_topic.to_string());
        reply(&script.ideas, GenerationOperation::GenerateContentIdeasForNode)
            .map(|ideas| IdeaList { ideas })
    }

    async fn generate_scamper_ideas(&self, _source_text: &str) -> Result<ScamperResponse> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        reply(&script.scamper, GenerationOperation::GenerateScamperIdeas)
    }

    async fn analyze_instagram_profile(&self, _profile_url: &str) -> Result<InstagramAnalysis> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        let insight = reply(&script.insight, GenerationOperation::AnalyzeInstagramProfile)?;
        let metrics = ProfileMetrics {
            followers: 10_000,
            avg_likes: 250,
            recent_posts: 5,
            source: MetricsSource::Simulated,
        };
        Ok(InstagramAnalysis::new(&metrics, insight))
    }

    async fn generate_trend_draft_post(&self, _trend: &TrendInfo) -> Result<String> {
        let mut script = self.script.lock().await;
        script.calls += 1;
        reply(&script.draft, GenerationOperation::GenerateTrendDraftPost)
    }
}

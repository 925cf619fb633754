use async_trait::async_trait;
use marid_core::analysis::InstagramAnalysis;
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
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub const FIXED_IMAGE: &str = "ZmFrZS1qcGVn";

pub fn memory_store() -> PersistedStore {
    memory_backend().1
}

/// The store together with its backend, for tests that toggle write failures.
pub fn memory_backend() -> (Arc<MemoryStore>, PersistedStore) {
    let backend = Arc::new(MemoryStore::new());
    (backend.clone(), PersistedStore::new(backend))
}

pub fn fixed_response() -> ApiResponse {
    ApiResponse {
        content_creation: ContentCreation {
            post_text: "يا هلا! خصم 20% لفترة محدودة".to_string(),
            image_prompt: "bright sale banner".to_string(),
            hashtags: vec!["#عروض".to_string(), "#خصم".to_string()],
        },
        platform_adaptation: PlatformAdaptation {
            twitter_version: "خصم 20% الحين".to_string(),
            linkedin_version: "عرض لفترة محدودة".to_string(),
        },
        strategic_insights: StrategicInsights {
            hook_suggestion: vec!["لا يفوتك".to_string()],
            next_step_idea: "سحب على جوائز".to_string(),
        },
    }
}

/// Content and image replies only; other operations fail.
pub struct ContentStub {
    pub content: Option<ApiResponse>,
    pub image: Option<String>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ContentStub {
    pub fn new(content: Option<ApiResponse>, image: Option<&str>) -> Self {
        Self {
            content,
            image: image.map(str::to_string),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Content calls wait for a notification on `gate` before replying.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn unscripted<T>(&self, operation: GenerationOperation) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MaridError::generation(operation, "not scripted"))
    }
}

#[async_trait]
impl GenerationClient for ContentStub {
    async fn generate_content_strategy(&self, _input: &UserInput) -> Result<ApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.content.clone().ok_or_else(|| {
            MaridError::generation(GenerationOperation::GenerateContentStrategy, "HTTP 500")
        })
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.image
            .clone()
            .ok_or_else(|| MaridError::generation(GenerationOperation::GenerateImage, "HTTP 429"))
    }

    async fn generate_ideas_from_keyword(&self, _keyword: &str) -> Result<IdeaList> {
        self.unscripted(GenerationOperation::GenerateIdeasFromKeyword)
    }

    async fn generate_mind_map_sub_topics(
        &self,
        _main_topic: &str,
        _brand_voice: Option<&BrandVoice>,
    ) -> Result<SubTopicList> {
        self.unscripted(GenerationOperation::GenerateMindMapSubTopics)
    }

    async fn generate_content_ideas_for_node(
        &self,
        _main_topic: &str,
        _sub_topic: &str,
        _brand_voice: Option<&BrandVoice>,
    ) -> Result<IdeaList> {
        self.unscripted(GenerationOperation::GenerateContentIdeasForNode)
    }

    async fn generate_scamper_ideas(&self, _source_text: &str) -> Result<ScamperResponse> {
        self.unscripted(GenerationOperation::GenerateScamperIdeas)
    }

    async fn analyze_instagram_profile(&self, _profile_url: &str) -> Result<InstagramAnalysis> {
        self.unscripted(GenerationOperation::AnalyzeInstagramProfile)
    }

    async fn generate_trend_draft_post(&self, _trend: &TrendInfo) -> Result<String> {
        self.unscripted(GenerationOperation::GenerateTrendDraftPost)
    }
}

//! Profile analysis.

use crate::error::WorkflowResult;
use marid_core::analysis::{InstagramAnalysis, validate_profile_url};
use marid_core::generation::GenerationClient;
use std::sync::Arc;

pub struct ProfileAnalyzer {
    client: Arc<dyn GenerationClient>,
}

impl ProfileAnalyzer {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, profile_url: &str) -> WorkflowResult<InstagramAnalysis> {
        let profile_url = profile_url.trim();
        validate_profile_url(profile_url)?;
        tracing::info!("[ProfileAnalyzer] Analyzing {}", profile_url);
        Ok(self.client.analyze_instagram_profile(profile_url).await?)
    }
}

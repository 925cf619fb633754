//! Trend radar: drafts that tie a trend to the brand.

use crate::error::{WorkflowError, WorkflowResult};
use marid_core::error::MaridError;
use marid_core::generation::GenerationClient;
use marid_core::trend::{TrendInfo, TrendSuggestion, seed_suggestions};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory suggestion list, newest first. Starts with the static seeds.
pub struct TrendRadar {
    client: Arc<dyn GenerationClient>,
    suggestions: RwLock<Vec<TrendSuggestion>>,
}

impl TrendRadar {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            suggestions: RwLock::new(seed_suggestions()),
        }
    }

    pub async fn list(&self) -> Vec<TrendSuggestion> {
        self.suggestions.read().await.clone()
    }

    /// Drafts a post for a user-described trend and puts it first.
    pub async fn add_trend(&self, trend: TrendInfo) -> WorkflowResult<TrendSuggestion> {
        let description = trend.description.trim();
        if description.is_empty() {
            return Err(MaridError::validation("description").into());
        }

        let draft = self.client.generate_trend_draft_post(&trend).await?;
        let suggestion = TrendSuggestion::from_description(description, draft);
        self.suggestions.write().await.insert(0, suggestion.clone());
        tracing::info!("[TrendRadar] Added '{}'", suggestion.trend_title);
        Ok(suggestion)
    }

    pub async fn discard(&self, id: &str) -> WorkflowResult<()> {
        let mut suggestions = self.suggestions.write().await;
        let before = suggestions.len();
        suggestions.retain(|s| s.id != id);
        if suggestions.len() == before {
            return Err(WorkflowError::from(MaridError::not_found("TrendSuggestion", id)));
        }
        Ok(())
    }

    /// Draft text of a suggestion, to be used as a content idea.
    pub async fn take_draft(&self, id: &str) -> WorkflowResult<String> {
        self.suggestions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.draft_post.clone())
            .ok_or_else(|| MaridError::not_found("TrendSuggestion", id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::test_support::StubClient;
    use marid_core::trend::NEW_TREND_TITLE_PREFIX;

    #[tokio::test]
    async fn test_starts_with_seeds() {
        let radar = TrendRadar::new(Arc::new(StubClient::succeeding()));
        let ids: Vec<String> = radar.list().await.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_add_trend_prepends_titled_draft() {
        let radar = TrendRadar::new(Arc::new(StubClient::succeeding()));
        let description = "هاشتاق عن موسم الرياض يتصدر منصة إكس اليوم";

        let added = radar.add_trend(TrendInfo::new(description)).await.unwrap();

        let excerpt: String = description.chars().take(30).collect();
        assert_eq!(added.trend_title, format!("{NEW_TREND_TITLE_PREFIX}{excerpt}..."));
        assert_eq!(added.draft_post, "مسودة جاهزة");
        assert_eq!(radar.list().await[0], added);
    }

    #[tokio::test]
    async fn test_blank_description_rejected() {
        let radar = TrendRadar::new(Arc::new(StubClient::succeeding()));
        let err = radar.add_trend(TrendInfo::new("  ")).await.unwrap_err();
        assert_eq!(err.user_message(), messages::TREND_DESCRIPTION_REQUIRED);
    }

    #[tokio::test]
    async fn test_failure_leaves_list_unchanged() {
        let radar = TrendRadar::new(Arc::new(StubClient::failing()));
        let err = radar.add_trend(TrendInfo::new("trend")).await.unwrap_err();
        assert_eq!(err.user_message(), messages::TREND_FAILED);
        assert_eq!(radar.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_discard_and_take() {
        let radar = TrendRadar::new(Arc::new(StubClient::succeeding()));
        assert!(radar.take_draft("1").await.unwrap().contains("قهوة"));
        radar.discard("1").await.unwrap();
        assert!(radar.take_draft("1").await.is_err());
        assert!(radar.discard("1").await.unwrap_err().is_rejected());
    }
}

//! Ideas bank: post ideas for a sector keyword.

use crate::error::WorkflowResult;
use marid_core::error::MaridError;
use marid_core::generation::GenerationClient;
use marid_core::ideas::IDEA_KEYWORDS;
use std::sync::Arc;

pub struct IdeasBankService {
    client: Arc<dyn GenerationClient>,
}

impl IdeasBankService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Sector keywords offered as shortcuts.
    pub fn keywords(&self) -> &'static [&'static str] {
        &IDEA_KEYWORDS
    }

    pub async fn generate(&self, keyword: &str) -> WorkflowResult<Vec<String>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(MaridError::validation("keyword").into());
        }
        tracing::info!("[IdeasBankService] Ideas for '{}'", keyword);
        let list = self.client.generate_ideas_from_keyword(keyword).await?;
        Ok(list.ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::test_support::StubClient;

    #[tokio::test]
    async fn test_generate_returns_ideas() {
        let service = IdeasBankService::new(Arc::new(StubClient::succeeding()));
        assert_eq!(service.keywords().len(), 8);
        let ideas = service.generate(service.keywords()[1]).await.unwrap();
        assert_eq!(ideas.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_keyword_and_failure() {
        let client = Arc::new(StubClient::failing());
        let service = IdeasBankService::new(client.clone());
        assert!(service.generate("").await.unwrap_err().is_rejected());
        assert_eq!(client.calls().await, 0);

        let err = service.generate("تقنية").await.unwrap_err();
        assert_eq!(err.user_message(), messages::IDEAS_FAILED);
    }
}

//! SCAMPER ideation.

use crate::error::WorkflowResult;
use marid_core::error::MaridError;
use marid_core::generation::GenerationClient;
use marid_core::scamper::ScamperSuggestion;
use std::sync::Arc;

pub struct ScamperService {
    client: Arc<dyn GenerationClient>,
}

impl ScamperService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Seven variants of `source_text`, always in S-C-A-M-P-E-R order.
    pub async fn generate(&self, source_text: &str) -> WorkflowResult<Vec<ScamperSuggestion>> {
        if source_text.trim().is_empty() {
            return Err(MaridError::validation("source_text").into());
        }
        let response = self.client.generate_scamper_ideas(source_text.trim()).await?;
        Ok(response.to_suggestions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::test_support::StubClient;

    #[tokio::test]
    async fn test_suggestions_in_table_order() {
        let service = ScamperService::new(Arc::new(StubClient::succeeding()));
        let suggestions = service.generate("اطلب الحين").await.unwrap();
        let letters: Vec<&str> = suggestions.iter().map(|s| s.letter.as_str()).collect();
        assert_eq!(letters, vec!["S", "C", "A", "M", "P", "E", "R"]);
    }

    #[tokio::test]
    async fn test_blank_text_rejected() {
        let client = Arc::new(StubClient::succeeding());
        let service = ScamperService::new(client.clone());
        assert!(service.generate(" \n").await.unwrap_err().is_rejected());
        assert_eq!(client.calls().await, 0);
    }

    #[tokio::test]
    async fn test_failure_is_localized() {
        let service = ScamperService::new(Arc::new(StubClient::failing()));
        let err = service.generate("hook").await.unwrap_err();
        assert_eq!(err.user_message(), messages::SCAMPER_FAILED);
    }
}

//! Mind map workflow.
//!
//! Generating a map is one request; expanding a sub-topic into idea leaves is
//! a separate request scoped to that node. Expansions carry a per-node loading
//! flag, so several sub-topics can expand at the same time.

use crate::error::{WorkflowError, WorkflowResult};
use crate::messages;
use marid_core::brand_voice::{BrandVoice, UserInput};
use marid_core::content::ApiResponse;
use marid_core::error::MaridError;
use marid_core::generation::{GenerationClient, GenerationOperation};
use marid_core::mind_map::{MindMapNode, NodeKind};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapState {
    pub main_topic: String,
    pub root: Option<Arc<MindMapNode>>,
    /// Map-level loading flag (sub-topic generation only)
    pub is_loading: bool,
    pub error: Option<String>,
    pub voice: Option<BrandVoice>,
}

pub struct MindMapWorkflow {
    client: Arc<dyn GenerationClient>,
    state: RwLock<MindMapState>,
}

impl MindMapWorkflow {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            state: RwLock::new(MindMapState::default()),
        }
    }

    pub async fn snapshot(&self) -> MindMapState {
        self.state.read().await.clone()
    }

    pub async fn root(&self) -> Option<Arc<MindMapNode>> {
        self.state.read().await.root.clone()
    }

    /// Builds a new map for `topic`, replacing any existing one.
    pub async fn generate_map(
        &self,
        topic: &str,
        voice: Option<BrandVoice>,
    ) -> WorkflowResult<Arc<MindMapNode>> {
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return Err(MaridError::validation("main_topic").into());
        }

        {
            let mut state = self.state.write().await;
            if state.is_loading {
                return Err(MaridError::invalid_state("a map is already being generated").into());
            }
            state.is_loading = true;
            state.error = None;
            state.root = None;
            state.main_topic = topic.clone();
            state.voice = voice.clone();
        }
        tracing::info!("[MindMapWorkflow] Generating map for '{}'", topic);

        let result = self
            .client
            .generate_mind_map_sub_topics(&topic, voice.as_ref())
            .await;

        let mut state = self.state.write().await;
        state.is_loading = false;
        match result {
            Ok(list) => {
                let root = MindMapNode::root(topic, list.sub_topics);
                state.root = Some(root.clone());
                Ok(root)
            }
            Err(e) => {
                let err = WorkflowError::from(e);
                state.error = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// Expands a childless sub-topic into idea leaves.
    pub async fn expand_node(&self, node_id: &str) -> WorkflowResult<Arc<MindMapNode>> {
        let (main_topic, sub_topic, voice) = {
            let mut state = self.state.write().await;
            let root = state
                .root
                .clone()
                .ok_or_else(|| WorkflowError::from(MaridError::invalid_state("no mind map")))?;
            let node = root
                .find(node_id)
                .ok_or_else(|| WorkflowError::from(MaridError::not_found("MindMapNode", node_id)))?;
            if !node.is_expandable() {
                return Err(MaridError::invalid_state(format!(
                    "node '{}' cannot be expanded",
                    node_id
                ))
                .into());
            }
            let sub_topic = node.text.clone();
            state.root = root.with_loading(node_id, true);
            (state.main_topic.clone(), sub_topic, state.voice.clone())
        };
        tracing::debug!("[MindMapWorkflow] Expanding '{}'", sub_topic);

        let result = self
            .client
            .generate_content_ideas_for_node(&main_topic, &sub_topic, voice.as_ref())
            .await;

        let mut state = self.state.write().await;
        let Some(root) = state.root.clone().filter(|root| root.contains(node_id)) else {
            tracing::warn!("[MindMapWorkflow] Map replaced while expanding '{}'", node_id);
            return Err(MaridError::not_found("MindMapNode", node_id).into());
        };

        match result {
            Ok(list) => {
                let updated = root
                    .with_ideas(node_id, list.ideas)
                    .ok_or_else(|| WorkflowError::from(MaridError::not_found("MindMapNode", node_id)))?;
                state.root = Some(updated.clone());
                Ok(updated)
            }
            Err(e) => {
                state.root = root.with_loading(node_id, false);
                Err(e.into())
            }
        }
    }

    /// Runs the content strategy for an idea node.
    pub async fn develop_idea(&self, node_id: &str) -> WorkflowResult<ApiResponse> {
        let (text, voice) = self.idea_node(node_id).await?;
        let input = UserInput::new(text, voice.unwrap_or_default());
        self.client
            .generate_content_strategy(&input)
            .await
            .map_err(|e| {
                tracing::error!("[MindMapWorkflow] {}", e);
                WorkflowError::failed(
                    GenerationOperation::GenerateContentStrategy,
                    messages::NODE_CONTENT_FAILED,
                )
            })
    }

    /// Generates an image for an idea node.
    pub async fn visualize_idea(&self, node_id: &str) -> WorkflowResult<String> {
        let (text, _) = self.idea_node(node_id).await?;
        self.client.generate_image(&text).await.map_err(|e| {
            tracing::error!("[MindMapWorkflow] {}", e);
            WorkflowError::failed(GenerationOperation::GenerateImage, messages::NODE_IMAGE_FAILED)
        })
    }

    async fn idea_node(&self, node_id: &str) -> WorkflowResult<(String, Option<BrandVoice>)> {
        let state = self.state.read().await;
        let node = state
            .root
            .as_ref()
            .and_then(|root| root.find(node_id))
            .ok_or_else(|| WorkflowError::from(MaridError::not_found("MindMapNode", node_id)))?;
        if node.kind != NodeKind::Idea {
            return Err(MaridError::invalid_state("only idea nodes can be developed").into());
        }
        Ok((node.text.clone(), state.voice.clone()))
    }
}

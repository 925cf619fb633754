//! Content generation workflow.
//!
//! One cycle runs two sequential steps: the content strategy call, then the
//! image call for its `image_prompt`. The image step is non-critical. If it
//! fails the content result stays visible, a history entry is still recorded
//! (without an image) and an image note is appended to the displayed error.
//!
//! ```text
//! Idle ─► GeneratingContent ─┬─► ContentFailed
//!                            └─► GeneratingImage ─┬─► Completed
//!                                                 └─► ImageFailed
//! ```

use crate::error::{WorkflowError, WorkflowResult};
use crate::history_service::HistoryService;
use crate::messages;
use crate::voice_library::VoiceLibrary;
use marid_core::brand_voice::{BrandVoice, UserInput};
use marid_core::content::ApiResponse;
use marid_core::error::MaridError;
use marid_core::generation::{GenerationClient, GenerationOperation};
use marid_core::history::HistoryItem;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    #[default]
    Idle,
    GeneratingContent,
    GeneratingImage,
    Completed,
    ContentFailed,
    ImageFailed,
}

impl GenerationPhase {
    /// A call is in flight; new cycles are refused.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::GeneratingContent | Self::GeneratingImage)
    }
}

/// Observable state of the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub phase: GenerationPhase,
    pub user_input: UserInput,
    pub response: Option<ApiResponse>,
    pub image: Option<String>,
    /// Localized message for display
    pub error: Option<String>,
    /// History entry created by the last successful content step
    pub active_history_id: Option<String>,
}

pub struct ContentWorkflow {
    client: Arc<dyn GenerationClient>,
    history: Arc<HistoryService>,
    voices: Arc<VoiceLibrary>,
    state: RwLock<WorkflowState>,
    /// Held for the duration of one generate or regenerate cycle
    cycle: Mutex<()>,
}

/// Admits one cycle at a time.
///
/// If the cycle's future is dropped while a call is pending, the busy phase is
/// replaced with `on_cancel`; the permit is released either way.
struct CycleGuard<'a> {
    state: &'a RwLock<WorkflowState>,
    on_cancel: GenerationPhase,
    _permit: MutexGuard<'a, ()>,
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        match self.state.try_write() {
            Ok(mut state) if state.phase.is_busy() => {
                tracing::warn!(
                    "[ContentWorkflow] Cycle abandoned in {:?}, phase reset",
                    state.phase
                );
                state.phase = self.on_cancel;
            }
            Ok(_) => {}
            Err(_) => tracing::warn!("[ContentWorkflow] Cycle abandoned, phase left as is"),
        }
    }
}

impl ContentWorkflow {
    pub fn new(
        client: Arc<dyn GenerationClient>,
        history: Arc<HistoryService>,
        voices: Arc<VoiceLibrary>,
    ) -> Self {
        Self {
            client,
            history,
            voices,
            state: RwLock::new(WorkflowState::default()),
            cycle: Mutex::new(()),
        }
    }

    fn begin_cycle(&self, on_cancel: GenerationPhase) -> WorkflowResult<CycleGuard<'_>> {
        let permit = self.cycle.try_lock().map_err(|_| {
            WorkflowError::from(MaridError::invalid_state(
                "a generation is already in progress",
            ))
        })?;
        Ok(CycleGuard {
            state: &self.state,
            on_cancel,
            _permit: permit,
        })
    }

    pub async fn snapshot(&self) -> WorkflowState {
        self.state.read().await.clone()
    }

    pub async fn set_user_input(&self, input: UserInput) {
        self.state.write().await.user_input = input;
    }

    /// Replaces only the idea, e.g. with a trend draft or a SCAMPER variant.
    pub async fn set_idea(&self, idea: impl Into<String>) {
        self.state.write().await.user_input.user_idea = idea.into();
    }

    /// Runs one full generation cycle for the current input.
    ///
    /// Returns `Ok` whenever the content step succeeded, even if the image
    /// step failed; the returned state tells the two apart.
    pub async fn generate(&self) -> WorkflowResult<WorkflowState> {
        let _cycle = self.begin_cycle(GenerationPhase::Idle)?;
        let input = {
            let mut state = self.state.write().await;
            state.user_input.validate().map_err(WorkflowError::from)?;

            state.phase = GenerationPhase::GeneratingContent;
            state.response = None;
            state.image = None;
            state.error = None;
            state.active_history_id = None;
            state.user_input.clone()
        };
        tracing::info!("[ContentWorkflow] Generating content");

        let response = match self.client.generate_content_strategy(&input).await {
            Ok(response) => response,
            Err(e) => {
                let err = WorkflowError::from(e);
                let mut state = self.state.write().await;
                state.phase = GenerationPhase::ContentFailed;
                state.error = Some(err.user_message().to_string());
                return Err(err);
            }
        };

        {
            let mut state = self.state.write().await;
            state.phase = GenerationPhase::GeneratingImage;
            state.response = Some(response.clone());
        }

        let image = match self.client.generate_image(response.image_prompt()).await {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("[ContentWorkflow] Image step failed: {}", e);
                None
            }
        };

        let item = HistoryItem::new(input, response, image.clone());
        let item_id = item.id.clone();
        self.history.prepend(item).await;

        let mut state = self.state.write().await;
        state.active_history_id = Some(item_id);
        if image.is_some() {
            state.image = image;
            state.phase = GenerationPhase::Completed;
        } else {
            append_image_note(&mut state.error);
            state.phase = GenerationPhase::ImageFailed;
        }
        Ok(state.clone())
    }

    /// Produces a new image for the current content and patches the history
    /// entry recorded for it.
    pub async fn regenerate_image(&self) -> WorkflowResult<WorkflowState> {
        let mut cycle = self.begin_cycle(GenerationPhase::Idle)?;
        let (prompt, history_id) = {
            let mut state = self.state.write().await;
            let Some(response) = state.response.as_ref() else {
                return Err(WorkflowError::from(MaridError::invalid_state(
                    "no generated content to illustrate",
                )));
            };
            let prompt = response.image_prompt().to_string();

            cycle.on_cancel = state.phase;
            state.phase = GenerationPhase::GeneratingImage;
            state.image = None;
            (prompt, state.active_history_id.clone())
        };

        match self.client.generate_image(&prompt).await {
            Ok(image) => {
                if let Some(id) = history_id.as_deref() {
                    if let Err(e) = self.history.attach_image(id, image.clone()).await {
                        tracing::warn!("[ContentWorkflow] History entry not patched: {}", e);
                    }
                }
                let mut state = self.state.write().await;
                state.image = Some(image);
                state.phase = GenerationPhase::Completed;
                Ok(state.clone())
            }
            Err(e) => {
                tracing::error!("[ContentWorkflow] Image regeneration failed: {}", e);
                let mut state = self.state.write().await;
                append_image_note(&mut state.error);
                state.phase = GenerationPhase::ImageFailed;
                Err(WorkflowError::failed(
                    GenerationOperation::GenerateImage,
                    state.error.clone().unwrap_or_default(),
                ))
            }
        }
    }

    /// Makes a saved voice the active one.
    pub async fn load_voice(&self, id: &str) -> WorkflowResult<BrandVoice> {
        let voice = self
            .voices
            .get(id)
            .await
            .ok_or_else(|| WorkflowError::from(MaridError::not_found("BrandVoice", id)))?;
        self.state.write().await.user_input.brand_voice = voice.clone();
        Ok(voice)
    }

    /// Saves the active voice under `name`.
    pub async fn save_voice(&self, name: &str) -> WorkflowResult<BrandVoice> {
        let voice = self.state.read().await.user_input.brand_voice.clone();
        Ok(self.voices.save(&voice, name).await?)
    }

    /// Deletes a saved voice; if it is the active one, the active voice is
    /// reset to empty fields.
    pub async fn delete_voice(&self, id: &str) -> WorkflowResult<()> {
        self.voices.delete(id).await?;
        let mut state = self.state.write().await;
        if state.user_input.brand_voice.id.as_deref() == Some(id) {
            state.user_input.brand_voice = BrandVoice::default();
        }
        Ok(())
    }
}

fn append_image_note(error: &mut Option<String>) {
    let note = match error.take() {
        Some(existing) => format!("{existing}{}", messages::IMAGE_FAILED_NOTE),
        None => messages::IMAGE_FAILED_NOTE.trim().to_string(),
    };
    *error = Some(note);
}

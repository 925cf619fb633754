//! Application layer for Marid.
//!
//! The generation façade and one orchestrator per page. Orchestrators own
//! their persisted keys and convert generation failures into localized
//! messages at their boundary.

pub mod content_workflow;
pub mod error;
pub mod generation_client;
pub mod history_service;
pub mod ideas_bank;
pub mod messages;
pub mod mind_map_workflow;
pub mod profile_analyzer;
pub mod prompts;
pub mod scamper_service;
pub mod schemas;
pub mod scouting_catalog;
pub mod simulated_metrics;
pub mod trend_radar;
pub mod voice_library;

#[cfg(test)]
mod test_support;

pub use content_workflow::{ContentWorkflow, GenerationPhase, WorkflowState};
pub use error::{WorkflowError, WorkflowResult};
pub use generation_client::MaridGenerationClient;
pub use history_service::HistoryService;
pub use ideas_bank::IdeasBankService;
pub use mind_map_workflow::{MindMapState, MindMapWorkflow};
pub use profile_analyzer::ProfileAnalyzer;
pub use scamper_service::ScamperService;
pub use scouting_catalog::ScoutingCatalog;
pub use simulated_metrics::SimulatedMetrics;
pub use trend_radar::TrendRadar;
pub use voice_library::VoiceLibrary;

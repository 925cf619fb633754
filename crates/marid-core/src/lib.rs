//! Domain layer for Marid.
//!
//! Models, the error taxonomy, the persisted-store contract and the
//! generation seams shared by every other crate.

pub mod agency;
pub mod analysis;
pub mod brand_voice;
pub mod config;
pub mod content;
pub mod error;
pub mod generation;
pub mod history;
pub mod ideas;
pub mod mind_map;
pub mod scamper;
pub mod store;
pub mod trend;

// Re-export common types
pub use error::{BackendError, MaridError, Result};
pub use generation::{AiBackend, GenerationClient, GenerationOperation};
pub use store::{KeyValueStore, PersistedStore};

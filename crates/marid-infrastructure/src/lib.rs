//! Infrastructure layer for Marid: storage backends, paths and configuration.

pub mod config_service;
pub mod json_file_store;
pub mod memory_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_file_store::JsonFileStore;
pub use crate::memory_store::MemoryStore;
pub use crate::paths::MaridPaths;

pub mod content;
pub mod ideation;
pub mod library;

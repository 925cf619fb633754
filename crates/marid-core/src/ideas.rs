//! Idea list responses and the ideas-bank keyword catalog.

use serde::{Deserialize, Serialize};

/// Sector keywords offered by the ideas bank.
pub const IDEA_KEYWORDS: [&str; 8] = [
    "عقارات",
    "مطاعم وكافيهات",
    "تسويق رقمي",
    "موضة وأزياء",
    "صحة ولياقة",
    "سفر وسياحة",
    "تقنية",
    "تعليم",
];

/// `{ ideas: [...] }`, returned by the keyword and node-expansion operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaList {
    pub ideas: Vec<String>,
}

/// `{ sub_topics: [...] }`, the first level of a mind map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTopicList {
    pub sub_topics: Vec<String>,
}

//! Brand voice and generation input models.

use crate::error::{MaridError, Result};
use serde::{Deserialize, Serialize};

/// Tone presets offered when composing a brand voice.
pub const TONE_OPTIONS: [&str; 6] = [
    "احترافي",
    "ودي ومرح",
    "شبابي وعصري",
    "رسمي وجاد",
    "حماسي وملهم",
    "فاخر وراقي",
];

/// Goal presets offered when composing a brand voice.
pub const GOAL_OPTIONS: [&str; 6] = [
    "زيادة الوعي بالعلامة التجارية",
    "زيادة المبيعات بشكل مباشر",
    "جذب عملاء محتملين",
    "تعزيز التفاعل والمشاركة",
    "بناء مجتمع حول العلامة التجارية",
    "تثقيف الجمهور",
];

/// A reusable profile of tone, audience, keywords and goals.
///
/// `id` and `name` are only set on voices stored in the voice library; a voice
/// used for a one-off generation may omit both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandVoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub tone: String,
    pub audience: String,
    pub keywords: String,
    pub goals: String,
}

impl BrandVoice {
    pub fn new(
        tone: impl Into<String>,
        audience: impl Into<String>,
        keywords: impl Into<String>,
        goals: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: None,
            tone: tone.into(),
            audience: audience.into(),
            keywords: keywords.into(),
            goals: goals.into(),
        }
    }

    /// Returns a copy identified for storage in the voice library.
    pub fn saved_as(&self, name: impl Into<String>) -> Self {
        Self {
            id: Some(uuid::Uuid::new_v4().to_string()),
            name: Some(name.into()),
            ..self.clone()
        }
    }

    /// Whether this voice can be retrieved from the saved list.
    pub fn is_saved(&self) -> bool {
        self.id.is_some() && self.name.is_some()
    }
}

/// A content generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub user_idea: String,
    pub brand_voice: BrandVoice,
    /// Examples of past successful posts used to imitate the style (optional)
    #[serde(default)]
    pub context_vectors: String,
}

impl UserInput {
    pub fn new(user_idea: impl Into<String>, brand_voice: BrandVoice) -> Self {
        Self {
            user_idea: user_idea.into(),
            brand_voice,
            context_vectors: String::new(),
        }
    }

    /// Checks that the idea, tone, audience and goals are non-blank.
    ///
    /// Keywords and context vectors are optional.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("user_idea", &self.user_idea),
            ("tone", &self.brand_voice.tone),
            ("audience", &self.brand_voice.audience),
            ("goals", &self.brand_voice.goals),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MaridError::validation(field));
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

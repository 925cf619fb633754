//! Trend radar models.

use serde::{Deserialize, Serialize};

/// Prefix of the title given to user-submitted trends.
pub const NEW_TREND_TITLE_PREFIX: &str = "ترند جديد: ";

/// Number of description characters kept in a generated title.
const TITLE_EXCERPT_CHARS: usize = 30;

/// A ready-to-use draft tied to a trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSuggestion {
    pub id: String,
    pub trend_title: String,
    pub draft_post: String,
}

impl TrendSuggestion {
    /// Builds a suggestion for a user-described trend.
    pub fn from_description(description: &str, draft_post: impl Into<String>) -> Self {
        let excerpt: String = description.chars().take(TITLE_EXCERPT_CHARS).collect();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trend_title: format!("{NEW_TREND_TITLE_PREFIX}{excerpt}..."),
            draft_post: draft_post.into(),
        }
    }
}

/// User description of a trend to draft a post for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendInfo {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether the user attached an image (the image itself is not sent)
    #[serde(default)]
    pub has_image: bool,
}

impl TrendInfo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// The link, if present and non-blank.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Static examples shown before the user adds any trend.
pub fn seed_suggestions() -> Vec<TrendSuggestion> {
    vec![
        TrendSuggestion {
            id: "1".to_string(),
            trend_title: "ترند اليوم: اليوم العالمي للقهوة ☕".to_string(),
            draft_post: "بمناسبة اليوم العالمي للقهوة، كيف تحبون قهوتكم؟ شاركونا في التعليقات! السعودية كلها تحتفل اليوم. #اليوم_العالمي_للقهوة #قهوة_سعودية".to_string(),
        },
        TrendSuggestion {
            id: "2".to_string(),
            trend_title: "منافس يطلق منتج جديد".to_string(),
            draft_post: "لاحظنا إطلاق منتج جديد في السوق اليوم. هذا يذكرنا بأهمية [الميزة الفريدة لمنتجك] التي تضمن لكم [الفائدة الرئيسية]. الجودة دائمًا تتحدث عن نفسها. #الجودة_أولاً".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_keeps_first_thirty_chars() {
        let description = "ا".repeat(40);
        let suggestion = TrendSuggestion::from_description(&description, "draft");
        let expected = format!("{NEW_TREND_TITLE_PREFIX}{}...", "ا".repeat(30));
        assert_eq!(suggestion.trend_title, expected);
    }

    #[test]
    fn test_short_description_title() {
        let suggestion = TrendSuggestion::from_description("عيد", "draft");
        assert_eq!(suggestion.trend_title, "ترند جديد: عيد...");
    }

    #[test]
    fn test_blank_link_is_absent() {
        let mut info = TrendInfo::new("x");
        info.link = Some("  ".into());
        assert_eq!(info.link(), None);
    }
}

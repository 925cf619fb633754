//! Scouting catalog model.

use crate::error::{MaridError, Result};
use serde::{Deserialize, Serialize};

/// An agency website kept for inspiration. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub website: String,
}

impl Agency {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            website: website.into(),
        }
    }

    /// Name and website are required.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MaridError::validation("name"));
        }
        if self.website.trim().is_empty() {
            return Err(MaridError::validation("website"));
        }
        Ok(())
    }
}

/// Catalog used when nothing has been stored yet.
pub fn default_agencies() -> Vec<Agency> {
    vec![
        Agency::new(
            "UM7",
            "وكالة رائدة في التسويق الرقمي والحلول الإبداعية، متخصصة في بناء وتطوير العلامات التجارية في السعودية.",
            "https://um7.sa",
        ),
        Agency::new(
            "Leo Burnett KSA",
            "جزء من شبكة إعلانية عالمية، تشتهر بحملاتها الإبداعية المؤثرة وقدرتها على بناء علاقات قوية بين العلامات التجارية والجمهور.",
            "https://leoburnett.com/saudi-arabia",
        ),
        Agency::new(
            "Blue",
            "وكالة إبداعية تقدم حلولاً متكاملة في التسويق والإعلان الرقمي وتركز على تحقيق نتائج ملموسة لعملائها.",
            "https://byblue.sa",
        ),
        Agency::new(
            "3Points",
            "وكالة متخصصة في الاتصال الإبداعي والاستراتيجي، تقدم خدمات في الإعلان والعلاقات العامة وإدارة الفعاليات.",
            "https://3pts.com",
        ),
        Agency::new(
            "Extend",
            "تقدم حلول تسويقية مبتكرة وتصاميم إبداعية تساعد العلامات التجارية على النمو والتوسع في السوق الرقمي.",
            "https://extend.com.sa",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_unique_names() {
        let agencies = default_agencies();
        let mut names: Vec<&str> = agencies.iter().map(|a| a.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_validation() {
        assert!(Agency::new("A", "", "https://a.sa").validate().is_ok());
        assert_eq!(
            Agency::new(" ", "", "https://a.sa").validate(),
            Err(MaridError::validation("name"))
        );
        assert_eq!(
            Agency::new("A", "desc", "").validate(),
            Err(MaridError::validation("website"))
        );
    }
}

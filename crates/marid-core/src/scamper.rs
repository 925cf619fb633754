//! SCAMPER ideation model.
//!
//! The service returns seven keyed variants. Presentation order always comes
//! from [`SCAMPER_TABLE`], never from the order of keys in the reply.

use serde::{Deserialize, Serialize};

/// One of the seven SCAMPER facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamperKey {
    Substitute,
    Combine,
    Adapt,
    Modify,
    PutToAnotherUse,
    Eliminate,
    Reverse,
}

impl ScamperKey {
    /// JSON field name used in the response schema.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Substitute => "substitute",
            Self::Combine => "combine",
            Self::Adapt => "adapt",
            Self::Modify => "modify",
            Self::PutToAnotherUse => "put_to_another_use",
            Self::Eliminate => "eliminate",
            Self::Reverse => "reverse",
        }
    }
}

/// Display metadata for a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScamperFacet {
    pub key: ScamperKey,
    pub letter: &'static str,
    pub title: &'static str,
    pub accent: &'static str,
}

pub const SCAMPER_TABLE: [ScamperFacet; 7] = [
    ScamperFacet {
        key: ScamperKey::Substitute,
        letter: "S",
        title: "استبدال (Substitute)",
        accent: "blue",
    },
    ScamperFacet {
        key: ScamperKey::Combine,
        letter: "C",
        title: "دمج (Combine)",
        accent: "teal",
    },
    ScamperFacet {
        key: ScamperKey::Adapt,
        letter: "A",
        title: "تكييف (Adapt)",
        accent: "green",
    },
    ScamperFacet {
        key: ScamperKey::Modify,
        letter: "M",
        title: "تعديل (Modify)",
        accent: "yellow",
    },
    ScamperFacet {
        key: ScamperKey::PutToAnotherUse,
        letter: "P",
        title: "استخدام آخر (Put)",
        accent: "orange",
    },
    ScamperFacet {
        key: ScamperKey::Eliminate,
        letter: "E",
        title: "إزالة (Eliminate)",
        accent: "red",
    },
    ScamperFacet {
        key: ScamperKey::Reverse,
        letter: "R",
        title: "عكس (Reverse)",
        accent: "purple",
    },
];

/// Raw service reply: one variant per facet, all required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamperResponse {
    pub substitute: String,
    pub combine: String,
    pub adapt: String,
    pub modify: String,
    pub put_to_another_use: String,
    pub eliminate: String,
    pub reverse: String,
}

impl ScamperResponse {
    pub fn get(&self, key: ScamperKey) -> &str {
        match key {
            ScamperKey::Substitute => &self.substitute,
            ScamperKey::Combine => &self.combine,
            ScamperKey::Adapt => &self.adapt,
            ScamperKey::Modify => &self.modify,
            ScamperKey::PutToAnotherUse => &self.put_to_another_use,
            ScamperKey::Eliminate => &self.eliminate,
            ScamperKey::Reverse => &self.reverse,
        }
    }

    /// Zips the reply with [`SCAMPER_TABLE`], in table order.
    pub fn to_suggestions(&self) -> Vec<ScamperSuggestion> {
        SCAMPER_TABLE
            .iter()
            .map(|facet| ScamperSuggestion {
                letter: facet.letter.to_string(),
                title: facet.title.to_string(),
                idea: self.get(facet.key).to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamperSuggestion {
    pub letter: String,
    pub title: String,
    pub idea: String,
}

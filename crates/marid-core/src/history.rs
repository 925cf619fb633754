//! Generation history model.

use crate::brand_voice::UserInput;
use crate::content::ApiResponse;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A persisted record of one completed generation episode.
///
/// Created once per successful content strategy call. The only later change
/// is attaching a regenerated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Creation time, RFC 3339 in UTC
    pub date: String,
    pub user_input: UserInput,
    pub api_response: ApiResponse,
    /// Base64-encoded image, absent when image generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
}

impl HistoryItem {
    pub fn new(
        user_input: UserInput,
        api_response: ApiResponse,
        generated_image: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_input,
            api_response,
            generated_image,
        }
    }
}

//! Profile analysis models.
//!
//! Quantitative metrics come from a [`ProfileMetricsSource`]. The only source
//! shipped today is a simulation; results carry a [`MetricsSource`] label so a
//! simulated figure is never mistaken for a fetched one.

use crate::error::{MaridError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Host a profile URL must point at.
pub const INSTAGRAM_HOST: &str = "instagram.com";

/// Where the quantitative figures of an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsSource {
    Simulated,
    Live,
}

/// Engagement figures for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    pub followers: u32,
    pub avg_likes: u32,
    /// Number of recent posts the average is taken over
    pub recent_posts: u32,
    pub source: MetricsSource,
}

impl ProfileMetrics {
    /// `avg_likes / followers * 100`, two decimals, `%` suffix.
    pub fn engagement_rate(&self) -> String {
        if self.followers == 0 {
            return "0.00%".to_string();
        }
        let rate = f64::from(self.avg_likes) / f64::from(self.followers) * 100.0;
        format!("{rate:.2}%")
    }
}

/// Result of a profile analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramAnalysis {
    pub followers: u32,
    pub avg_likes: u32,
    pub engagement_rate: String,
    pub ai_insight: String,
    pub metrics_source: MetricsSource,
}

impl InstagramAnalysis {
    pub fn new(metrics: &ProfileMetrics, ai_insight: impl Into<String>) -> Self {
        Self {
            followers: metrics.followers,
            avg_likes: metrics.avg_likes,
            engagement_rate: metrics.engagement_rate(),
            ai_insight: ai_insight.into(),
            metrics_source: metrics.source,
        }
    }
}

/// Supplies quantitative metrics for a profile URL.
#[async_trait]
pub trait ProfileMetricsSource: Send + Sync {
    async fn fetch(&self, profile_url: &str) -> Result<ProfileMetrics>;
}

/// Rejects blank URLs and URLs that do not point at Instagram.
pub fn validate_profile_url(profile_url: &str) -> Result<()> {
    if profile_url.trim().is_empty() || !profile_url.contains(INSTAGRAM_HOST) {
        return Err(MaridError::validation("profile_url"));
    }
    Ok(())
}

//! Simulated profile metrics.
//!
//! There is no real data source for profile figures yet. This source samples
//! plausible numbers and labels them [`MetricsSource::Simulated`] so callers
//! can tell them apart from fetched data.

use async_trait::async_trait;
use marid_core::analysis::{MetricsSource, ProfileMetrics, ProfileMetricsSource};
use marid_core::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::sync::Mutex;

pub const FOLLOWERS_RANGE: RangeInclusive<u32> = 1_000..=50_999;
pub const AVG_LIKES_RANGE: RangeInclusive<u32> = 100..=2_099;
pub const RECENT_POSTS: u32 = 5;
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

pub struct SimulatedMetrics {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl SimulatedMetrics {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Deterministic sampling, for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for SimulatedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileMetricsSource for SimulatedMetrics {
    async fn fetch(&self, profile_url: &str) -> Result<ProfileMetrics> {
        let (followers, avg_likes) = {
            let mut rng = self.rng.lock().await;
            (
                rng.gen_range(FOLLOWERS_RANGE),
                rng.gen_range(AVG_LIKES_RANGE),
            )
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::debug!(
            "[SimulatedMetrics] {} -> followers={} avg_likes={}",
            profile_url,
            followers,
            avg_likes
        );
        Ok(ProfileMetrics {
            followers,
            avg_likes,
            recent_posts: RECENT_POSTS,
            source: MetricsSource::Simulated,
        })
    }
}

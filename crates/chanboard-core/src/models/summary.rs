//! Pool-wide summary and the per-pass dashboard snapshot

use super::channel::ChannelView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate statistics over every channel of one pass
///
/// Percentages are ratio-of-sums, not means of per-channel percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_minute_usage: u64,
    pub total_day_usage: u64,
    pub total_minute_limit: u64,
    pub total_day_limit: u64,
    pub minute_pct: f64,
    pub day_pct: f64,
    /// Normal-tier channels in the pool
    pub total_normal: u64,
    pub available_normal: u64,
    /// Always `total_normal - available_normal`
    pub disabled_normal: u64,
    pub disabled_pct: f64,
}

/// Output of one pass: ranked channel views plus the pool summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub channels: Vec<ChannelView>,
    pub summary: SummaryStats,
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

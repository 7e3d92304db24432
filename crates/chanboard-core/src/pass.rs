//! One aggregation pass over a snapshot
//!
//! Stateless: every call reads a fresh snapshot and rebuilds the full view.
//! Concurrent passes share nothing but the source.

use crate::engine::{aggregate, classify_all, rank};
use crate::error::CoreError;
use crate::models::{Dashboard, RawChannel};
use crate::source::ChannelSource;
use chrono::Utc;
use tracing::{debug, warn};

/// Build the ranked dashboard for a snapshot already in memory
pub fn build_dashboard(raw: &[RawChannel]) -> Dashboard {
    let views = classify_all(raw);
    // Summary is order-independent, so aggregate before ranking consumes the views
    let summary = aggregate(&views);
    let channels = rank(views);

    Dashboard {
        channels,
        summary,
        generated_at: Utc::now(),
    }
}

/// Fetch a snapshot from `source` and build its dashboard
///
/// Fails the whole pass on any source error; nothing is retried.
pub fn run_pass(source: &dyn ChannelSource) -> Result<Dashboard, CoreError> {
    let raw = source.fetch_channels().map_err(|e| {
        warn!(error = %e, "Channel snapshot unavailable, pass aborted");
        e
    })?;

    let dashboard = build_dashboard(&raw);

    debug!(
        channels = dashboard.channel_count(),
        minute_pct = dashboard.summary.minute_pct,
        day_pct = dashboard.summary.day_pct,
        disabled_normal = dashboard.summary.disabled_normal,
        "Pass complete"
    );

    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SummaryStats;

    struct FailingSource;

    impl ChannelSource for FailingSource {
        fn fetch_channels(&self) -> Result<Vec<RawChannel>, CoreError> {
            Err(CoreError::InputUnavailable {
                message: "connection refused".to_string(),
                source: None,
            })
        }

        fn ping(&self) -> Result<(), CoreError> {
            self.fetch_channels().map(|_| ())
        }
    }

    fn raw(id: i64, status: &str, minute: u64, day: u64, tier: &str) -> RawChannel {
        RawChannel {
            id,
            status_code: status.to_string(),
            minute_usage: minute,
            day_usage: day,
            tier: tier.to_string(),
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let dashboard = build_dashboard(&[]);
        assert!(dashboard.is_empty());
        assert_eq!(dashboard.summary, SummaryStats::default());
    }

    #[test]
    fn test_pass_ranks_and_summarizes() {
        let snapshot = vec![
            raw(1, "1", 2, 10, "gcp"),
            raw(2, "1", 5, 22, ""),
            raw(3, "2", 0, 1, "aistudio"),
            raw(4, "3", 1, 1, ""),
        ];

        let dashboard = run_pass(&snapshot).unwrap();
        let ids: Vec<i64> = dashboard.channels.iter().map(|c| c.id).collect();
        // Normal by day_pct (4%, 4%, 88%) with minute_pct breaking the tie, then paid
        assert_eq!(ids, vec![3, 4, 2, 1]);

        let summary = &dashboard.summary;
        assert_eq!(summary.total_minute_usage, 8);
        assert_eq!(summary.total_day_usage, 34);
        assert_eq!(summary.total_minute_limit, 35);
        assert_eq!(summary.total_day_limit, 175);
        assert_eq!(summary.total_normal, 3);
        assert_eq!(summary.available_normal, 1);
        assert_eq!(summary.disabled_normal, 2);
        assert!((summary.disabled_pct - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_pass_propagates_source_failure() {
        let err = run_pass(&FailingSource).unwrap_err();
        assert!(err.is_input_unavailable());
    }

    #[test]
    fn test_pass_with_huge_counters_does_not_overflow() {
        let huge = i64::MAX as u64;
        let snapshot = vec![
            raw(1, "1", huge, 0, ""),
            raw(2, "1", huge, 0, ""),
            raw(3, "1", huge, 0, "gcp"),
        ];

        let dashboard = build_dashboard(&snapshot);
        assert_eq!(dashboard.summary.total_minute_usage, u64::MAX);
        assert_eq!(dashboard.summary.minute_pct, 100.0);
        assert_eq!(dashboard.summary.day_pct, 0.0);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let snapshot = vec![raw(1, "1", 1, 1, ""), raw(2, "1", 1, 1, "")];
        let first = run_pass(&snapshot).unwrap();
        let second = run_pass(&snapshot).unwrap();
        assert_eq!(first.channels, second.channels);
        assert_eq!(first.summary, second.summary);
    }
}

//! Pool-wide aggregation over classified views

use super::utilization::utilization;
use crate::models::{ChannelView, SummaryStats};

/// Fold every view into the pool summary
///
/// Paid and normal channels both feed the usage and limit totals; only normal
/// channels feed the disabled counters.
pub fn aggregate(views: &[ChannelView]) -> SummaryStats {
    let mut summary = SummaryStats::default();

    for view in views {
        // Counters are unbounded upstream; saturate instead of wrapping
        summary.total_minute_usage = summary
            .total_minute_usage
            .saturating_add(view.minute_usage);
        summary.total_day_usage = summary.total_day_usage.saturating_add(view.day_usage);
        summary.total_minute_limit = summary
            .total_minute_limit
            .saturating_add(view.minute_limit);
        summary.total_day_limit = summary.total_day_limit.saturating_add(view.day_limit);

        if !view.paid {
            summary.total_normal = summary.total_normal.saturating_add(1);
            if view.available {
                summary.available_normal = summary.available_normal.saturating_add(1);
            }
        }
    }

    summary.disabled_normal = summary.total_normal - summary.available_normal;

    // Ratio of sums, so skewed limits report true aggregate load
    summary.minute_pct = utilization(summary.total_minute_usage, summary.total_minute_limit);
    summary.day_pct = utilization(summary.total_day_usage, summary.total_day_limit);
    summary.disabled_pct = utilization(summary.disabled_normal, summary.total_normal);

    summary
}

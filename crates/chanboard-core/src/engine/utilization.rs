//! Usage as a clamped percentage of its limit

/// Percentage of `limit` consumed by `usage`, clamped to [0, 100]
///
/// A zero limit yields 0 rather than dividing by zero. Usage above the limit
/// (counters not yet reset) reports 100.
pub fn utilization(usage: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (usage as f64 / limit as f64 * 100.0).min(100.0)
}

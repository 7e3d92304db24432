//! Presentation order for channel views
//!
//! Normal tier first, then ascending day utilization, then ascending minute
//! utilization. The sort is stable so equal keys keep their input order
//! across refreshes.

use crate::models::ChannelView;
use std::cmp::Ordering;

/// Compare two views by (paid, day_pct, minute_pct)
pub fn compare(a: &ChannelView, b: &ChannelView) -> Ordering {
    a.paid
        .cmp(&b.paid)
        .then_with(|| a.day_pct.total_cmp(&b.day_pct))
        .then_with(|| a.minute_pct.total_cmp(&b.minute_pct))
}

/// Rank views for display
pub fn rank(mut views: Vec<ChannelView>) -> Vec<ChannelView> {
    // slice::sort_by is stable
    views.sort_by(compare);
    views
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: i64, paid: bool, day_pct: f64, minute_pct: f64) -> ChannelView {
        ChannelView {
            id,
            available: true,
            paid,
            minute_usage: 0,
            day_usage: 0,
            minute_limit: if paid { 20 } else { 5 },
            day_limit: if paid { 100 } else { 25 },
            minute_pct,
            day_pct,
        }
    }

    fn ids(views: &[ChannelView]) -> Vec<i64> {
        views.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_rank_normal_before_paid() {
        let ranked = rank(vec![
            view(1, true, 10.0, 0.0),
            view(2, false, 90.0, 0.0),
            view(3, false, 5.0, 0.0),
        ]);
        assert_eq!(ids(&ranked), vec![3, 2, 1]);
        assert!(!ranked[0].paid);
        assert_eq!(ranked[0].day_pct, 5.0);
        assert_eq!(ranked[1].day_pct, 90.0);
        assert!(ranked[2].paid);
    }

    #[test]
    fn test_rank_minute_breaks_day_ties() {
        let ranked = rank(vec![
            view(1, false, 40.0, 80.0),
            view(2, false, 40.0, 20.0),
            view(3, false, 40.0, 60.0),
        ]);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_keys() {
        let ranked = rank(vec![
            view(5, false, 12.0, 20.0),
            view(4, true, 0.0, 0.0),
            view(9, false, 12.0, 20.0),
            view(1, false, 12.0, 20.0),
            view(2, true, 0.0, 0.0),
        ]);
        assert_eq!(ids(&ranked), vec![5, 9, 1, 4, 2]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let once = rank(vec![
            view(1, true, 100.0, 5.0),
            view(2, false, 100.0, 100.0),
            view(3, false, 0.0, 0.0),
            view(4, true, 3.0, 1.0),
        ]);
        let twice = rank(once.clone());
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}

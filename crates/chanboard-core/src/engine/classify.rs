//! Channel classifier: raw counters to a view record
//!
//! Total over its input. Status is a two-way split ("1" or anything else),
//! tier is a two-way split ("gcp" or anything else).

use super::utilization::utilization;
use crate::models::{Availability, ChannelView, RawChannel, Tier};

/// Classify one raw channel into its view record
pub fn classify(raw: &RawChannel) -> ChannelView {
    let availability = Availability::from_status_code(&raw.status_code);
    let tier = Tier::from_tag(&raw.tier);

    let minute_limit = tier.minute_limit();
    let day_limit = tier.day_limit();

    ChannelView {
        id: raw.id,
        available: availability.is_available(),
        paid: tier.is_paid(),
        minute_usage: raw.minute_usage,
        day_usage: raw.day_usage,
        minute_limit,
        day_limit,
        minute_pct: utilization(raw.minute_usage, minute_limit),
        day_pct: utilization(raw.day_usage, day_limit),
    }
}

/// Classify a snapshot, preserving input order
pub fn classify_all(raw: &[RawChannel]) -> Vec<ChannelView> {
    raw.iter().map(classify).collect()
}

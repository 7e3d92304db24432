//! Channel records: the raw counters read from the store and the derived view

use serde::{Deserialize, Serialize};

/// One pool member as stored upstream (`channels` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChannel {
    /// Unique positive identifier
    pub id: i64,
    /// Status token from the store ("1" = available)
    pub status_code: String,
    /// Requests counted in the current minute window
    pub minute_usage: u64,
    /// Requests counted in the current day window
    pub day_usage: u64,
    /// Tier tag ("gcp" = paid)
    pub tier: String,
}

/// Tier of a channel, which fixes its per-window limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Paid,
    Normal,
}

impl Tier {
    /// Tag that marks a paid channel in the store
    pub const PAID_TAG: &'static str = "gcp";

    /// Map a raw tier tag; every tag other than "gcp" is the normal tier
    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::PAID_TAG {
            Tier::Paid
        } else {
            Tier::Normal
        }
    }

    pub fn minute_limit(self) -> u64 {
        match self {
            Tier::Paid => 20,
            Tier::Normal => 5,
        }
    }

    pub fn day_limit(self) -> u64 {
        match self {
            Tier::Paid => 100,
            Tier::Normal => 25,
        }
    }

    pub fn is_paid(self) -> bool {
        matches!(self, Tier::Paid)
    }

    /// Get display name
    pub fn label(self) -> &'static str {
        match self {
            Tier::Paid => "Paid",
            Tier::Normal => "Normal",
        }
    }
}

/// Availability resolved from the raw status token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    /// Any status other than "1", including codes not known today
    Disabled,
}

impl Availability {
    pub const AVAILABLE_CODE: &'static str = "1";

    pub fn from_status_code(code: &str) -> Self {
        match code {
            Self::AVAILABLE_CODE => Availability::Available,
            _ => Availability::Disabled,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Disabled => "Auto-disabled",
        }
    }
}

/// Classified, display-ready view of one channel
///
/// Percentages are full precision in [0, 100]; formatting is left to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelView {
    pub id: i64,
    pub available: bool,
    pub paid: bool,
    pub minute_usage: u64,
    pub day_usage: u64,
    pub minute_limit: u64,
    pub day_limit: u64,
    pub minute_pct: f64,
    pub day_pct: f64,
}

impl ChannelView {
    pub fn tier(&self) -> Tier {
        if self.paid {
            Tier::Paid
        } else {
            Tier::Normal
        }
    }

    pub fn availability(&self) -> Availability {
        if self.available {
            Availability::Available
        } else {
            Availability::Disabled
        }
    }
}

/// Colour band for a utilization percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    /// <= 50%
    Low,
    /// > 50%
    Elevated,
    /// > 80%
    High,
}

impl LoadLevel {
    pub fn from_pct(pct: f64) -> Self {
        if pct > 80.0 {
            LoadLevel::High
        } else if pct > 50.0 {
            LoadLevel::Elevated
        } else {
            LoadLevel::Low
        }
    }

    /// Bar colour used by the HTML dashboard
    pub fn color(self) -> &'static str {
        match self {
            LoadLevel::Low => "#4CAF50",
            LoadLevel::Elevated => "#ffa64d",
            LoadLevel::High => "#ff4d4d",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_tag() {
        assert_eq!(Tier::from_tag("gcp"), Tier::Paid);
        assert_eq!(Tier::from_tag("GCP"), Tier::Normal);
        assert_eq!(Tier::from_tag(""), Tier::Normal);
        assert_eq!(Tier::from_tag("aistudio"), Tier::Normal);
    }

    #[test]
    fn test_availability_default_branch() {
        assert_eq!(
            Availability::from_status_code("1"),
            Availability::Available
        );
        for code in ["0", "2", "99", "", " 1", "01"] {
            assert_eq!(
                Availability::from_status_code(code),
                Availability::Disabled,
                "code {:?} should be disabled",
                code
            );
        }
    }

    #[test]
    fn test_load_level_bands_are_strict() {
        assert_eq!(LoadLevel::from_pct(0.0), LoadLevel::Low);
        assert_eq!(LoadLevel::from_pct(50.0), LoadLevel::Low);
        assert_eq!(LoadLevel::from_pct(50.1), LoadLevel::Elevated);
        assert_eq!(LoadLevel::from_pct(80.0), LoadLevel::Elevated);
        assert_eq!(LoadLevel::from_pct(80.1), LoadLevel::High);
        assert_eq!(LoadLevel::from_pct(100.0), LoadLevel::High);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = ChannelView {
            id: 7,
            available: true,
            paid: false,
            minute_usage: 1,
            day_usage: 2,
            minute_limit: 5,
            day_limit: 25,
            minute_pct: 20.0,
            day_pct: 8.0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["minutePct"], 20.0);
        assert_eq!(json["dayLimit"], 25);
        assert_eq!(view.tier(), Tier::Normal);
        assert_eq!(view.availability(), Availability::Available);
    }
}

//! View filtering for the dashboard's filter buttons and ID search
//!
//! Filters narrow the channel list only; the summary always stays pool-wide.

use crate::error::CoreError;
use crate::models::ChannelView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel subset selected by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelFilter {
    #[default]
    All,
    Available,
    Unavailable,
    Paid,
    Normal,
}

impl ChannelFilter {
    pub const ALL: [ChannelFilter; 5] = [
        ChannelFilter::All,
        ChannelFilter::Available,
        ChannelFilter::Unavailable,
        ChannelFilter::Paid,
        ChannelFilter::Normal,
    ];

    pub fn matches(self, view: &ChannelView) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Available => view.available,
            ChannelFilter::Unavailable => !view.available,
            ChannelFilter::Paid => view.paid,
            ChannelFilter::Normal => !view.paid,
        }
    }

    /// Query-string token
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelFilter::All => "all",
            ChannelFilter::Available => "available",
            ChannelFilter::Unavailable => "unavailable",
            ChannelFilter::Paid => "paid",
            ChannelFilter::Normal => "normal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelFilter::All => "All",
            ChannelFilter::Available => "Available",
            ChannelFilter::Unavailable => "Auto-disabled",
            ChannelFilter::Paid => "Paid",
            ChannelFilter::Normal => "Normal",
        }
    }
}

impl FromStr for ChannelFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == token)
            .ok_or_else(|| CoreError::InvalidFilter {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ChannelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter plus optional ID search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: ChannelFilter,
    /// Substring of the decimal channel ID
    pub search: Option<String>,
}

impl ViewQuery {
    pub fn new(filter: ChannelFilter, search: Option<&str>) -> Self {
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        Self { filter, search }
    }

    /// Parse raw query parameters (`filter`, `q`)
    pub fn parse(filter: Option<&str>, search: Option<&str>) -> Result<Self, CoreError> {
        let filter = match filter {
            Some(f) if !f.trim().is_empty() => f.parse()?,
            _ => ChannelFilter::All,
        };
        Ok(Self::new(filter, search))
    }

    pub fn is_unfiltered(&self) -> bool {
        self.filter == ChannelFilter::All && self.search.is_none()
    }

    pub fn matches(&self, view: &ChannelView) -> bool {
        if !self.filter.matches(view) {
            return false;
        }
        match &self.search {
            Some(term) => view.id.to_string().contains(term.as_str()),
            None => true,
        }
    }

    /// Keep matching views in their ranked order
    pub fn apply(&self, channels: &[ChannelView]) -> Vec<ChannelView> {
        channels
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

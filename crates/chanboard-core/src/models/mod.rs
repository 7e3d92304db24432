//! Data models for channel usage

pub mod channel;
pub mod summary;

pub use channel::{Availability, ChannelView, LoadLevel, RawChannel, Tier};
pub use summary::{Dashboard, SummaryStats};

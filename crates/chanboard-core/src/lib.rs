//! chanboard-core - Core library for chanboard
//!
//! Classifies raw rate-limit counters of a channel pool, aggregates them into
//! pool-wide statistics and ranks the channels for display.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod models;
pub mod pass;
pub mod source;

pub use config::{ServerConfig, SourceConfig};
pub use error::CoreError;
pub use filter::{ChannelFilter, ViewQuery};
pub use models::{ChannelView, Dashboard, LoadLevel, RawChannel, SummaryStats};
pub use pass::{build_dashboard, run_pass};
pub use source::{ChannelSource, SqliteChannelSource};

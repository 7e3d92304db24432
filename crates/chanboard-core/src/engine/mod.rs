//! Classification and aggregation engine
//!
//! Pipeline for one pass: classify → utilization (per record) → aggregate →
//! rank. Every stage is a pure function of its input.

pub mod aggregate;
pub mod classify;
pub mod rank;
pub mod utilization;

pub use aggregate::aggregate;
pub use classify::{classify, classify_all};
pub use rank::rank;
pub use utilization::utilization;

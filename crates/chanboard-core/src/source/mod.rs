//! Raw-record sources
//!
//! The core only reads from a source. Whatever pooling or timeouts the
//! backing store needs live behind this trait.

pub mod sqlite;

pub use sqlite::SqliteChannelSource;

use crate::error::CoreError;
use crate::models::RawChannel;

/// Read-only provider of raw channel snapshots
pub trait ChannelSource: Send + Sync {
    /// Read every channel currently in the pool, in store order
    ///
    /// Must return the complete snapshot or an error, never a partial read.
    fn fetch_channels(&self) -> Result<Vec<RawChannel>, CoreError>;

    /// Check that the store is reachable
    fn ping(&self) -> Result<(), CoreError>;
}

/// In-memory snapshot
impl ChannelSource for Vec<RawChannel> {
    fn fetch_channels(&self) -> Result<Vec<RawChannel>, CoreError> {
        Ok(self.clone())
    }

    fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

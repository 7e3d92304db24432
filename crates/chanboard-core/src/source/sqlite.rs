//! SQLite-backed channel source
//!
//! Reads the `channels` table:
//! - id INTEGER (positive)
//! - status TEXT or INTEGER ("1" = available)
//! - count_minute_usage INTEGER (non-negative)
//! - count_day_usage INTEGER (non-negative)
//! - tag TEXT or INTEGER ("gcp" = paid)
//!
//! A NULL or out-of-range value anywhere fails the whole read.

use super::ChannelSource;
use crate::error::CoreError;
use crate::models::RawChannel;
use parking_lot::Mutex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const SELECT_CHANNELS: &str =
    "SELECT id, status, count_minute_usage, count_day_usage, tag FROM channels";

/// Wait this long on a locked database before failing the read
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only channel source over a SQLite database file (thread-safe)
pub struct SqliteChannelSource {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl SqliteChannelSource {
    /// Open an existing database read-only
    pub fn open(db_path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| {
                CoreError::unavailable(
                    format!("failed to open database {}", db_path.display()),
                    e,
                )
            })?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| CoreError::unavailable("failed to set busy timeout", e))?;

        debug!(path = %db_path.display(), "Channel source opened");

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl ChannelSource for SqliteChannelSource {
    fn fetch_channels(&self) -> Result<Vec<RawChannel>, CoreError> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare_cached(SELECT_CHANNELS)
            .map_err(|e| CoreError::unavailable("failed to prepare channel query", e))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| CoreError::unavailable("failed to query channels", e))?;

        let mut channels = Vec::new();
        loop {
            let row = match rows.next() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, read = channels.len(), "Channel query aborted mid-read");
                    return Err(CoreError::unavailable("channel query failed during read", e));
                }
            };
            channels.push(read_channel(row, channels.len())?);
        }

        debug!(count = channels.len(), "Fetched channel snapshot");
        Ok(channels)
    }

    fn ping(&self) -> Result<(), CoreError> {
        let conn = self.conn.lock();
        // Stepping the query checks the connection, the schema and the first data page
        conn.query_row("SELECT 1 FROM channels LIMIT 1", [], |row| {
            row.get::<_, i64>(0)
        })
        .optional()
            .map_err(|e| CoreError::unavailable("channels table is not readable", e))?;
        Ok(())
    }
}

fn read_channel(row: &Row<'_>, index: usize) -> Result<RawChannel, CoreError> {
    let id = match column(row, index, 0)? {
        ValueRef::Integer(id) if id > 0 => id,
        ValueRef::Integer(id) => {
            return Err(CoreError::malformed(
                index,
                "id",
                format!("must be positive, got {}", id),
            ))
        }
        other => return Err(unexpected(index, "id", other)),
    };

    Ok(RawChannel {
        id,
        status_code: read_token(row, index, 1, "status")?,
        minute_usage: read_count(row, index, 2, "count_minute_usage")?,
        day_usage: read_count(row, index, 3, "count_day_usage")?,
        tier: read_token(row, index, 4, "tag")?,
    })
}

fn column<'r>(row: &'r Row<'_>, index: usize, col: usize) -> Result<ValueRef<'r>, CoreError> {
    row.get_ref(col).map_err(|e| {
        CoreError::unavailable(format!("failed to read column {} of row {}", col, index), e)
    })
}

/// Status codes and tags are tokens; integer storage is rendered as decimal text
fn read_token(
    row: &Row<'_>,
    index: usize,
    col: usize,
    field: &'static str,
) -> Result<String, CoreError> {
    match column(row, index, col)? {
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec())
            .map_err(|_| CoreError::malformed(index, field, "is not valid UTF-8")),
        ValueRef::Integer(value) => Ok(value.to_string()),
        other => Err(unexpected(index, field, other)),
    }
}

fn read_count(
    row: &Row<'_>,
    index: usize,
    col: usize,
    field: &'static str,
) -> Result<u64, CoreError> {
    match column(row, index, col)? {
        ValueRef::Integer(value) => u64::try_from(value).map_err(|_| {
            CoreError::malformed(index, field, format!("must be non-negative, got {}", value))
        }),
        other => Err(unexpected(index, field, other)),
    }
}

fn unexpected(index: usize, field: &'static str, value: ValueRef<'_>) -> CoreError {
    let reason = match value {
        ValueRef::Null => "is NULL".to_string(),
        other => format!("has unexpected type {}", other.data_type()),
    };
    CoreError::malformed(index, field, reason)
}

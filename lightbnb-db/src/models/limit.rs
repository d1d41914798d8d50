//! Result-count limit for list queries

use serde::{Deserialize, Serialize};

/// Maximum rows a single list query may return
const MAX_LIMIT: u32 = 100;

/// Default rows per list query
const DEFAULT_LIMIT: u32 = 10;

/// Bound on the number of rows a list query returns.
///
/// Capped at 100; defaults to 10. Zero is passed through, so the query
/// returns no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Limit(u32);

impl Limit {
    pub fn new(limit: u32) -> Self {
        Self(limit.min(MAX_LIMIT))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Value to bind for a SQL `LIMIT` placeholder.
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<u32> for Limit {
    fn from(limit: u32) -> Self {
        Self::new(limit)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

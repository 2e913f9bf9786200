//! lognet-ledger — History of user-initiated color changes.
//!
//! The history log is append-only: one entry per user action, never one per
//! propagated neighbor recolor. A log can be sealed into a [`SessionRecord`]
//! whose BLAKE3 content hash makes later edits detectable.

pub mod error;
pub mod hash;
pub mod history;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lognet_core::ChangeEntry;

pub use error::LedgerError;
pub use history::HistoryLog;

// ── Core Types ───────────────────────────────────────────────────

/// Unique identifier for a simulator session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded user change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Zero-based position in the log.
    pub seq: u64,
    /// Which node was changed, and to what.
    #[serde(flatten)]
    pub change: ChangeEntry,
    /// When the change was applied.
    pub recorded_at: DateTime<Utc>,
}

/// A sealed copy of a session's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub entries: Vec<LogEntry>,
    /// BLAKE3 content hash (hex).
    pub content_hash: Option<String>,
}

impl SessionRecord {
    /// Compute and return the BLAKE3 hash of the record's content.
    /// The hash covers all fields except `content_hash` itself.
    pub fn compute_hash(&self) -> String {
        hash::compute_record_hash(self)
    }

    /// Verify that the stored content_hash matches a freshly computed hash.
    pub fn verify_integrity(&self) -> bool {
        match &self.content_hash {
            Some(stored) => stored == &self.compute_hash(),
            None => false,
        }
    }

    /// Like [`verify_integrity`](Self::verify_integrity), with the reason on failure.
    pub fn verify(&self) -> Result<(), LedgerError> {
        match &self.content_hash {
            None => Err(LedgerError::NotFinalized),
            Some(stored) if stored == &self.compute_hash() => Ok(()),
            Some(_) => Err(LedgerError::IntegrityViolation(self.id)),
        }
    }
}

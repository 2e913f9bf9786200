//! BLAKE3 content hashing for tamper evidence.
//!
//! Computes a deterministic hash of all session record fields (excluding
//! the content_hash itself) so that any modification is detectable.

use serde::Serialize;

use crate::{LogEntry, SessionId, SessionRecord};

/// Hashable representation of a SessionRecord (excludes content_hash).
#[derive(Serialize)]
struct HashableRecord<'a> {
    id: &'a SessionId,
    started_at: &'a chrono::DateTime<chrono::Utc>,
    completed_at: &'a chrono::DateTime<chrono::Utc>,
    entries: &'a [LogEntry],
}

/// Compute the BLAKE3 hash of a session record's content.
///
/// Serializes all fields except `content_hash` to canonical JSON,
/// then hashes the bytes with BLAKE3. Returns the hex-encoded hash.
pub fn compute_record_hash(record: &SessionRecord) -> String {
    let hashable = HashableRecord {
        id: &record.id,
        started_at: &record.started_at,
        completed_at: &record.completed_at,
        entries: &record.entries,
    };

    let json = serde_json::to_vec(&hashable).expect("SessionRecord serialization should not fail");
    blake3::hash(&json).to_hex().to_string()
}

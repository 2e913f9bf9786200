use thiserror::Error;

use crate::SessionId;

/// Errors raised when checking a session record.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Integrity check failed for session {0}: stored hash does not match content")]
    IntegrityViolation(SessionId),

    #[error("Session record has no content hash (not finalized)")]
    NotFinalized,
}

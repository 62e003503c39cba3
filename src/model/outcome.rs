//! Outcome types shared between the clients, the engine and `main`.

use std::fmt;

use crate::{error::api::ApiError, model::message::ContentKind};

/// Why a message was left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Discord does not allow deleting this message type.
    System,
    /// The message carries content the user asked to keep.
    Excluded(ContentKind),
    /// The message is inside an archived thread (error code 50083).
    ArchivedThread,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system message"),
            Self::Excluded(kind) => write!(f, "contains {}", kind),
            Self::ArchivedThread => f.write_str("archived thread"),
        }
    }
}

/// Result of a single delete call.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    Skipped(SkipReason),
    Fatal(ApiError),
}

/// Terminal status of a removal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStatus {
    Ok,
    SearchFailed,
    DeleteFailed,
}

impl RemovalStatus {
    /// Process exit code for this status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::SearchFailed => 1,
            Self::DeleteFailed => 2,
        }
    }
}

/// What a finished session reports to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    pub status: RemovalStatus,
    /// Messages successfully deleted over the whole session.
    pub deleted: u64,
    /// Distinct messages left in place.
    pub skipped: usize,
}

impl fmt::Display for RemovalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            RemovalStatus::Ok => write!(
                f,
                "All messages have been removed ({} deleted, {} skipped).",
                self.deleted, self.skipped
            ),
            RemovalStatus::SearchFailed => write!(
                f,
                "ERROR: Search failed after {} deleted messages. Try again later.",
                self.deleted
            ),
            RemovalStatus::DeleteFailed => write!(
                f,
                "ERROR: Failed to delete a message after {} deleted messages. Try again later.",
                self.deleted
            ),
        }
    }
}

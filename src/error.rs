use std::time::Duration;
use thiserror::Error;

/// Failure of one of the two collection operations, tagged with the
/// operation it belongs to so the caller's diagnostic keeps its prefix.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("failed to insert record; {0}")]
    Insert(#[source] mongodb::error::Error),
    #[error("failed to insert record; timed out after {0:?}")]
    InsertTimeout(Duration),
    #[error("failed to find record; {0}")]
    Find(#[source] mongodb::error::Error),
    #[error("failed to find record; timed out after {0:?}")]
    FindTimeout(Duration),
}

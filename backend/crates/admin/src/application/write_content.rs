//! Write Content Use Case
//!
//! Read-modify-write against the content repository under an optimistic
//! concurrency precondition. The version token is always re-read
//! immediately before writing; a caller-supplied token is never
//! trusted. The read and the write are still two round trips, so a
//! concurrent writer can land in between and the write then fails with
//! `AdminError::Conflict` instead of silently clobbering the edit.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::content::ContentRecord;
use crate::domain::repository::ContentRepository;
use crate::error::AdminResult;

/// Commit message recorded for admin panel edits
pub const UPDATE_COMMIT_MESSAGE: &str = "content: update portfolio data via admin panel";

/// Commit message recorded for resets
pub const RESET_COMMIT_MESSAGE: &str = "content: reset portfolio data to defaults";

/// Write content use case
pub struct WriteContentUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> WriteContentUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Normalize `candidate` and store it, conditional on the version
    /// token fetched just before the write. Returns the record as
    /// written.
    pub async fn execute(&self, candidate: &Value, message: &str) -> AdminResult<ContentRecord> {
        let current = self.repo.fetch().await?;

        let normalized = ContentRecord::normalize(candidate);
        let bytes = serde_json::to_vec_pretty(&normalized)?;

        self.repo.store(&bytes, &current.version, message).await?;

        tracing::info!(commit_message = message, "Content record written");

        Ok(normalized)
    }

    /// Overwrite the stored record with the schema defaults
    pub async fn reset(&self) -> AdminResult<ContentRecord> {
        // normalize(null) is exactly the defaults
        self.execute(&Value::Null, RESET_COMMIT_MESSAGE).await
    }
}

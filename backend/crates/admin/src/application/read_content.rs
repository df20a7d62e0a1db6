//! Read Content Use Case
//!
//! Fetches the stored record from the content repository and normalizes
//! it against the fixed schema.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::content::ContentRecord;
use crate::domain::repository::ContentRepository;
use crate::error::{AdminError, AdminResult};

/// Read content use case
pub struct ReadContentUseCase<R>
where
    R: ContentRepository,
{
    repo: Arc<R>,
}

impl<R> ReadContentUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch and normalize the current content record
    pub async fn execute(&self) -> AdminResult<ContentRecord> {
        let stored = self.repo.fetch().await?;

        let raw: Value = serde_json::from_slice(&stored.bytes)
            .map_err(|_| AdminError::Upstream("Stored content is not valid JSON".to_string()))?;

        Ok(ContentRecord::normalize(&raw))
    }
}

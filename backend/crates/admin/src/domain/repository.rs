//! Repository Trait
//!
//! Interface to the external content repository. Implementation is in
//! the infrastructure layer.

use crate::error::AdminResult;

/// Opaque version token returned by the content repository on fetch,
/// required as precondition on the next store to the same location.
///
/// This precondition is the only concurrency control in the system:
/// a store succeeds only if the token still matches the repository's
/// current value for the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fetched content payload plus the version token it was read at
#[derive(Debug, Clone)]
pub struct StoredContent {
    /// Raw payload bytes, already decoded from the transport encoding
    pub bytes: Vec<u8>,
    pub version: VersionToken,
}

/// Content repository trait
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository {
    /// Fetch the stored payload and its current version token
    async fn fetch(&self) -> AdminResult<StoredContent>;

    /// Store a new payload, conditional on `version` still being current.
    ///
    /// Fails with `AdminError::Conflict` when the precondition does not
    /// hold, `AdminError::Upstream` for any other failure.
    async fn store(&self, bytes: &[u8], version: &VersionToken, message: &str) -> AdminResult<()>;
}

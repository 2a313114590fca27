//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! the release workflow consumes, allowing for multiple implementations
//! including real repositories and an in-memory mock for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads. Methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ReleaseError] variants.
pub trait Repository: Send + Sync {
    /// Get all tag names in the repository.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names in the order the repository reports them
    /// * `Err` - If there's a git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Check whether a tag with the given name exists
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Create an annotated tag at the current HEAD commit.
    ///
    /// Annotated tags carry tagger and date metadata required for release
    /// provenance, unlike lightweight reference-only tags.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `message` - Annotation message
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err(ReleaseError::TagExists)` - If the tag name is already in use
    /// * `Err` - On any other git error
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag reference to a remote.
    ///
    /// The push is scoped to exactly `refs/tags/<tag_name>`; no other refs
    /// or branches are pushed as a side effect.
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err(ReleaseError::RemoteRejected)` - On a non-fast-forward or
    ///   permission failure reported by the remote
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;

    /// Report whether the working tree has pending changes for a path
    fn path_has_changes(&self, path: &str) -> Result<bool>;

    /// Stage exactly one path and commit it with the given message
    fn commit_path(&self, path: &str, message: &str) -> Result<()>;
}

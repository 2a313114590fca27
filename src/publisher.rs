//! Tag publisher - canonicalizes versions into tags and delegates the
//! mutating git operations to the injected repository.

use crate::domain::{SemVer, TagName};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;

/// Publishes release tags and the version-string commit through a repository.
pub struct TagPublisher<'a, R: Repository> {
    repo: &'a R,
    version_file: String,
    default_remote: String,
}

impl<'a, R: Repository> TagPublisher<'a, R> {
    /// Create a publisher for the given repository.
    ///
    /// # Arguments
    /// * `version_file` - Tracked file whose content embeds the version string
    /// * `default_remote` - Remote used when a push does not name one
    pub fn new(
        repo: &'a R,
        version_file: impl Into<String>,
        default_remote: impl Into<String>,
    ) -> Self {
        TagPublisher {
            repo,
            version_file: version_file.into(),
            default_remote: default_remote.into(),
        }
    }

    /// Canonicalize `version` into a tag name and create the annotated tag.
    ///
    /// When no message is supplied the tag name itself is used as the
    /// annotation message.
    ///
    /// # Returns
    /// * `Ok(TagName)` - The created tag
    /// * `Err(ReleaseError::TagExists)` - If the tag name is already in use;
    ///   the existing tag is left unchanged
    pub fn create_tag(&self, version: &SemVer, message: Option<&str>) -> Result<TagName> {
        let tag = TagName::from_version(version);

        if self.repo.tag_exists(tag.as_str())? {
            return Err(ReleaseError::tag_exists(tag.as_str()));
        }

        let message = message.unwrap_or(tag.as_str());
        self.repo.create_annotated_tag(tag.as_str(), message)?;

        Ok(tag)
    }

    /// Push a tag to a remote, defaulting to the configured remote name.
    ///
    /// # Returns
    /// * `Ok(String)` - The remote actually used
    /// * `Err(ReleaseError::RemoteRejected)` - Surfaced verbatim, not retried
    pub fn push_tag(&self, tag: &TagName, remote: Option<&str>) -> Result<String> {
        let remote = remote.unwrap_or(&self.default_remote);
        self.repo.push_tag(remote, tag.as_str())?;
        Ok(remote.to_string())
    }

    /// Commit the version-string file if it has pending changes.
    ///
    /// Returns `Ok(false)` without committing when the file is clean, so a
    /// re-run that resolves to the same version never produces an empty
    /// commit. Otherwise stages exactly that file and commits it.
    pub fn commit_version_string(&self, message: &str) -> Result<bool> {
        if !self.repo.path_has_changes(&self.version_file)? {
            return Ok(false);
        }

        self.repo.commit_path(&self.version_file, message)?;
        Ok(true)
    }
}

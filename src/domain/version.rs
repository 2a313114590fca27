use std::cmp::Ordering;
use std::fmt;

use crate::error::{ReleaseError, Result};

/// Semantic version value used at every system boundary.
///
/// Wraps [semver::Version] so that ordering follows release precedence:
/// build metadata is excluded from comparisons, while two versions that
/// differ only in build metadata remain distinct values for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer(pub(crate) semver::Version);

impl SemVer {
    /// Create a plain version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer(semver::Version::new(major, minor, patch))
    }

    /// The base case for a repository with no released versions
    pub fn zero() -> Self {
        SemVer::new(0, 0, 0)
    }

    /// Parse a version from caller-supplied text.
    ///
    /// # Returns
    /// * `Ok(SemVer)` - Successfully parsed version
    /// * `Err(ReleaseError::Version)` - If the text is not a semantic version
    pub fn parse(text: &str) -> Result<Self> {
        let version = semver::Version::parse(text)
            .map_err(|e| ReleaseError::version(format!("Invalid version '{}': {}", text, e)))?;
        Ok(SemVer(version))
    }

    /// Parse a version from a tag name, stripping a leading `v` if present.
    ///
    /// Tags that do not parse are an expected condition (repositories carry
    /// all kinds of tags), so this returns `None` rather than an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let text = tag.strip_prefix('v').unwrap_or(tag);
        semver::Version::parse(text).ok().map(SemVer)
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// The prerelease identifier sequence, empty when this is a release version
    pub fn prerelease(&self) -> &str {
        self.0.pre.as_str()
    }

    /// The build metadata, empty when none is attached
    pub fn build_metadata(&self) -> &str {
        self.0.build.as_str()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemVer {
    // Precedence ordering per semver.org: build metadata does not participate.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

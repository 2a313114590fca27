use std::fmt;

use super::version::SemVer;

/// Canonical tag name for a released version.
///
/// Obtained from a version by prefixing `v` (case-sensitive); the prefix is
/// stripped again when parsing, so `TagName -> SemVer -> TagName` round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    /// Canonicalize a version into its tag name
    pub fn from_version(version: &SemVer) -> Self {
        let text = version.to_string();
        if text.starts_with('v') {
            TagName(text)
        } else {
            TagName(format!("v{}", text))
        }
    }

    /// Wrap an existing tag string without altering it
    pub fn new(name: impl Into<String>) -> Self {
        TagName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version text with the `v` prefix stripped
    pub fn version_part(&self) -> &str {
        self.0.strip_prefix('v').unwrap_or(&self.0)
    }

    /// Parse this tag back into a version, if it names one
    pub fn version(&self) -> Option<SemVer> {
        SemVer::from_tag(&self.0)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

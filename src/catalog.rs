//! Version catalog - derives the latest released version from tag names.

use crate::domain::SemVer;
use crate::error::Result;
use crate::git::Repository;

/// Select the latest released version from a sequence of tag names.
///
/// Each tag is parsed as a semantic version after stripping a leading `v`;
/// tags that fail to parse are silently discarded since repositories carry
/// all kinds of non-version tags. When nothing parses (including an empty
/// repository) this returns 0.0.0, the documented base for a first release.
pub fn latest_version<I, S>(tags: I) -> SemVer
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| SemVer::from_tag(tag.as_ref()))
        .max()
        .unwrap_or_else(SemVer::zero)
}

/// Read the tag list from a repository and select the latest version
pub fn latest_repository_version<R: Repository>(repo: &R) -> Result<SemVer> {
    Ok(latest_version(repo.list_tags()?))
}

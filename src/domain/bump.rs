//! Bump engine - deterministic version transformations.
//!
//! Multiple bump flags may be requested in a single invocation; they apply
//! in a fixed order (major, minor, patch, prerelease, build) and compose,
//! each transforming the version produced by the previous step.

use semver::{BuildMetadata, Prerelease};

use super::version::SemVer;
use crate::error::{ReleaseError, Result};

/// Default token when a version gains its first prerelease identifier
const PRERELEASE_TOKEN: &str = "rc";

/// Default token when a version gains its first build metadata
const BUILD_TOKEN: &str = "build";

/// Set of independent bump flags requested by the caller.
///
/// Constructed once per invocation from CLI input; any combination may be
/// set, including none (which leaves the base version unchanged).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpRequest {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub prerelease: bool,
    pub build: bool,
}

impl BumpRequest {
    /// True when no bump flag is set
    pub fn is_empty(&self) -> bool {
        !(self.major || self.minor || self.patch || self.prerelease || self.build)
    }
}

/// Apply the requested bumps to `base`, returning a new version.
///
/// Flags apply in fixed order regardless of how the caller supplied them:
/// major, then minor, then patch, then prerelease, then build. A major,
/// minor, or patch bump clears any prerelease and build metadata.
///
/// # Returns
/// * `Ok(SemVer)` - The transformed version (the base itself when no flag is set)
/// * `Err(ReleaseError::Version)` - If an incremented identifier is not valid
pub fn bump(base: &SemVer, request: &BumpRequest) -> Result<SemVer> {
    let mut version = base.0.clone();

    if request.major {
        version.major += 1;
        version.minor = 0;
        version.patch = 0;
        version.pre = Prerelease::EMPTY;
        version.build = BuildMetadata::EMPTY;
    }
    if request.minor {
        version.minor += 1;
        version.patch = 0;
        version.pre = Prerelease::EMPTY;
        version.build = BuildMetadata::EMPTY;
    }
    if request.patch {
        version.patch += 1;
        version.pre = Prerelease::EMPTY;
        version.build = BuildMetadata::EMPTY;
    }
    if request.prerelease {
        let next = next_identifiers(version.pre.as_str(), PRERELEASE_TOKEN);
        version.pre = Prerelease::new(&next)
            .map_err(|e| ReleaseError::version(format!("Invalid prerelease '{}': {}", next, e)))?;
    }
    if request.build {
        let next = next_identifiers(version.build.as_str(), BUILD_TOKEN);
        version.build = BuildMetadata::new(&next).map_err(|e| {
            ReleaseError::version(format!("Invalid build metadata '{}': {}", next, e))
        })?;
    }

    Ok(SemVer(version))
}

/// Advance a dot-separated identifier sequence.
///
/// Empty sequence gains `<token>.1`; a numeric trailing identifier is
/// incremented; a sequence with a non-numeric tail gains a `.1` suffix.
fn next_identifiers(current: &str, token: &str) -> String {
    if current.is_empty() {
        return format!("{}.1", token);
    }

    let mut identifiers: Vec<String> = current.split('.').map(str::to_string).collect();
    match identifiers.last().and_then(|last| last.parse::<u64>().ok()) {
        Some(n) => {
            let tail = identifiers.len() - 1;
            identifiers[tail] = (n + 1).to_string();
            identifiers.join(".")
        }
        None => format!("{}.1", current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> SemVer {
        SemVer::parse(text).unwrap()
    }

    #[test]
    fn test_bump_major() {
        let bumped = bump(&v("1.2.3"), &BumpRequest { major: true, ..Default::default() }).unwrap();
        assert_eq!(bumped, v("2.0.0"));
    }

    #[test]
    fn test_bump_minor() {
        let bumped = bump(&v("1.2.3"), &BumpRequest { minor: true, ..Default::default() }).unwrap();
        assert_eq!(bumped, v("1.3.0"));
    }

    #[test]
    fn test_bump_patch() {
        let bumped = bump(&v("1.2.3"), &BumpRequest { patch: true, ..Default::default() }).unwrap();
        assert_eq!(bumped, v("1.2.4"));
    }

    #[test]
    fn test_bump_clears_prerelease_and_build() {
        let base = v("1.2.3-rc.2+build.7");
        let bumped = bump(&base, &BumpRequest { patch: true, ..Default::default() }).unwrap();
        assert_eq!(bumped, v("1.2.4"));
        assert!(!bumped.is_prerelease());
        assert!(bumped.build_metadata().is_empty());
    }

    #[test]
    fn test_bump_composes_in_fixed_order() {
        // The minor bump applies to the post-major value, not to the base
        let request = BumpRequest {
            major: true,
            minor: true,
            ..Default::default()
        };
        assert_eq!(bump(&v("1.2.3"), &request).unwrap(), v("2.1.0"));

        let request = BumpRequest {
            minor: true,
            patch: true,
            ..Default::default()
        };
        assert_eq!(bump(&v("1.2.3"), &request).unwrap(), v("1.3.1"));
    }

    #[test]
    fn test_bump_no_flags_is_identity() {
        let base = v("1.2.3");
        assert_eq!(bump(&base, &BumpRequest::default()).unwrap(), base);
    }

    #[test]
    fn test_bump_prerelease_initial() {
        let request = BumpRequest {
            prerelease: true,
            ..Default::default()
        };
        assert_eq!(bump(&v("1.2.3"), &request).unwrap(), v("1.2.3-rc.1"));
    }

    #[test]
    fn test_bump_prerelease_increments_numeric_tail() {
        let request = BumpRequest {
            prerelease: true,
            ..Default::default()
        };
        let first = bump(&v("1.2.3"), &request).unwrap();
        let second = bump(&first, &request).unwrap();
        assert_eq!(second, v("1.2.3-rc.2"));

        assert_eq!(bump(&v("1.0.0-beta.9"), &request).unwrap(), v("1.0.0-beta.10"));
    }

    #[test]
    fn test_bump_prerelease_appends_when_no_numeric_tail() {
        let request = BumpRequest {
            prerelease: true,
            ..Default::default()
        };
        assert_eq!(bump(&v("1.2.3-alpha"), &request).unwrap(), v("1.2.3-alpha.1"));
    }

    #[test]
    fn test_bump_build_initial_and_increment() {
        let request = BumpRequest {
            build: true,
            ..Default::default()
        };
        let first = bump(&v("1.2.3"), &request).unwrap();
        assert_eq!(first.build_metadata(), "build.1");
        let second = bump(&first, &request).unwrap();
        assert_eq!(second.build_metadata(), "build.2");
    }

    #[test]
    fn test_bump_major_and_prerelease() {
        // Prerelease applies after the major reset
        let request = BumpRequest {
            major: true,
            prerelease: true,
            ..Default::default()
        };
        assert_eq!(bump(&v("1.2.3-rc.4"), &request).unwrap(), v("2.0.0-rc.1"));
    }

    #[test]
    fn test_next_identifiers() {
        assert_eq!(next_identifiers("", "rc"), "rc.1");
        assert_eq!(next_identifiers("rc.1", "rc"), "rc.2");
        assert_eq!(next_identifiers("alpha", "rc"), "alpha.1");
        assert_eq!(next_identifiers("alpha.beta", "rc"), "alpha.beta.1");
        assert_eq!(next_identifiers("0", "rc"), "1");
    }

    #[test]
    fn test_request_is_empty() {
        assert!(BumpRequest::default().is_empty());
        assert!(!BumpRequest { build: true, ..Default::default() }.is_empty());
    }
}

//! Release workflow orchestration
//!
//! Sequences the five release stages: resolve the new version, report it,
//! commit the version string, create the tag, push the tag. Every stage
//! except resolution is optional; stages that took effect before a failure
//! are not rolled back (re-running only the failed stage is the expected
//! recovery path).

use crate::catalog;
use crate::config::ReleaseConfig;
use crate::domain::{bump, BumpRequest, SemVer, TagName};
use crate::error::Result;
use crate::git::Repository;
use crate::publisher::TagPublisher;
use crate::ui;

/// Caller input for one release invocation.
///
/// Mirrors the CLI flags in a format suitable for orchestration logic, so
/// the workflow can be called programmatically without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseRequest {
    /// Explicit base version, bypassing the catalog lookup
    pub from_version: Option<String>,

    /// Explicit final version, bypassing resolution and bumping entirely
    pub new_version: Option<String>,

    /// Bump flags applied to the resolved base version
    pub bump: BumpRequest,

    /// Commit the version file before tagging
    pub commit: bool,

    /// Commit message override
    pub commit_message: Option<String>,

    /// Create the annotated tag
    pub tag: bool,

    /// Tag annotation message override
    pub tag_message: Option<String>,

    /// Push the created tag
    pub push: bool,

    /// Remote to push to, defaulting to the configured remote
    pub push_remote: Option<String>,
}

/// Record of what one release invocation resolved and did.
///
/// Purely informational; the persisted state lives in the repository as
/// the tag and the optional version-string commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Resolved base version; `None` when an explicit final version was given
    pub old_version: Option<SemVer>,

    /// The version this invocation released
    pub new_version: SemVer,

    /// Whether a version-string commit actually occurred
    pub committed: bool,

    /// The created tag, if tagging was requested
    pub tag: Option<TagName>,

    /// The remote the tag was pushed to, if a push happened
    pub pushed_to: Option<String>,
}

/// Run the release workflow against a repository.
///
/// Stage results are printed as they occur; with no commit/tag/push flags
/// this is a pure read-only reporting operation (a dry run).
pub fn run_release<R: Repository>(
    repo: &R,
    settings: &ReleaseConfig,
    request: &ReleaseRequest,
) -> Result<ReleaseOutcome> {
    let publisher = TagPublisher::new(
        repo,
        settings.version_file.as_str(),
        settings.default_remote.as_str(),
    );

    // Stage 1: resolve the new version
    let (old_version, new_version) = if let Some(text) = &request.new_version {
        let version = SemVer::parse(text)?;
        ui::display_status("new version given directly");
        (None, version)
    } else {
        let base = match &request.from_version {
            Some(text) => SemVer::parse(text)?,
            None => catalog::latest_repository_version(repo)?,
        };
        ui::display_status(&format!("old version is {}", base));
        let next = bump(&base, &request.bump)?;
        (Some(base), next)
    };

    // Stage 2: report before any mutating action
    ui::display_status(&format!("new version is {}", new_version));

    // Stage 3: commit the version string
    let mut committed = false;
    if request.commit {
        let message = request
            .commit_message
            .clone()
            .unwrap_or_else(|| format!("release: bump version to {}", new_version));
        committed = publisher.commit_version_string(&message)?;
        if committed {
            ui::display_success(&format!("committed version string: {}", message));
        } else {
            ui::display_status("nothing to commit, version string unchanged");
        }
    }

    // Stage 4: create the tag
    let mut tag = None;
    if request.tag {
        let created = publisher.create_tag(&new_version, request.tag_message.as_deref())?;
        ui::display_success(&format!("created git tag {}", created));
        tag = Some(created);
    }

    // Stage 5: push the tag (a no-op when no tag was created)
    let mut pushed_to = None;
    if request.push {
        if let Some(tag) = &tag {
            let remote = publisher.push_tag(tag, request.push_remote.as_deref())?;
            ui::display_success(&format!("pushed {} to {}", tag, remote));
            pushed_to = Some(remote);
        }
    }

    if let (Some(tag), None) = (&tag, &pushed_to) {
        ui::display_manual_push_instruction(tag.as_str(), &settings.default_remote);
    }

    Ok(ReleaseOutcome {
        old_version,
        new_version,
        committed,
        tag,
        pushed_to,
    })
}

use std::path::Path;

use git2::{Repository as Git2Repo, StatusOptions};

use crate::error::{ReleaseError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository starting at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Credentials callback shared by network operations.
    ///
    /// Tries SSH keys from the conventional locations, then the SSH agent,
    /// then whatever default credential helper git2 can find.
    fn remote_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });
        callbacks
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(ReleaseError::Git(e)),
        }
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let tagger = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| {
                if e.code() == git2::ErrorCode::Exists {
                    ReleaseError::tag_exists(name)
                } else {
                    ReleaseError::Git(e)
                }
            })?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| ReleaseError::remote_rejected(remote, format!("cannot find remote: {}", e)))?;

        let mut push_options = git2::PushOptions::new();
        let mut callbacks = Self::remote_callbacks();

        // The remote reports per-ref rejection (non-fast-forward, permission)
        // through this callback rather than the push call itself.
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "push rejected for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);
        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| ReleaseError::remote_rejected(remote, e.message().to_string()))?;

        Ok(())
    }

    fn path_has_changes(&self, path: &str) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.pathspec(path);
        options.include_untracked(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    fn commit_path(&self, path: &str, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(Path::new(path))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        // An unborn HEAD (first commit in a fresh repository) has no parent.
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
            Err(e) => return Err(ReleaseError::Git(e)),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_discovers_or_fails_gracefully() {
        // Discovery depends on the environment; either outcome is acceptable here.
        // Behavior against a real repository is covered in tests/git_repository_test.rs.
        let _ = Git2Repository::open(".");
    }
}

use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::{ReleaseError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations.
///
/// Records tags, commits, and pushes so tests can assert on the exact
/// side effects a workflow produced. Push rejection can be simulated to
/// exercise the failure paths.
pub struct MockRepository {
    state: Mutex<MockState>,
    push_rejection: Option<String>,
}

#[derive(Default)]
struct MockState {
    /// (name, message) pairs in creation order; seeded tags have an empty message
    tags: Vec<(String, String)>,
    dirty_paths: HashSet<String>,
    commits: Vec<String>,
    /// (remote, tag) pairs in push order
    pushes: Vec<(String, String)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            state: Mutex::new(MockState::default()),
            push_rejection: None,
        }
    }

    /// Create a mock repository seeded with existing tag names
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = MockRepository::new();
        {
            let mut state = repo.state.lock().unwrap();
            for tag in tags {
                state.tags.push((tag.into(), String::new()));
            }
        }
        repo
    }

    /// Make every push fail with the given rejection reason
    pub fn rejecting_pushes(mut self, reason: impl Into<String>) -> Self {
        self.push_rejection = Some(reason.into());
        self
    }

    /// Mark a path as having pending working-tree changes
    pub fn mark_dirty(&self, path: impl Into<String>) {
        self.state.lock().unwrap().dirty_paths.insert(path.into());
    }

    /// The annotation message of a created tag, if it exists
    pub fn tag_message(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .tags
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, message)| message.clone())
    }

    /// Messages of commits made through this repository, oldest first
    pub fn commit_messages(&self) -> Vec<String> {
        self.state.lock().unwrap().commits.clone()
    }

    /// (remote, tag) pairs pushed through this repository, oldest first
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().pushes.clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tags
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .tags
            .iter()
            .any(|(tag, _)| tag == name))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.tags.iter().any(|(tag, _)| tag == name) {
            return Err(ReleaseError::tag_exists(name));
        }
        state.tags.push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if let Some(reason) = &self.push_rejection {
            return Err(ReleaseError::remote_rejected(remote, reason.clone()));
        }
        self.state
            .lock()
            .unwrap()
            .pushes
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }

    fn path_has_changes(&self, path: &str) -> Result<bool> {
        Ok(self.state.lock().unwrap().dirty_paths.contains(path))
    }

    fn commit_path(&self, path: &str, message: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.dirty_paths.remove(path);
        state.commits.push(message.to_string());
        Ok(())
    }
}

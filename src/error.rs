use thiserror::Error;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag '{0}' already exists")]
    TagExists(String),

    #[error("Remote '{remote}' rejected push: {reason}")]
    RemoteRejected { remote: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a tag-collision error for the given tag name
    pub fn tag_exists(name: impl Into<String>) -> Self {
        ReleaseError::TagExists(name.into())
    }

    /// Create a rejected-push error with the remote and the underlying reason
    pub fn remote_rejected(remote: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::RemoteRejected {
            remote: remote.into(),
            reason: reason.into(),
        }
    }
}

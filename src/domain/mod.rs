//! Domain logic - pure release rules independent of git operations

pub mod bump;
pub mod tag;
pub mod version;

pub use bump::{bump, BumpRequest};
pub use tag::TagName;
pub use version::SemVer;

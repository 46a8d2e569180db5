//! Access to the version accessors of the linked computer-vision library

use thiserror::Error;

#[cfg(feature = "opencv")]
pub mod opencv;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionComponents {
    pub major: i32,
    pub minor: i32,
    pub revision: i32,
}

#[derive(Debug, Error)]
pub enum VersionSourceError {
    #[error("Library accessor failed: {0}")]
    Library(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait VersionSource: Send + Sync {
    /// Version string exactly as reported by the library
    fn version_string(&self) -> Result<String, VersionSourceError>;

    fn version_components(&self) -> Result<VersionComponents, VersionSourceError>;
}

use thiserror::Error;

use crate::provider::version_source::VersionSourceError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Version source error: `{0}`")]
    VersionSource(#[from] VersionSourceError),
    #[error("Library reported an empty version string")]
    EmptyVersion,
}

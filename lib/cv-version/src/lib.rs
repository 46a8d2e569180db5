#![cfg_attr(feature = "strict", deny(warnings))]

use std::fmt;
use std::sync::Arc;

use provider::version_source::VersionSource;
use service::version::VersionService;

pub mod provider;
pub mod service;

#[derive(Clone)]
pub struct CvVersion {
    pub version_service: VersionService,
}

impl CvVersion {
    pub fn new(version_source: Arc<dyn VersionSource>) -> CvVersion {
        CvVersion {
            version_service: VersionService::new(version_source),
        }
    }

    /// Core backed by the linked OpenCV library
    #[cfg(feature = "opencv")]
    pub fn with_opencv() -> CvVersion {
        Self::new(Arc::new(
            provider::version_source::opencv::OpenCvVersionSource,
        ))
    }

    pub fn build_info() -> BuildInfo {
        use shadow_rs::shadow;

        shadow!(build);

        BuildInfo {
            crate_version: build::PKG_VERSION.to_owned(),
            branch: build::BRANCH.to_owned(),
            commit: build::COMMIT_HASH.to_owned(),
            build_time: build::BUILD_TIME_3339.to_owned(),
            rust_version: build::RUST_VERSION.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub crate_version: String,
    pub branch: String,
    pub commit: String,
    pub build_time: String,
    pub rust_version: String,
}

const SHORT_COMMIT_LEN: usize = 7;

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.commit.get(..SHORT_COMMIT_LEN) {
            Some(short_commit) => write!(f, "{} ({short_commit})", self.crate_version),
            None if self.commit.is_empty() => write!(f, "{}", self.crate_version),
            None => write!(f, "{} ({})", self.crate_version, self.commit),
        }
    }
}

use opencv::core;

use super::{VersionComponents, VersionSource, VersionSourceError};

/// Reads the version compiled into the linked OpenCV library
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenCvVersionSource;

impl VersionSource for OpenCvVersionSource {
    fn version_string(&self) -> Result<String, VersionSourceError> {
        Ok(core::get_version_string()?)
    }

    fn version_components(&self) -> Result<VersionComponents, VersionSourceError> {
        Ok(VersionComponents {
            major: core::get_version_major()?,
            minor: core::get_version_minor()?,
            revision: core::get_version_revision()?,
        })
    }
}

impl From<opencv::Error> for VersionSourceError {
    fn from(error: opencv::Error) -> Self {
        Self::Library(error.message)
    }
}

#[cfg(test)]
mod test {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_version_string_matches_library() {
        let version = OpenCvVersionSource.version_string().unwrap();

        assert!(!version.is_empty());
        assert_eq!(version, core::get_version_string().unwrap());
    }

    #[test]
    fn test_components_prefix_version_string() {
        let components = OpenCvVersionSource.version_components().unwrap();
        let version = OpenCvVersionSource.version_string().unwrap();

        let prefix = format!(
            "{}.{}.{}",
            components.major, components.minor, components.revision
        );
        assert!(version.starts_with(&prefix), "{version} vs {prefix}");
    }
}

use super::VersionService;
use super::dto::{LibraryVersion, VersionComponents};
use crate::service::error::ServiceError;

impl VersionService {
    /// Queries the library version and logs it once
    pub fn get_library_version(&self) -> Result<LibraryVersion, ServiceError> {
        let version = self.version_source.version_string()?;
        if version.is_empty() {
            return Err(ServiceError::EmptyVersion);
        }

        tracing::info!("OpenCV version: {version}");
        Ok(LibraryVersion::new(version))
    }

    pub fn get_library_version_components(&self) -> Result<VersionComponents, ServiceError> {
        Ok(self.version_source.version_components()?)
    }
}

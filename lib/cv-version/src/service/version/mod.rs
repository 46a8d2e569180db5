use std::sync::Arc;

use crate::provider::version_source::VersionSource;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct VersionService {
    version_source: Arc<dyn VersionSource>,
}

impl VersionService {
    pub(crate) fn new(version_source: Arc<dyn VersionSource>) -> Self {
        Self { version_source }
    }
}

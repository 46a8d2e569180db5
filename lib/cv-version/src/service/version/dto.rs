use std::fmt;

pub use crate::provider::version_source::VersionComponents;

/// Library version string, byte-identical to the library accessor output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryVersion(String);

impl LibraryVersion {
    pub(super) fn new(version: String) -> Self {
        Self(version)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LibraryVersion> for String {
    fn from(value: LibraryVersion) -> Self {
        value.0
    }
}

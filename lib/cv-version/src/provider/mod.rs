pub mod version_source;

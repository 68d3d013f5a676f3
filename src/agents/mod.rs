pub mod manifest_reader;
pub mod package_updater;
pub mod poetry_execution;

pub use manifest_reader::ManifestReader;
pub use package_updater::PackageUpdater;

use anyhow::Result;

mod fixture;
mod http;
mod local;

pub use fixture::FixtureManifestSource;
pub use http::HttpManifestSource;
pub use local::{LocalManifestSource, MANIFEST_FILE_NAME};

/// Supplies the direct dependencies of a single package.
pub trait ManifestSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>>;

    /// Human-readable location used in logs.
    fn describe(&self) -> String;
}

impl<T: ManifestSource + ?Sized> ManifestSource for &T {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>> {
        (**self).direct_dependencies(package)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ManifestSource + ?Sized> ManifestSource for Box<T> {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>> {
        (**self).direct_dependencies(package)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

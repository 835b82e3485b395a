mod error;
mod fixture;
mod manifest;
mod package;

pub use error::{FetchError, FixtureError, ValidationError};
pub use fixture::FixtureGraph;
pub use manifest::parse_manifest_dependencies;
pub use package::{is_fixture_package_name, validate_package_name};

use std::path::PathBuf;

use thiserror::Error;

/// Bad user input, detected before any traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Package name cannot be empty.")]
    EmptyPackage,
    #[error("Repository URL or path must be provided.")]
    MissingRepository,
    #[error("Repository path does not exist and is not a valid URL: {0}")]
    RepositoryNotFound(String),
    #[error("Mode must be one of online, offline, test, got: {0}")]
    UnknownMode(String),
    #[error("Max depth must be an integer.")]
    DepthNotInteger,
    #[error("Max depth must be non-negative.")]
    DepthNegative,
    #[error("Mode '{mode}' requires {expected}, got: {repo}")]
    RepositoryKindMismatch {
        mode: String,
        expected: &'static str,
        repo: String,
    },
    #[error("Package name '{0}' is not allowed in test mode: names must be uppercase letters")]
    FixturePackageName(String),
}

/// A test-graph file that cannot be trusted as a dependency source.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed reading test graph {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("test graph line {line}: missing ':' in '{text}'")]
    MissingColon { line: usize, text: String },
    #[error("test graph line {line}: invalid package name '{name}'")]
    InvalidName { line: usize, name: String },
    #[error("test graph line {line}: invalid dependency name '{name}' for '{package}'")]
    InvalidDependency {
        line: usize,
        package: String,
        name: String,
    },
    #[error("test graph line {line}: package '{name}' is already defined")]
    DuplicatePackage { line: usize, name: String },
}

/// One package's manifest could not be produced. Recoverable per node.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("manifest request for '{package}' to {url} failed: {reason}")]
    Request {
        package: String,
        url: String,
        reason: String,
    },
    #[error("manifest for '{package}' not found at {}", .path.display())]
    MissingManifest { package: String, path: PathBuf },
    #[error("package '{0}' is not a valid manifest lookup key")]
    InvalidLookup(String),
    #[error("package '{0}' is not defined in the test graph")]
    NotInFixture(String),
}

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use deptrace_core::{is_fixture_package_name, validate_package_name, ValidationError};
use reqwest::Url;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    Online,
    Offline,
    Test,
}

impl Mode {
    pub(crate) fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "test" => Ok(Self::Test),
            other => Err(ValidationError::UnknownMode(other.to_string())),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Test => "test",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Repository {
    Url(String),
    Path(PathBuf),
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated command-line input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) package: String,
    pub(crate) repository: Repository,
    pub(crate) mode: Mode,
    pub(crate) max_depth: usize,
}

impl Config {
    pub(crate) fn from_args(
        package: &str,
        repo: &str,
        mode: &str,
        max_depth: &str,
    ) -> Result<Self> {
        let package = validate_package_name(package)?;
        let repository = parse_repository(repo)?;
        let mode = Mode::parse(mode)?;
        let max_depth = parse_max_depth(max_depth)?;

        match (mode, &repository) {
            (Mode::Online, Repository::Url(_))
            | (Mode::Offline, Repository::Path(_))
            | (Mode::Test, Repository::Path(_)) => {}
            (Mode::Online, Repository::Path(_)) => {
                let expected = "an http(s) repository URL";
                return Err(repository_mismatch(mode, expected, &repository).into());
            }
            (Mode::Offline | Mode::Test, Repository::Url(_)) => {
                return Err(repository_mismatch(mode, "a repository path", &repository).into());
            }
        }

        if mode == Mode::Test && !is_fixture_package_name(&package) {
            return Err(ValidationError::FixturePackageName(package).into());
        }

        Ok(Self {
            package,
            repository,
            mode,
            max_depth,
        })
    }
}

fn repository_mismatch(
    mode: Mode,
    expected: &'static str,
    repository: &Repository,
) -> ValidationError {
    ValidationError::RepositoryKindMismatch {
        mode: mode.as_str().to_string(),
        expected,
        repo: repository.to_string(),
    }
}

pub(crate) fn parse_repository(raw: &str) -> Result<Repository> {
    if raw.is_empty() {
        return Err(ValidationError::MissingRepository.into());
    }

    if let Ok(url) = Url::parse(raw) {
        if matches!(url.scheme(), "http" | "https") {
            return Ok(Repository::Url(raw.to_string()));
        }
    }

    let path = Path::new(raw);
    if !path.exists() {
        return Err(ValidationError::RepositoryNotFound(raw.to_string()).into());
    }
    let absolute = std::path::absolute(path)
        .with_context(|| format!("failed resolving repository path: {raw}"))?;
    Ok(Repository::Path(absolute))
}

pub(crate) fn parse_max_depth(raw: &str) -> Result<usize, ValidationError> {
    let depth: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::DepthNotInteger)?;
    if depth < 0 {
        return Err(ValidationError::DepthNegative);
    }
    usize::try_from(depth).map_err(|_| ValidationError::DepthNotInteger)
}

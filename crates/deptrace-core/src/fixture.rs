use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::FixtureError;
use crate::package::is_fixture_package_name;

/// Preloaded dependency data for test mode, one `NAME: dep1 dep2` line per
/// package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureGraph {
    packages: IndexMap<String, Vec<String>>,
}

impl FixtureGraph {
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|source| FixtureError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(input: &str) -> Result<Self, FixtureError> {
        let mut packages = IndexMap::new();

        for (index, raw_line) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, deps)) = line.split_once(':') else {
                return Err(FixtureError::MissingColon {
                    line: line_number,
                    text: line.to_string(),
                });
            };

            let name = name.trim();
            if !is_fixture_package_name(name) {
                return Err(FixtureError::InvalidName {
                    line: line_number,
                    name: name.to_string(),
                });
            }

            let mut dependencies = Vec::new();
            for dep in deps.split_whitespace() {
                if !is_fixture_package_name(dep) {
                    return Err(FixtureError::InvalidDependency {
                        line: line_number,
                        package: name.to_string(),
                        name: dep.to_string(),
                    });
                }
                dependencies.push(dep.to_string());
            }

            if packages.contains_key(name) {
                return Err(FixtureError::DuplicatePackage {
                    line: line_number,
                    name: name.to_string(),
                });
            }
            packages.insert(name.to_string(), dependencies);
        }

        Ok(Self { packages })
    }

    pub fn dependencies(&self, name: &str) -> Option<&[String]> {
        self.packages.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use deptrace_core::{parse_manifest_dependencies, FetchError};
use tracing::trace;

use crate::ManifestSource;

pub const MANIFEST_FILE_NAME: &str = "deptrace.toml";

/// Reads `<root>/<package>/deptrace.toml` for every lookup.
#[derive(Debug, Clone)]
pub struct LocalManifestSource {
    root: PathBuf,
}

impl LocalManifestSource {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self, package: &str) -> Result<PathBuf> {
        validate_lookup_key(package)?;
        Ok(self.root.join(package).join(MANIFEST_FILE_NAME))
    }
}

impl ManifestSource for LocalManifestSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>> {
        let path = self.manifest_path(package)?;
        if !path.is_file() {
            return Err(FetchError::MissingManifest {
                package: package.to_string(),
                path,
            }
            .into());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed reading manifest: {}", path.display()))?;
        let dependencies = parse_manifest_dependencies(&content);
        trace!(package, path = %path.display(), count = dependencies.len(), "read local manifest");
        Ok(dependencies)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

fn validate_lookup_key(package: &str) -> Result<(), FetchError> {
    let escapes_root = package.is_empty()
        || package == "."
        || package == ".."
        || package.contains(['/', '\\'])
        || Path::new(package).is_absolute();
    if escapes_root {
        return Err(FetchError::InvalidLookup(package.to_string()));
    }
    Ok(())
}

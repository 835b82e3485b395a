use std::cell::RefCell;
use std::time::Duration;

use anyhow::{Context, Result};
use deptrace_core::{parse_manifest_dependencies, FetchError};
use reqwest::blocking::Client;
use tracing::debug;

use crate::ManifestSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches one remote manifest. Every package resolves to the same URL, so
/// the parsed body is reused after the first successful request.
#[derive(Debug)]
pub struct HttpManifestSource {
    url: String,
    client: Client,
    cached: RefCell<Option<Vec<String>>>,
}

impl HttpManifestSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("deptrace/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed building HTTP client")?;
        Ok(Self {
            url: url.into(),
            client,
            cached: RefCell::new(None),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_manifest(&self, package: &str) -> Result<String, FetchError> {
        let request_failed = |reason: String| FetchError::Request {
            package: package.to_string(),
            url: self.url.clone(),
            reason,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| request_failed(err.to_string()))?;
        response.text().map_err(|err| request_failed(err.to_string()))
    }
}

impl ManifestSource for HttpManifestSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<String>> {
        if let Some(dependencies) = self.cached.borrow().as_ref() {
            return Ok(dependencies.clone());
        }

        debug!(package, url = %self.url, "fetching remote manifest");
        let body = self.fetch_manifest(package)?;
        let dependencies = parse_manifest_dependencies(&body);
        self.cached.replace(Some(dependencies.clone()));
        Ok(dependencies)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

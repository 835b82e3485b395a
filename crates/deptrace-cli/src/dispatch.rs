use std::io::Write;

use anyhow::{Context, Result};
use deptrace_core::{FixtureError, ValidationError};
use deptrace_registry::{
    FixtureManifestSource, HttpManifestSource, LocalManifestSource, ManifestSource,
};
use deptrace_resolver::{
    resolve_dependency_graph, CollectedWarnings, ResolvedGraph, WarningSink,
};
use clap::error::ErrorKind;
use tracing::{debug, info};

use crate::config::{Config, Mode, Repository};
use crate::render::{
    format_configuration_lines, format_graph_lines, format_install_order_lines,
    render_json_report, OutputStyle, StderrWarnings,
};
use crate::{Cli, OutputFormat};

/// Runs one resolution, writing the report to `out`. Every input, including
/// the test graph, is validated before the first byte is written.
pub(crate) fn run_cli(cli: Cli, style: OutputStyle, out: &mut dyn Write) -> Result<()> {
    let config = Config::from_args(&cli.package, &cli.repo, &cli.mode, &cli.max_depth)?;
    let source = open_manifest_source(&config)?;
    debug!(source = %source.describe(), mode = config.mode.as_str(), "opened manifest source");

    match cli.format {
        OutputFormat::Text => {
            write_lines(out, &format_configuration_lines(&config, style))?;
            let mut warnings = StderrWarnings::new(style);
            let resolved = resolve_with_source(&config, source.as_ref(), &mut warnings);
            write_lines(out, &format_resolution_lines(&config, &resolved, style))?;
            if warnings.count() > 0 {
                info!(count = warnings.count(), "some manifests could not be fetched");
            }
        }
        OutputFormat::Json => {
            let mut warnings = CollectedWarnings::default();
            let resolved = resolve_with_source(&config, source.as_ref(), &mut warnings);
            let report = render_json_report(&config, &resolved, warnings.messages())?;
            writeln!(out, "{report}").context("failed writing resolution report")?;
        }
    }

    Ok(())
}

pub(crate) fn open_manifest_source(config: &Config) -> Result<Box<dyn ManifestSource>> {
    match (config.mode, &config.repository) {
        (Mode::Online, Repository::Url(url)) => {
            Ok(Box::new(HttpManifestSource::new(url.as_str())?))
        }
        (Mode::Offline, Repository::Path(root)) => {
            Ok(Box::new(LocalManifestSource::open(root.as_path())))
        }
        (Mode::Test, Repository::Path(path)) => Ok(Box::new(FixtureManifestSource::load(path)?)),
        (mode, repository) => Err(ValidationError::RepositoryKindMismatch {
            mode: mode.as_str().to_string(),
            expected: "a matching repository kind",
            repo: repository.to_string(),
        }
        .into()),
    }
}

pub(crate) fn resolve_with_source(
    config: &Config,
    source: &dyn ManifestSource,
    warnings: &mut dyn WarningSink,
) -> ResolvedGraph {
    resolve_dependency_graph(
        &config.package,
        config.max_depth,
        |name| source.direct_dependencies(name),
        warnings,
    )
}

/// Installation order is only listed in test mode.
pub(crate) fn format_resolution_lines(
    config: &Config,
    resolved: &ResolvedGraph,
    style: OutputStyle,
) -> Vec<String> {
    let mut lines = Vec::new();
    if config.mode == Mode::Test {
        lines.extend(format_install_order_lines(&resolved.install_order, style));
    }
    lines.extend(format_graph_lines(&resolved.graph, style));
    lines
}

fn write_lines(out: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").context("failed writing resolution report")?;
    }
    Ok(())
}

/// Argument-parser failures are missing or invalid required input.
pub(crate) fn parse_failure_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FailureKind {
    Domain,
    Unexpected,
}

impl FailureKind {
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            Self::Domain => 1,
            Self::Unexpected => 2,
        }
    }
}

pub(crate) fn classify_failure(err: &anyhow::Error) -> FailureKind {
    let is_domain = err
        .chain()
        .any(|cause| cause.is::<ValidationError>() || cause.is::<FixtureError>());
    if is_domain {
        FailureKind::Domain
    } else {
        FailureKind::Unexpected
    }
}

pub(crate) fn render_failure(kind: FailureKind, err: &anyhow::Error) -> String {
    match kind {
        FailureKind::Domain => format!("Error: {err:#}"),
        FailureKind::Unexpected => format!("Unexpected error: {err:#}"),
    }
}

use anstyle::{AnsiColor, Effects, Style};
use anyhow::{Context, Result};
use deptrace_resolver::{DependencyGraph, ResolvedGraph, WarningSink};
use serde::Serialize;

use crate::config::Config;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum ColorChoice {
    Auto,
    Always,
    Never,
}

pub(crate) fn resolve_output_style(
    choice: ColorChoice,
    stdout_is_terminal: bool,
    no_color: bool,
) -> OutputStyle {
    match choice {
        ColorChoice::Always => OutputStyle::Rich,
        ColorChoice::Never => OutputStyle::Plain,
        ColorChoice::Auto if stdout_is_terminal && !no_color => OutputStyle::Rich,
        ColorChoice::Auto => OutputStyle::Plain,
    }
}

pub(crate) fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match (style, status) {
        (OutputStyle::Plain, "warn") => format!("warning: {message}"),
        (OutputStyle::Plain, _) => message.to_string(),
        (OutputStyle::Rich, _) => {
            let badge = format!("[{}]", status.to_ascii_uppercase());
            format!("{} {message}", colorize(status_style(status), &badge))
        }
    }
}

fn status_style(status: &str) -> Style {
    let color = match status {
        "warn" => AnsiColor::BrightYellow,
        "error" => AnsiColor::BrightRed,
        _ => AnsiColor::BrightGreen,
    };
    Style::new()
        .fg_color(Some(color.into()))
        .effects(Effects::BOLD)
}

fn render_section_header(style: OutputStyle, title: &str) -> String {
    let line = format!("{title}:");
    match style {
        OutputStyle::Plain => line,
        OutputStyle::Rich => colorize(section_style(), &line),
    }
}

fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

pub(crate) fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub(crate) fn format_configuration_lines(config: &Config, style: OutputStyle) -> Vec<String> {
    vec![
        render_section_header(style, "Configuration"),
        format!("  package = {}", config.package),
        format!("  repo = {}", config.repository),
        format!("  mode = {}", config.mode.as_str()),
        format!("  max_depth = {}", config.max_depth),
    ]
}

pub(crate) fn format_install_order_lines(order: &[String], style: OutputStyle) -> Vec<String> {
    let mut lines = vec![render_section_header(style, "Installation order")];
    lines.extend(
        order
            .iter()
            .enumerate()
            .map(|(index, name)| format!("  {}. {name}", index + 1)),
    );
    lines
}

pub(crate) fn format_graph_lines(graph: &DependencyGraph, style: OutputStyle) -> Vec<String> {
    let mut lines = vec![render_section_header(style, "Dependency graph")];
    for (name, dependencies) in graph.iter() {
        if dependencies.is_empty() {
            lines.push(format!("  {name} -> (no dependencies)"));
        } else {
            lines.push(format!("  {name} -> {}", dependencies.join(", ")));
        }
    }
    lines
}

#[derive(Serialize)]
struct JsonConfig<'a> {
    package: &'a str,
    repo: String,
    mode: &'static str,
    max_depth: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: JsonConfig<'a>,
    install_order: &'a [String],
    graph: &'a DependencyGraph,
    warnings: &'a [String],
}

pub(crate) fn render_json_report(
    config: &Config,
    resolved: &ResolvedGraph,
    warnings: &[String],
) -> Result<String> {
    let report = JsonReport {
        config: JsonConfig {
            package: &config.package,
            repo: config.repository.to_string(),
            mode: config.mode.as_str(),
            max_depth: config.max_depth,
        },
        install_order: &resolved.install_order,
        graph: &resolved.graph,
        warnings,
    };
    serde_json::to_string_pretty(&report).context("failed serializing resolution report")
}

/// Prints fetch warnings to stderr as they happen.
#[derive(Debug)]
pub(crate) struct StderrWarnings {
    style: OutputStyle,
    count: usize,
}

impl StderrWarnings {
    pub(crate) fn new(style: OutputStyle) -> Self {
        Self { style, count: 0 }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

impl WarningSink for StderrWarnings {
    fn warn(&mut self, message: &str) {
        self.count += 1;
        eprintln!("{}", render_status_line(self.style, "warn", message));
    }
}

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

mod config;
mod dispatch;
mod logging;
mod render;

use dispatch::{classify_failure, parse_failure_exit_code, render_failure, run_cli};
use logging::init_logging;
use render::{resolve_output_style, ColorChoice};

#[derive(Parser, Debug)]
#[command(name = "deptrace")]
#[command(
    about = "Resolve the transitive dependencies of a package and an installation order",
    long_about = None
)]
struct Cli {
    /// Package to resolve
    #[arg(long)]
    package: String,
    /// Manifest URL (online) or repository path (offline, test)
    #[arg(long)]
    repo: String,
    /// One of: online, offline, test
    #[arg(long)]
    mode: String,
    /// Levels of dependencies to expand below the package
    #[arg(long, allow_hyphen_values = true)]
    max_depth: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_failure_exit_code(err.kind()));
        }
    };

    let style = resolve_output_style(
        cli.color,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    init_logging(style);

    let mut stdout = std::io::stdout().lock();
    match run_cli(cli, style, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = classify_failure(&err);
            eprintln!("{}", render_failure(kind, &err));
            ExitCode::from(kind.exit_code())
        }
    }
}

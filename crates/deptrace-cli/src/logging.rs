use tracing_subscriber::EnvFilter;

use crate::render::OutputStyle;

pub(crate) const LOG_ENV: &str = "DEPTRACE_LOG";
const DEFAULT_FILTER: &str = "warn";

pub(crate) fn init_logging(style: OutputStyle) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // Ignored when a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(style == OutputStyle::Rich)
        .with_target(false)
        .compact()
        .try_init();
}

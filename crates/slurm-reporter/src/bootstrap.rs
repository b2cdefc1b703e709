use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` accepts the upper-case level names exposed on the CLI
/// and is mapped to a [`tracing_subscriber::EnvFilter`] directive;
/// `debug` forces the
/// filter to `debug` regardless of the level. All diagnostics go to
/// stderr, keeping stdout free for the progress lines.
pub fn setup_logging(log_level: &str, debug: bool) -> anyhow::Result<()> {
    let directive = if debug { "debug" } else { map_log_level(log_level) };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

/// Map the CLI level names to tracing directives.
fn map_log_level(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

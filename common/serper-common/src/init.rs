//! Tracing initialization
//!
//! Provides standardized logging setup for the mock server and CLI.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
///
/// Sets up logging to stderr (stdout is reserved for CLI JSON output) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - A default level for the specified crate derived from `verbose`
///   (0 = info, 1 = debug, 2+ = trace)
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the crate to enable (e.g., "serper_mock")
/// * `verbose` - Number of `-v` flags passed on the command line
///
/// # Example
///
/// ```rust,ignore
/// serper_common::init_tracing("serper_mock", 0)?;
/// ```
pub fn init_tracing(crate_name: &str, verbose: u8) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, level_for(verbose));
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Map a `-v` count to a tracing level name
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

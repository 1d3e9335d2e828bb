//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "composer_license_auditor=warn";
const VERBOSE_LOG_FILTER: &str = "composer_license_auditor=debug";

/// Initialize tracing on stderr.
///
/// `RUST_LOG` wins over the flags; `verbose` raises the default level to
/// debug and `quiet` lowers it to errors only.
pub fn init_logging(verbose: bool, quiet: bool) {
    let fallback = if quiet {
        "error"
    } else if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

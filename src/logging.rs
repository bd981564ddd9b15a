use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub const LOG_ENV_VAR: &str = "SQLHINT_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter from `SQLHINT_LOG` (e.g. `sqlhint_app=debug`), falling back to
/// `warn` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Logs go to stderr so stdout stays clean for completion output.
pub fn init() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("Failed to set tracing subscriber: {e}"))
}

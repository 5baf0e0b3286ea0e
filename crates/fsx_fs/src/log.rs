use anyhow::anyhow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "FSX_LOG";

const DEFAULT_FILTER: &str = "fsx_fs=info";

/// Installs a global `tracing` subscriber writing to stderr.
///
/// The filter is read from `FSX_LOG` (e.g. `FSX_LOG=fsx_fs=debug`) and falls
/// back to `fsx_fs=info`. Fails if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize tracing: {err}"))?;

    debug!("Logging system initialized successfully");
    Ok(())
}

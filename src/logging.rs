use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Start stderr logging; `RUST_LOG` overrides `default_level`
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn init_logging(default_level: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(default_level)
        .with_context(|| format!("Invalid log level {:?}", default_level))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file. Wins over `logging.file`.
pub const LOG_ENV: &str = "NEWSDESK_LOG";

/// Base log path: `NEWSDESK_LOG` when set and non-empty, else `logging.file`.
pub fn log_base_path(env_value: Option<String>, config: &LoggingConfig) -> Option<PathBuf> {
    env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// `{base}.{YYYYmmdd-HHMMSS}.{pid}`, so parallel runs never share a file.
pub fn unique_log_path(base: &Path, now: DateTime<Local>, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", now.format("%Y%m%d-%H%M%S"), pid));
    PathBuf::from(name)
}

/// Start file logging for this run.
///
/// Command output owns stdout, so nothing is logged unless a file is
/// configured. `RUST_LOG` overrides `logging.level`.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(base) = log_base_path(std::env::var(LOG_ENV).ok(), config) else {
        return;
    };
    let path = unique_log_path(&base, Local::now(), std::process::id());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::debug!(path = %path.display(), "Logging started");
}

//! File-only tracing setup for the terminal client.
//!
//! The TUI owns stdout and stderr, so logs always go to a per-session file.
//! Follow them with `tail -f` from another terminal.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes and closes
/// the log file.
pub fn setup_logging(session_label: Option<&str>) -> Result<WorkerGuard> {
    let label = match session_label {
        Some(label) => label.to_string(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    let session_log_dir = log_directory().join(&label);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", label);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// `TACTICS_LOG_DIR`, else the platform cache directory.
pub fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("TACTICS_LOG_DIR") {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("", "", "tactics")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tactics").join("logs"))
}

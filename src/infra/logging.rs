//! Structured logging setup
//!
//! RUST_LOG wins over the configured level. The CLI logs to stderr so stdout
//! stays clean for reports; the dashboard owns the terminal and logs to a file.

use crate::infra::config::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    /// File sink at the configured path
    pub fn file_from(config: &Config) -> Self {
        LogSink::File(PathBuf::from(config.log_file()))
    }
}

pub fn init_logging(config: &Config, sink: LogSink) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false);

    let result = match sink {
        LogSink::Stderr if config.log_json() => builder.json().with_writer(std::io::stderr).try_init(),
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
                }
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let writer = Mutex::new(file);

            if config.log_json() {
                builder.json().with_ansi(false).with_writer(writer).try_init()
            } else {
                builder.with_ansi(false).with_writer(writer).try_init()
            }
        }
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

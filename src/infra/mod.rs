//! Infrastructure - configuration and logging
//!
//! - `config` - Application configuration (TOML loading, defaults)
//! - `logging` - tracing subscriber setup

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{Config, ReportFormat};
pub use logging::{init_logging, LogSink};

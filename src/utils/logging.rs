//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the PCB Point client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{PcbPointError, Result};

/// Initialize logging based on configuration.
///
/// Console output goes to stderr so page output on stdout stays clean. The
/// returned guard must be held for the life of the process when a log file
/// is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PcbPointError::Config(format!("Invalid log filter: {}", e)))?;

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "pcbpoint.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
                .try_init()
                .map_err(|e| PcbPointError::Config(format!("Logging already initialized: {}", e)))?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()
                .map_err(|e| PcbPointError::Config(format!("Logging already initialized: {}", e)))?;
            None
        }
    };

    debug!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log authentication events
pub fn log_auth_event(role: &str, action: &str, success: bool) {
    if success {
        info!(role = role, action = action, "Authentication event: success");
    } else {
        warn!(role = role, action = action, "Authentication event: failure");
    }
}

/// Log a completed API call
pub fn log_api_call(method: &str, path: &str, status: u16, duration_ms: u64) {
    if status < 400 {
        debug!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API call completed"
        );
    } else {
        warn!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API call returned an error status"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventHub application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventHubError, ErrorSeverity, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop, so callers keep it
/// alive for as long as they log.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| EventHubError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin mutations (create, update, delete)
pub fn log_admin_action(action: &str, resource: &str, target: Option<&str>) {
    warn!(
        action = action,
        resource = resource,
        record_id = target.unwrap_or("-"),
        "Admin action performed"
    );
}

/// Log outgoing API requests
pub fn log_api_request(method: &str, path: &str, request_id: &str) {
    debug!(
        method = method,
        path = path,
        request_id = request_id,
        "API request"
    );
}

/// Log API errors with context, at a level matching their severity
pub fn log_api_error(context: &str, err: &EventHubError) {
    match err.severity() {
        ErrorSeverity::Info => info!(context = context, error = %err, "API call rejected"),
        ErrorSeverity::Warning => warn!(context = context, error = %err, "API call rejected"),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            context = context,
            error = %err,
            recoverable = err.is_recoverable(),
            "API error occurred"
        ),
    }
}

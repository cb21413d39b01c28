//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use chrono::format::{Item, StrftimeItems};
use crate::utils::errors::{EventHubError, Result};
use super::Settings;

/// Largest UTC offset chrono accepts, in minutes (just under a day)
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_display_config(&settings.display)?;
    validate_pagination_config(&settings.pagination)?;
    validate_export_config(&settings.export)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventHubError::Config(
            "API base URL is required".to_string()
        ));
    }

    url::Url::parse(&config.base_url).map_err(|e| {
        EventHubError::Config(format!("Invalid API base URL {}: {}", config.base_url, e))
    })?;

    if config.timeout_seconds == 0 {
        return Err(EventHubError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if let Some(token) = &config.auth_token {
        if token.trim().is_empty() {
            return Err(EventHubError::Config(
                "API auth token must not be blank when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate date display configuration
fn validate_display_config(config: &super::DisplayConfig) -> Result<()> {
    if config.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(EventHubError::Config(
            format!("UTC offset out of range: {} minutes", config.utc_offset_minutes)
        ));
    }

    if config.date_format.is_empty() || config.datetime_format.is_empty() {
        return Err(EventHubError::Config(
            "Date formats are required".to_string()
        ));
    }

    validate_strftime("date_format", &config.date_format)?;
    validate_strftime("datetime_format", &config.datetime_format)?;

    Ok(())
}

/// chrono panics when rendering a format with an unknown specifier
fn validate_strftime(name: &str, format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(EventHubError::Config(
            format!("Invalid {}: {:?}", name, format)
        ));
    }

    Ok(())
}

/// Validate list sizes
fn validate_pagination_config(config: &super::PaginationConfig) -> Result<()> {
    if config.admin_page_size == 0 {
        return Err(EventHubError::Config(
            "Admin page size must be greater than 0".to_string()
        ));
    }

    if config.landing_initial_count == 0 || config.landing_step == 0 {
        return Err(EventHubError::Config(
            "Landing list counts must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate export file names
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.participants_file.is_empty() || config.subscribers_file.is_empty() {
        return Err(EventHubError::Config(
            "Export file names are required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

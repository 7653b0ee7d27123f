//! Configuration validation.
//!
//! Collects every problem in one pass so a bad config file reports all of
//! its errors at once instead of failing on the first.

use crate::AppConfig;
use roster_core::PageSize;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// URL is not an absolute http(s) URL.
    InvalidUrl { name: String, message: String },
    /// Page size is not one of the selectable options.
    InvalidPageSize { value: usize },
    /// A required text value is empty.
    EmptyValue { name: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { name, message } => write!(f, "Invalid URL for {name}: {message}"),
            Self::InvalidPageSize { value } => write!(
                f,
                "Invalid dashboard.default_page_size: {value} (must be one of {:?})",
                PageSize::OPTIONS
            ),
            Self::EmptyValue { name } => write!(f, "{name} cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_api(config, &mut errors);
        Self::validate_dashboard(config, &mut errors);

        if config.logging.filter.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyValue {
                name: "logging.filter".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_api(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let invalid = |message: String| ConfigValidationError::InvalidUrl {
            name: "api.base_url".to_string(),
            message,
        };

        match Url::parse(&config.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(invalid(format!("unsupported scheme '{}'", url.scheme()))),
            Err(e) => errors.push(invalid(e.to_string())),
        }

        if config.api.user_agent.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyValue {
                name: "api.user_agent".to_string(),
            });
        }
    }

    fn validate_dashboard(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let value = config.dashboard.default_page_size;
        if !PageSize::new(value).is_ok_and(PageSize::is_option) {
            errors.push(ConfigValidationError::InvalidPageSize { value });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

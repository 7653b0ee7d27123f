//! Application configuration structures.

use roster_core::{LoggingConfig, PageSize};
use serde::{Deserialize, Serialize};

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Users API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard view defaults.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "roster".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Users API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection endpoint of the users resource.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("roster/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Dashboard view defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Initial rows per page; one of [`PageSize::OPTIONS`].
    pub default_page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::DEFAULT.get(),
        }
    }
}

impl DashboardConfig {
    /// Returns the configured page size, or the default when it is zero.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.default_page_size).unwrap_or_default()
    }
}

//! Startup utilities.

use reqwest::Client;
use roster_config::{ApiConfig, AppConfig};
use roster_core::{ListQuery, RosterError, RosterResult};
use roster_repository::HttpUserRepository;
use roster_service::{Dashboard, DashboardState, Status};
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the HTTP repository for the configured users endpoint.
pub fn build_repository(config: &ApiConfig) -> RosterResult<HttpUserRepository> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| RosterError::internal(format!("Failed to create HTTP client: {}", e)))?;

    Ok(HttpUserRepository::with_client(client, &config.base_url))
}

/// Builds a dashboard with the configured default page size.
pub fn build_dashboard(config: &AppConfig) -> RosterResult<Dashboard<HttpUserRepository>> {
    let repository = build_repository(&config.api)?;
    let query = ListQuery::with_page_size(config.dashboard.page_size());
    Ok(Dashboard::with_query(Arc::new(repository), query))
}

/// Logs startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("App:         {} ({})", config.app.name, config.app.environment);
    info!("Users API:   {}", config.api.base_url);
    info!("Page size:   {}", config.dashboard.default_page_size);
    info!("{}", separator);
}

/// Logs the dashboard status and the rows of the visible page.
pub fn log_dashboard(state: &DashboardState) {
    if let Status::Error(message) = state.status() {
        warn!("{}", message);
    }

    let page = state.view();
    info!(
        page = page.current_page(),
        total_pages = page.total_pages(),
        total_users = page.total_elements(),
        "Showing {} users",
        page.len()
    );
    for user in &page.content {
        info!(
            id = %user.id,
            email = %user.email,
            department = %user.department,
            "{}",
            user.full_name()
        );
    }
}

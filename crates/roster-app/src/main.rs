//! # Roster
//!
//! Loads the user list from the configured API once and logs the first
//! page of the dashboard.

use roster_app::startup::{build_dashboard, log_dashboard, print_startup_info};
use roster_config::ConfigLoader;
use roster_core::{init_logging, RosterResult};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    let config = ConfigLoader::from_default_location()?.get().await;
    init_logging(&config.logging)?;

    info!("Starting Roster dashboard...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    print_startup_info(&config);

    let mut dashboard = build_dashboard(&config)?;
    dashboard.load().await;

    log_dashboard(dashboard.state());
    Ok(())
}

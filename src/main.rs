//! EventHub
//!
//! Main application entry point: loads the admin views against the
//! configured backend and exports the participant list.

use anyhow::Context;
use tracing::{info, warn};

use eventhub::{
    config::Settings,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventhub::info());

    let services = ServiceFactory::new(settings.clone())?;

    let health = services.health_check().await;
    for issue in health.get_issues() {
        warn!(issue = %issue, "Startup check");
    }

    let mut events = services.events_handler();
    if events.load().await {
        let page = events.page();
        info!(
            page = page.current_page,
            total_pages = page.total_pages,
            "{}",
            page.summary()
        );
    }

    let mut participants = services.participants_handler();
    if participants.load().await {
        let stats = participants.stats();
        info!(
            total = stats.total,
            this_month = stats.this_month,
            filtered = stats.filtered,
            "Participant stats"
        );

        let path = &settings.export.participants_file;
        if participants.export_to_path(path) {
            info!(path = %path, "Participants written");
        }
    }

    let stats = services.notifications.stats();
    info!(
        successes = stats.total_success,
        errors = stats.total_error,
        pending = services.notifications.drain().len(),
        "Notifications raised"
    );

    info!("EventHub run complete");

    Ok(())
}

// Hotelier back office - local session runner

use tracing::{error, info};

use hotelier_app::{init_tracing, AdminSession};
use hotelier_common::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    info!(property = %config.property_name, "Starting Hotelier admin session");

    let session = AdminSession::from_config(&config).map_err(|e| {
        error!("Failed to build admin session: {}", e);
        anyhow::anyhow!("Session setup failed: {}", e)
    })?;

    for item in session.content.pending_translations() {
        info!(content_id = %item.id, title = %item.title, "Pending translation");
    }
    for item in session.content.published() {
        info!(content_id = %item.id, title = %item.title, "Published");
    }
    for room in session.rooms.rooms() {
        info!(
            room_number = %room.number,
            room_type = %room.room_type,
            status = %room.status,
            nightly_rate = %room.nightly_rate,
            "Room"
        );
    }

    let summary = serde_json::to_string(&session.summary())?;
    info!(summary = %summary, "Session summary");

    info!("Session closed, all state discarded");
    Ok(())
}

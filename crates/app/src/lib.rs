//! Hotelier back-office composition root
//!
//! An [`AdminSession`] is what one open dashboard holds: the content
//! workflow store behind the CMS screen and the room catalog behind the
//! rooms table. Both live only as long as the session.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use hotelier_common::{Config, Error, LogFormat, Result};
use hotelier_content::{ContentEvent, ContentStatus, ContentType, ContentWorkflowStore};
use hotelier_rooms::{NewRoom, RoomCatalog, RoomStatus, RoomType};

/// State of one admin screen session
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    pub property_name: String,
    pub content: ContentWorkflowStore,
    pub rooms: RoomCatalog,
}

/// Counts per status, as shown on the CMS tabs and the rooms table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub property: String,
    pub content_total: usize,
    pub drafts: usize,
    pub pending_translations: usize,
    pub published: usize,
    pub rooms_total: usize,
    pub rooms_available: usize,
    pub rooms_occupied: usize,
    pub rooms_in_maintenance: usize,
}

impl AdminSession {
    pub fn new(config: &Config) -> Self {
        Self {
            property_name: config.property_name.clone(),
            content: ContentWorkflowStore::new(),
            rooms: RoomCatalog::new(),
        }
    }

    /// Build a session, seeding sample data when the config asks for it
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new(config);
        if config.seed_demo_content {
            session.seed_demo()?;
        }
        Ok(session)
    }

    /// Fill the session with a small, realistic data set.
    ///
    /// Fails with `Conflict` before touching anything if a demo room number
    /// is already taken.
    pub fn seed_demo(&mut self) -> Result<()> {
        let rooms = [
            NewRoom::new("101", RoomType::Standard, Decimal::new(12000, 2)),
            NewRoom::new("102", RoomType::Deluxe, Decimal::new(18500, 2)),
            NewRoom::new("PH1", RoomType::Suite, Decimal::new(65000, 2)),
        ];
        if let Some(taken) = rooms
            .iter()
            .find(|room| self.rooms.find_by_number(&room.number).is_some())
        {
            return Err(Error::Conflict(format!(
                "Demo room {} already exists",
                taken.number
            )));
        }

        for room in rooms {
            self.rooms.add_room(room)?;
        }

        self.content.submit(
            Some(ContentType::Room),
            "Ocean View",
            "Spacious room with ocean view",
            true,
        );
        self.content.submit(
            Some(ContentType::Amenity),
            "Spa",
            "Full-service spa",
            false,
        );
        let shuttle = self
            .content
            .submit(
                Some(ContentType::Service),
                "Airport Shuttle",
                "Complimentary shuttle every hour",
                false,
            )
            .map(|item| item.id);
        if let Some(id) = shuttle {
            self.content.advance_status(id, ContentEvent::Publish)?;
        }

        info!(
            content = self.content.len(),
            rooms = self.rooms.len(),
            "Demo data seeded"
        );
        Ok(())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            property: self.property_name.clone(),
            content_total: self.content.len(),
            drafts: self.content.count_by_status(ContentStatus::Draft),
            pending_translations: self.content.count_by_status(ContentStatus::Pending),
            published: self.content.count_by_status(ContentStatus::Published),
            rooms_total: self.rooms.len(),
            rooms_available: self.rooms.count_by_status(RoomStatus::Available),
            rooms_occupied: self.rooms.count_by_status(RoomStatus::Occupied),
            rooms_in_maintenance: self.rooms.count_by_status(RoomStatus::Maintenance),
        }
    }
}

/// Install the global tracing subscriber described by `config`
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.rust_log)
        .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", config.rust_log, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.log_format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

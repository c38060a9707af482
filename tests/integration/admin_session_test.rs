//! Admin Session Integration Tests
//!
//! Wires configuration, the content store and the room catalog together
//! the way the local runner does.

mod common;

use hotelier_app::AdminSession;
use hotelier_common::{Config, Error};
use hotelier_content::{ContentStatus, ContentType};
use hotelier_rooms::{NewRoom, RoomEvent, RoomStatus, RoomType};

use crate::common::{create_content, empty_session, rate, test_config};

#[test_log::test]
fn test_seeded_session() {
    let config = Config {
        seed_demo_content: true,
        ..test_config()
    };

    let session = AdminSession::from_config(&config).unwrap();
    let summary = session.summary();

    assert_eq!(summary.property, "Integration Test Hotel");
    assert_eq!(
        summary.drafts + summary.pending_translations + summary.published,
        summary.content_total
    );
    assert_eq!(summary.rooms_total, 3);
    assert!(session.rooms.find_by_number("PH1").is_some());
}

#[test_log::test]
fn test_rooms_table_workflow() {
    let mut session = empty_session();

    let standard = session
        .rooms
        .add_room(NewRoom::new("101", RoomType::Standard, rate(120)))
        .unwrap()
        .id;
    let suite = session
        .rooms
        .add_room(NewRoom::new("PH1", RoomType::Suite, rate(650)))
        .unwrap()
        .id;

    session.rooms.apply(standard, RoomEvent::CheckIn).unwrap();
    session
        .rooms
        .apply(suite, RoomEvent::StartMaintenance)
        .unwrap();

    let summary = session.summary();
    assert_eq!(summary.rooms_occupied, 1);
    assert_eq!(summary.rooms_in_maintenance, 1);
    assert_eq!(summary.rooms_available, 0);

    // Occupied rooms must be checked out first
    let err = session
        .rooms
        .apply(standard, RoomEvent::StartMaintenance)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let duplicate = session
        .rooms
        .add_room(NewRoom::new("ph1", RoomType::Suite, rate(700)))
        .unwrap_err();
    assert!(matches!(duplicate, Error::Conflict(_)));

    session.rooms.remove_room(suite);
    assert_eq!(
        session
            .rooms
            .filter_by_status(RoomStatus::Maintenance)
            .count(),
        0
    );
}

#[test]
fn test_sessions_are_independent() {
    let mut first = empty_session();
    let second = empty_session();

    create_content(
        &mut first.content,
        ContentType::Amenity,
        "Spa",
        "Full-service spa",
        false,
    );

    assert_eq!(first.content.len(), 1);
    assert!(second.content.is_empty());
    assert_eq!(
        first.content.filter_by_status(ContentStatus::Pending).count(),
        1
    );
}

#[test]
fn test_summary_json_shape() {
    let mut session = empty_session();
    create_content(
        &mut session.content,
        ContentType::Room,
        "Ocean View",
        "Spacious room with ocean view",
        true,
    );

    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["content_total"], 1);
    assert_eq!(json["drafts"], 1);
    assert_eq!(json["rooms_total"], 0);
}

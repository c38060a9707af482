//! Rooms domain: room inventory, occupancy status, nightly rates

pub mod catalog;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use catalog::RoomCatalog;
pub use domain::entities::{NewRoom, Room, RoomStatus, RoomType};
pub use domain::state::{RoomEvent, RoomState, RoomStateMachine, StateError};
pub use domain::validation::validate_room_number;

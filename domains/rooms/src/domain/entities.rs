//! Domain entities for Rooms domain
//!
//! Backs the rooms table: room number, type, status and nightly price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hotelier_common::{Error, Result};

use crate::domain::state::{RoomEvent, RoomState, RoomStateMachine};
use crate::domain::validation::validate_room_number;

/// Room category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Standard,
    Deluxe,
    Suite,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::Standard => write!(f, "standard"),
            RoomType::Deluxe => write!(f, "deluxe"),
            RoomType::Suite => write!(f, "suite"),
        }
    }
}

/// Room status column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Maintenance,
    ];

    /// Convert to state machine state
    pub fn to_state(&self) -> RoomState {
        match self {
            RoomStatus::Available => RoomState::Available,
            RoomStatus::Occupied => RoomState::Occupied,
            RoomStatus::Maintenance => RoomState::Maintenance,
        }
    }

    /// Create from state machine state
    pub fn from_state(state: RoomState) -> Self {
        match state {
            RoomState::Available => RoomStatus::Available,
            RoomState::Occupied => RoomStatus::Occupied,
            RoomState::Maintenance => RoomStatus::Maintenance,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_state(), f)
    }
}

fn validate_room_number_format(
    number: &str,
) -> std::result::Result<(), validator::ValidationError> {
    if validate_room_number(number) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_room_number"))
    }
}

/// Input of the "Add Room" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewRoom {
    /// Room number (1-10 chars, letters, digits, hyphens)
    #[validate(custom(
        function = "validate_room_number_format",
        message = "Invalid room number format"
    ))]
    pub number: String,

    #[serde(rename = "type", default)]
    pub room_type: RoomType,

    /// Price per night, must be positive
    pub nightly_rate: Decimal,
}

impl NewRoom {
    pub fn new(number: &str, room_type: RoomType, nightly_rate: Decimal) -> Self {
        Self {
            number: number.to_string(),
            room_type,
            nightly_rate,
        }
    }

    /// Validate field rules
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;
        if self.nightly_rate <= Decimal::ZERO {
            return Err(Error::Validation(
                "Nightly rate must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub nightly_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Create a new, available room with validation
    pub fn new(input: NewRoom) -> Result<Self> {
        input.check()?;

        let now = Utc::now();
        Ok(Room {
            id: Uuid::new_v4(),
            number: input.number,
            room_type: input.room_type,
            status: RoomStatus::default(),
            nightly_rate: input.nightly_rate,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn check_in(&mut self) -> Result<()> {
        self.apply(RoomEvent::CheckIn)
    }

    pub fn check_out(&mut self) -> Result<()> {
        self.apply(RoomEvent::CheckOut)
    }

    /// Take the room out of service
    pub fn start_maintenance(&mut self) -> Result<()> {
        self.apply(RoomEvent::StartMaintenance)
    }

    /// Return the room to service
    pub fn finish_maintenance(&mut self) -> Result<()> {
        self.apply(RoomEvent::FinishMaintenance)
    }

    /// Apply a state transition using the state machine
    pub fn apply(&mut self, event: RoomEvent) -> Result<()> {
        let new_state = RoomStateMachine::transition(self.status.to_state(), event)
            .map_err(|e| e.into_validation("room"))?;
        self.status = RoomStatus::from_state(new_state);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether a guest can be checked in right now
    pub fn is_bookable(&self) -> bool {
        RoomStateMachine::can_transition(self.status.to_state(), &RoomEvent::CheckIn)
    }
}

//! State machine for room occupancy
//!
//! Room states: Available ↔ Occupied, Available ↔ Maintenance. A room must
//! be vacated before it can go into maintenance.

pub use hotelier_common::StateError;
use serde::{Deserialize, Serialize};

/// Room occupancy states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomState {
    Available,
    Occupied,
    Maintenance,
}

impl RoomState {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [RoomState] {
        match self {
            Self::Available => &[Self::Occupied, Self::Maintenance],
            Self::Occupied => &[Self::Available],
            Self::Maintenance => &[Self::Available],
        }
    }
}

impl std::fmt::Display for RoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Events that trigger room state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomEvent {
    CheckIn,
    CheckOut,
    StartMaintenance,
    FinishMaintenance,
}

impl std::fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckIn => write!(f, "check_in"),
            Self::CheckOut => write!(f, "check_out"),
            Self::StartMaintenance => write!(f, "start_maintenance"),
            Self::FinishMaintenance => write!(f, "finish_maintenance"),
        }
    }
}

/// Room state machine
pub struct RoomStateMachine;

impl RoomStateMachine {
    /// Attempt a state transition
    pub fn transition(current: RoomState, event: RoomEvent) -> Result<RoomState, StateError> {
        match (current, event) {
            (RoomState::Available, RoomEvent::CheckIn) => Ok(RoomState::Occupied),
            (RoomState::Available, RoomEvent::StartMaintenance) => Ok(RoomState::Maintenance),
            (RoomState::Occupied, RoomEvent::CheckOut) => Ok(RoomState::Available),
            (RoomState::Maintenance, RoomEvent::FinishMaintenance) => Ok(RoomState::Available),

            (RoomState::Occupied, RoomEvent::StartMaintenance) => Err(StateError::GuardFailed(
                "Room must be checked out before maintenance".to_string(),
            )),

            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                to: "unknown".to_string(),
                event: event.to_string(),
            }),
        }
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: RoomState, event: &RoomEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}

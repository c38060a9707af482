//! In-memory room catalog backing the rooms table
//!
//! Rooms are listed in the order they were added. Room numbers are unique
//! within a catalog.

use tracing::{debug, info};
use uuid::Uuid;

use hotelier_common::{Error, Result};

use crate::domain::entities::{NewRoom, Room, RoomStatus};
use crate::domain::state::RoomEvent;

#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Room numbers compare case-insensitively ("b-12" and "B-12" are the same door)
    pub fn find_by_number(&self, number: &str) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.number.eq_ignore_ascii_case(number))
    }

    /// Add a room. Fails on invalid input or a room number already in use.
    pub fn add_room(&mut self, input: NewRoom) -> Result<&Room> {
        if self.find_by_number(&input.number).is_some() {
            return Err(Error::Conflict(format!(
                "Room {} already exists",
                input.number
            )));
        }

        let room = Room::new(input)?;
        info!(
            room_id = %room.id,
            room_number = %room.number,
            room_type = %room.room_type,
            "Room added"
        );

        self.rooms.push(room);
        Ok(&self.rooms[self.rooms.len() - 1])
    }

    /// Remove the room with `id`. Unknown ids are ignored.
    pub fn remove_room(&mut self, id: Uuid) -> Option<Room> {
        match self.rooms.iter().position(|room| room.id == id) {
            Some(index) => {
                let removed = self.rooms.remove(index);
                info!(room_id = %id, room_number = %removed.number, "Room removed");
                Some(removed)
            }
            None => {
                debug!(room_id = %id, "Removal of unknown room ignored");
                None
            }
        }
    }

    /// Apply an occupancy event to a room
    pub fn apply(&mut self, id: Uuid, event: RoomEvent) -> Result<&Room> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or_else(|| Error::NotFound(format!("Room {}", id)))?;

        let from = room.status;
        room.apply(event)?;
        info!(
            room_id = %id,
            room_number = %room.number,
            from = %from,
            to = %room.status,
            "Room status changed"
        );
        Ok(&*room)
    }

    /// Rooms with the given status, in catalog order
    pub fn filter_by_status(
        &self,
        status: RoomStatus,
    ) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.rooms.iter().filter(move |room| room.status == status)
    }

    pub fn count_by_status(&self, status: RoomStatus) -> usize {
        self.filter_by_status(status).count()
    }
}

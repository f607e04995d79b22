//! The room catalog: every room the hotel knows about.
//!
//! Catalogs are small, so lookups are linear scans over seed order.

use crate::error::{DeskError, DeskResult};
use crate::models::{Room, RoomCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::with_default_rooms()
    }
}

impl RoomCatalog {
    /// The catalog a fresh install starts with.
    pub fn with_default_rooms() -> Self {
        Self {
            rooms: vec![
                Room::new(101, RoomCategory::Standard, 100.0),
                Room::new(102, RoomCategory::Standard, 100.0),
                Room::new(201, RoomCategory::Deluxe, 150.0),
                Room::new(202, RoomCategory::Deluxe, 150.0),
                Room::new(301, RoomCategory::Suite, 300.0),
            ],
        }
    }

    /// Build a catalog from loaded rooms. Room numbers must be positive and
    /// unique, prices non-negative.
    pub fn from_rooms(rooms: Vec<Room>) -> DeskResult<Self> {
        for (idx, room) in rooms.iter().enumerate() {
            if room.number == 0 {
                return Err(DeskError::validation("room number 0 is not allowed"));
            }
            if !(room.nightly_price >= 0.0) {
                return Err(DeskError::validation(format!(
                    "room {} has invalid price {}",
                    room.number, room.nightly_price
                )));
            }
            if rooms[..idx].iter().any(|r| r.number == room.number) {
                return Err(DeskError::validation(format!(
                    "duplicate room number {}",
                    room.number
                )));
            }
        }
        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_by_number(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    pub(crate) fn find_by_number_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    /// Unbooked rooms whose category matches `category`, ignoring case.
    pub fn list_available<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms
            .iter()
            .filter(move |room| room.is_available() && room.category.matches(category))
    }

    pub(crate) fn set_booked(&mut self, number: u32, booked: bool) {
        if let Some(room) = self.find_by_number_mut(number) {
            room.booked = booked;
        }
    }
}

//! The reservation ledger and the operations that keep it in step with the
//! room catalog.

use chrono::Utc;

use crate::catalog::RoomCatalog;
use crate::error::{DeskError, DeskResult};
use crate::models::{BookingInput, Reservation};
use crate::log_info;

const ENABLE_LOGS: bool = true;

pub type ReservationId = u32;

/// Active reservations in booking order, plus the counter that numbers them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationLedger {
    reservations: Vec<Reservation>,
    next_id: ReservationId,
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a ledger from persisted reservations.
    ///
    /// Every reservation must name a distinct positive id and a room that
    /// exists in `catalog`, and a room is booked exactly when a reservation
    /// holds it. The counter resumes one past the highest restored id.
    pub fn restore(reservations: Vec<Reservation>, catalog: &RoomCatalog) -> DeskResult<Self> {
        for (idx, rsvp) in reservations.iter().enumerate() {
            if rsvp.id == 0 {
                return Err(DeskError::validation("reservation id 0 is not allowed"));
            }
            if reservations[..idx].iter().any(|r| r.id == rsvp.id) {
                return Err(DeskError::validation(format!(
                    "duplicate reservation id {}",
                    rsvp.id
                )));
            }
            if reservations[..idx]
                .iter()
                .any(|r| r.room_number == rsvp.room_number)
            {
                return Err(DeskError::validation(format!(
                    "room {} is held by more than one reservation",
                    rsvp.room_number
                )));
            }
            if catalog.find_by_number(rsvp.room_number).is_none() {
                return Err(DeskError::validation(format!(
                    "reservation {} references unknown room {}",
                    rsvp.id, rsvp.room_number
                )));
            }
        }

        for room in catalog.rooms() {
            let held = reservations.iter().any(|r| r.room_number == room.number);
            if held != room.booked {
                return Err(DeskError::validation(format!(
                    "room {} booked flag disagrees with the ledger",
                    room.number
                )));
            }
        }

        let next_id = match reservations.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                DeskError::validation(format!("reservation id {max} leaves no room for new ids"))
            })?,
            None => 1,
        };

        Ok(Self {
            reservations,
            next_id,
        })
    }

    /// The id the next booking will receive.
    pub fn next_id(&self) -> ReservationId {
        self.next_id
    }

    pub fn list_all(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Book a room and return the new reservation id.
    ///
    /// Fields are trimmed first. Nothing changes unless every check passes.
    pub fn book(
        &mut self,
        catalog: &mut RoomCatalog,
        input: &BookingInput,
    ) -> DeskResult<ReservationId> {
        let customer_name = input.customer_name.trim();
        let room_number = input.room_number.trim();
        let check_in = input.check_in.trim();
        let check_out = input.check_out.trim();

        if [customer_name, room_number, check_in, check_out]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(DeskError::validation("Please fill all fields."));
        }

        // Out-of-range integers match no room.
        let room_number: i64 = room_number
            .parse()
            .map_err(|_| DeskError::validation("Room number must be a number."))?;

        let room = u32::try_from(room_number)
            .ok()
            .and_then(|number| catalog.find_by_number_mut(number))
            .ok_or_else(|| DeskError::not_found("Room not found."))?;
        if room.booked {
            return Err(DeskError::conflict("Room is already booked."));
        }

        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| DeskError::conflict("No reservation numbers left."))?;
        let room_number = room.number;
        self.next_id = next_id;
        room.booked = true;
        self.reservations.push(Reservation {
            id,
            customer_name: customer_name.to_string(),
            room_number,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            payment_done: false,
            booked_at: Utc::now(),
        });

        log_info!("Reservation #{id} booked room {room_number} for {customer_name}");
        Ok(id)
    }

    /// Mark a reservation as paid. Paying twice is not an error.
    pub fn record_payment(&mut self, id: ReservationId) -> DeskResult<()> {
        let rsvp = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DeskError::not_found("Reservation not found."))?;

        if !rsvp.payment_done {
            rsvp.payment_done = true;
            log_info!("Reservation #{id} marked as paid");
        }
        Ok(())
    }

    /// Remove a reservation and free its room.
    pub fn cancel(&mut self, catalog: &mut RoomCatalog, id: ReservationId) -> DeskResult<Reservation> {
        let idx = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DeskError::not_found("Reservation not found."))?;

        let rsvp = self.reservations.remove(idx);
        catalog.set_booked(rsvp.room_number, false);

        log_info!("Reservation #{id} cancelled, room {} freed", rsvp.room_number);
        Ok(rsvp)
    }
}

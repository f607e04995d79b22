//! Front desk commands.
//!
//! Each command takes the desk and the raw form fields, performs at most one
//! state change, and returns the status text to show. Errors never escape a
//! command; they become their status text.

use crate::desk::FrontDesk;
use crate::error::{DeskError, DeskResult};
use crate::ledger::ReservationId;
use crate::models::{BookingInput, RoomCategory};
use crate::log_debug;

const ENABLE_LOGS: bool = true;

fn status<T>(result: DeskResult<T>, on_success: impl FnOnce(T) -> String) -> String {
    match result {
        Ok(value) => on_success(value),
        Err(err) => {
            log_debug!("Command rejected: {err:?}");
            err.to_string()
        }
    }
}

fn parse_reservation_id(raw: &str) -> DeskResult<ReservationId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DeskError::validation("Enter reservation number."));
    }
    let id: i64 = raw
        .parse()
        .map_err(|_| DeskError::validation("Invalid reservation number."))?;
    // Ids are positive u32 values; anything else matches no reservation.
    ReservationId::try_from(id).map_err(|_| DeskError::not_found("Reservation not found."))
}

pub fn search_rooms(desk: &FrontDesk, category: &str) -> String {
    let label = RoomCategory::parse(category)
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| category.trim().to_string());

    let mut lines = vec![format!("Available {label} rooms:")];
    lines.extend(
        desk.catalog()
            .list_available(category)
            .map(|room| room.to_string()),
    );
    if lines.len() == 1 {
        lines.push("No rooms available in this category.".into());
    }
    lines.join("\n")
}

pub fn book_room(desk: &mut FrontDesk, input: &BookingInput) -> String {
    status(desk.book(input), |id| {
        format!("Reservation successful! Your reservation #: {id}")
    })
}

pub fn record_payment(desk: &mut FrontDesk, reservation_id: &str) -> String {
    let result = parse_reservation_id(reservation_id)
        .and_then(|id| desk.record_payment(id).map(|()| id));
    status(result, |id| {
        format!("Payment simulated! Reservation #{id} is now marked as paid.")
    })
}

pub fn view_reservations(desk: &FrontDesk) -> String {
    let mut lines = vec!["All Reservations:".to_string()];
    let reservations = desk.ledger().list_all();
    if reservations.is_empty() {
        lines.push("No reservations.".into());
    }
    for rsvp in reservations {
        lines.push(rsvp.describe(desk.catalog().find_by_number(rsvp.room_number)));
    }
    lines.join("\n")
}

pub fn cancel_reservation(desk: &mut FrontDesk, reservation_id: &str) -> String {
    let result = parse_reservation_id(reservation_id).and_then(|id| desk.cancel(id));
    status(result, |rsvp| format!("Reservation #{} cancelled.", rsvp.id))
}

pub fn save_data(desk: &FrontDesk) -> String {
    match desk.save() {
        Ok(()) => "Data saved!".into(),
        Err(_) => "Error saving data.".into(),
    }
}

pub fn load_data(desk: &mut FrontDesk) -> String {
    match desk.load() {
        Ok(_) => "Data loaded!".into(),
        Err(_) => "Error loading data.".into(),
    }
}

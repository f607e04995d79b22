use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Room;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u32,
    pub customer_name: String,
    /// Number of the reserved room; resolved against the catalog on use.
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
    pub payment_done: bool,
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    /// One line of the reservations listing. `room` is the catalog entry for
    /// `room_number`, if it still exists.
    pub fn describe(&self, room: Option<&Room>) -> String {
        let category = room
            .map(|r| r.category.as_str())
            .unwrap_or("unknown");
        format!(
            "Res#{} | {} | Room {} ({}) | {} to {} | {}",
            self.id,
            self.customer_name,
            self.room_number,
            category,
            self.check_in,
            self.check_out,
            if self.payment_done { "Paid" } else { "Not Paid" }
        )
    }
}

/// Raw booking form fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct BookingInput {
    pub customer_name: String,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomCategory;

    fn alice() -> Reservation {
        Reservation {
            id: 1,
            customer_name: "Alice".into(),
            room_number: 101,
            check_in: "2025-07-01".into(),
            check_out: "2025-07-02".into(),
            payment_done: false,
            booked_at: Utc::now(),
        }
    }

    #[test]
    fn describe_with_room() {
        let room = Room::new(101, RoomCategory::Standard, 100.0);
        let mut rsvp = alice();
        assert_eq!(
            rsvp.describe(Some(&room)),
            "Res#1 | Alice | Room 101 (Standard) | 2025-07-01 to 2025-07-02 | Not Paid"
        );
        rsvp.payment_done = true;
        assert!(rsvp.describe(Some(&room)).ends_with("| Paid"));
    }

    #[test]
    fn describe_missing_room() {
        assert!(alice().describe(None).contains("Room 101 (unknown)"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl RoomCategory {
    /// Every category, in the order the form offers them.
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Standard,
        RoomCategory::Deluxe,
        RoomCategory::Suite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Suite => "Suite",
        }
    }

    /// Case-insensitive match against a user-supplied category name.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }

    pub fn parse(name: &str) -> Option<RoomCategory> {
        Self::ALL.into_iter().find(|category| category.matches(name))
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub number: u32,
    pub category: RoomCategory,
    pub nightly_price: f64,
    pub booked: bool,
}

impl Room {
    pub fn new(number: u32, category: RoomCategory, nightly_price: f64) -> Self {
        Self {
            number,
            category,
            nightly_price,
            booked: false,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.booked
    }
}

/// Whole prices keep one decimal place (`$100.0`), others print as-is.
pub(crate) fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        format!("{price}")
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}), ${} {}",
            self.number,
            self.category,
            format_price(self.nightly_price),
            if self.booked { "[Booked]" } else { "[Available]" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_ignoring_case() {
        assert!(RoomCategory::Deluxe.matches("deluxe"));
        assert!(RoomCategory::Deluxe.matches(" DELUXE "));
        assert!(!RoomCategory::Deluxe.matches("Suite"));
        assert_eq!(RoomCategory::parse("suite"), Some(RoomCategory::Suite));
        assert_eq!(RoomCategory::parse("penthouse"), None);
    }

    #[test]
    fn room_display() {
        let mut room = Room::new(101, RoomCategory::Standard, 100.0);
        assert_eq!(room.to_string(), "Room 101 (Standard), $100.0 [Available]");
        room.booked = true;
        assert_eq!(room.to_string(), "Room 101 (Standard), $100.0 [Booked]");
    }

    #[test]
    fn fractional_prices_are_not_padded() {
        assert_eq!(format_price(149.5), "149.5");
        assert_eq!(format_price(99.99), "99.99");
        assert_eq!(format_price(0.0), "0.0");
    }
}

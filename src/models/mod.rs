pub mod reservation;
pub mod room;

pub use reservation::{BookingInput, Reservation};
pub use room::{Room, RoomCategory};

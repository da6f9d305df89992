// Bookings domain - seat booking with at-most-one admission per (event, email)

pub mod admission;
pub mod errors;
pub mod models;

pub use admission::{create_booking, BookingOutcome};
pub use errors::BookingError;
pub use models::Booking;

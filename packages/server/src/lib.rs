// DevEvent - Event Listing & Booking API
//
// Backend for browsing developer events, publishing new ones, and booking
// seats. Business logic lives in domains/, infrastructure collaborators
// (image hosting, email) behind traits in kernel/, HTTP surface in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

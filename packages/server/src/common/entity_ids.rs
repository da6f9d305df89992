//! Typed ID definitions for all domain entities.
//!
//! Type aliases over [`Id`](super::id::Id) give compile-time safety for ID
//! usage throughout the application: an `EventId` cannot be passed where a
//! `BookingId` is expected.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Event entities.
pub struct Event;

/// Marker type for Booking entities.
pub struct Booking;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for Booking entities.
pub type BookingId = Id<Booking>;

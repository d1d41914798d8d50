//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Lookups return `Ok(None)` for zero rows, `Err` only on failure
//! - Inserts use `RETURNING` so the caller gets generated ids
//! - Every caller value is a bound parameter

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{Property, PropertyListing, PropertyRepo};
pub use reservations::{GuestReservation, ReservationRepo};
pub use users::{User, UserRepo};

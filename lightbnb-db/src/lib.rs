//! lightbnb-db: PostgreSQL data access for LightBnB
//!
//! Users, reservations and properties, plus the filtered property
//! search used by the listings page. Every operation is a single
//! parameterized round trip through a shared `PgPool`.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod search;

pub use config::DatabaseConfig;
pub use db::{
    create_pool, GuestReservation, Property, PropertyListing, PropertyRepo, ReservationRepo,
    User, UserRepo,
};
pub use error::{DbError, Result};
pub use models::{Limit, NewProperty, NewUser, ValidationError};
pub use search::{BuiltQuery, PropertyFilter, PropertySearch, SqlParam};
pub use sqlx::PgPool;

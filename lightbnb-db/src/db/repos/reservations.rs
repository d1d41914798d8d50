//! Reservation repository
//!
//! Read-only here: a guest's reservations, each joined with its property.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use super::Property;
use crate::error::Result;
use crate::models::Limit;

/// A guest's reservation joined with the reserved property
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List reservations for a guest, earliest stay first.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> Result<Vec<GuestReservation>> {
        let reservations = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                reservations.guest_id,
                properties.*
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            WHERE reservations.guest_id = $1
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        debug!(guest_id, count = reservations.len(), "listed reservations");
        Ok(reservations)
    }
}

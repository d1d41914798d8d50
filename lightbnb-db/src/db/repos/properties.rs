//! Property repository
//!
//! - search: filtered listings with average rating, cheapest first
//! - get: single listing with average rating
//! - create: INSERT ... RETURNING, id from the table sequence

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};

use crate::error::{DbError, Result};
use crate::models::{Limit, NewProperty};
use crate::search::{PropertyFilter, PropertySearch, SqlParam};

/// Property record from database. `cost_per_night` is in cents.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with its average review rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    /// `None` when the property has no reviews
    pub average_rating: Option<f64>,
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search listings.
    ///
    /// Only reviewed properties are returned (the rating join is inner).
    pub async fn search(
        &self,
        filter: &PropertyFilter,
        limit: Limit,
    ) -> Result<Vec<PropertyListing>> {
        let built = PropertySearch::new(filter, limit).build();

        let mut query = sqlx::query_as::<_, PropertyListing>(&built.sql);
        for param in &built.params {
            query = match param {
                SqlParam::Text(value) => query.bind(value.clone()),
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::Float(value) => query.bind(*value),
            };
        }

        let listings = query.fetch_all(self.pool).await?;
        debug!(count = listings.len(), "property search");
        Ok(listings)
    }

    /// Get one listing by id, reviewed or not.
    pub async fn get(&self, id: i32) -> Result<PropertyListing> {
        sqlx::query_as::<_, PropertyListing>(
            r#"
            SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
            FROM properties
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE properties.id = $1
            GROUP BY properties.id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("property", id))
    }

    /// Insert a property.
    ///
    /// The id comes from the `properties` sequence, so concurrent inserts
    /// and deletions never produce duplicates.
    pub async fn create(&self, property: NewProperty) -> Result<Property> {
        property.validate()?;

        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(property.active)
        .fetch_one(self.pool)
        .await?;

        info!(id = created.id, owner_id = created.owner_id, "property created");
        Ok(created)
    }
}

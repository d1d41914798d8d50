//! Schema migrations for the LightBnB tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so running on every
//! startup is safe.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::Result;

const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL
        )
        "#,
    ),
    (
        "properties",
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            id SERIAL PRIMARY KEY NOT NULL,
            owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            thumbnail_photo_url VARCHAR(255) NOT NULL DEFAULT '',
            cover_photo_url VARCHAR(255) NOT NULL DEFAULT '',
            cost_per_night INTEGER NOT NULL DEFAULT 0,
            parking_spaces INTEGER NOT NULL DEFAULT 0,
            number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
            number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
            country VARCHAR(255) NOT NULL,
            street VARCHAR(255) NOT NULL,
            city VARCHAR(255) NOT NULL,
            province VARCHAR(255) NOT NULL,
            post_code VARCHAR(255) NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    ),
    (
        "reservations",
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id SERIAL PRIMARY KEY NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "property_reviews",
        r#"
        CREATE TABLE IF NOT EXISTS property_reviews (
            id SERIAL PRIMARY KEY NOT NULL,
            guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
            rating SMALLINT NOT NULL DEFAULT 0,
            message TEXT
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
    "CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city)",
    "CREATE INDEX IF NOT EXISTS idx_properties_owner ON properties(owner_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)",
    "CREATE INDEX IF NOT EXISTS idx_property_reviews_property ON property_reviews(property_id)",
];

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<()> {
    info!("running LightBnB migrations");

    for (table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        debug!(table, "table ready");
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_created_in_dependency_order() {
        let order: Vec<&str> = SCHEMA.iter().map(|(table, _)| *table).collect();
        assert_eq!(
            order,
            vec!["users", "properties", "reservations", "property_reviews"]
        );
    }

    #[test]
    fn every_statement_is_idempotent() {
        for (_, ddl) in SCHEMA {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
        for ddl in INDEXES {
            assert!(ddl.contains("IF NOT EXISTS"));
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_run_twice() {
        let pool = crate::db::pool::tests::test_pool().await;
        run(&pool).await.expect("second run should be a no-op");
    }
}

//! User repository
//!
//! Login looks users up by email, sessions by id. Signup inserts and
//! returns the generated id.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored credential; never serialized
    #[serde(skip_serializing)]
    pub password: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by exact email match.
    ///
    /// Email is not unique at the schema level. An address shared by
    /// several rows is ambiguous, so it resolves to no user.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            LIMIT 2
            "#,
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        if users.len() > 1 {
            warn!(matches = users.len(), "email shared by several users");
            return Ok(None);
        }

        let user = users.pop();
        debug!(found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        debug!(id, found = user.is_some(), "user lookup by id");
        Ok(user)
    }

    /// Insert a user, returning it with its generated id.
    ///
    /// No duplicate check here; a unique constraint on email, if the
    /// schema has one, surfaces as `DbError::Query`.
    pub async fn create(&self, user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.password())
        .fetch_one(self.pool)
        .await?;

        debug!(id = user.id, "user created");
        Ok(user)
    }
}

//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - One shared PgPool, cloned freely; no connection behind a Mutex
//! - One round trip per operation
//! - Ids come from table sequences, never computed in the app
//! - Rely on DB constraints, surface violations as `DbError::Query`

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

//! Domain models with validation at construction
//!
//! All caller input is validated before a query is built.
//! Invalid input returns ValidationError, not panic.

pub mod limit;
pub mod money;
pub mod property;
pub mod user;
pub mod validation;

pub use limit::Limit;
pub use money::to_minor_units;
pub use property::NewProperty;
pub use user::NewUser;
pub use validation::ValidationError;

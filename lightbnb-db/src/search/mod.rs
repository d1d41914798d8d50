//! Property listing search: filter criteria and the SQL they compile to

pub mod builder;
pub mod filter;

pub use builder::{clause_prefix, BuiltQuery, Operator, Predicate, PropertySearch, SqlParam};
pub use filter::PropertyFilter;

//! Property search query builder
//!
//! Filters are turned into a list of predicate descriptors and folded into
//! one statement. Every caller value, the limit included, is pushed as a
//! positional parameter; the statement text only ever depends on which
//! filters are present, never on their values.

use tracing::debug;

use super::PropertyFilter;
use crate::models::{to_minor_units, Limit};

const SELECT_LISTINGS: &str = r#"
SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Comparison used by a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Like,
    Gte,
    Lt,
}

impl Operator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Like => "LIKE",
            Self::Gte => ">=",
            Self::Lt => "<",
        }
    }
}

/// One pre-aggregation filter condition
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: &'static str,
    pub op: Operator,
    pub value: SqlParam,
}

impl Predicate {
    fn new(column: &'static str, op: Operator, value: SqlParam) -> Self {
        Self { column, op, value }
    }
}

/// `WHERE` for the first predicate, `AND` for the rest.
pub fn clause_prefix(index: usize) -> &'static str {
    if index == 0 {
        "WHERE"
    } else {
        "AND"
    }
}

/// Statement text plus its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl BuiltQuery {
    /// Push a parameter and return its placeholder (`$1`, `$2`, ...).
    fn push(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }
}

/// Filtered, rated, cheapest-first property search
#[derive(Debug, Clone)]
pub struct PropertySearch<'a> {
    filter: &'a PropertyFilter,
    limit: Limit,
}

impl<'a> PropertySearch<'a> {
    pub fn new(filter: &'a PropertyFilter, limit: Limit) -> Self {
        Self { filter, limit }
    }

    /// WHERE predicates in fixed order: city, owner, minimum price, maximum price.
    ///
    /// Clause prefixes follow this order, so with a single filter present
    /// that filter always gets `WHERE`.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(city) = self.filter.city() {
            predicates.push(Predicate::new(
                "city",
                Operator::Like,
                SqlParam::Text(format!("%{city}%")),
            ));
        }

        if let Some(owner_id) = self.filter.owner_id() {
            predicates.push(Predicate::new(
                "properties.owner_id",
                Operator::Eq,
                SqlParam::Int(owner_id as i64),
            ));
        }

        if let Some(min) = self.filter.minimum_price_per_night() {
            predicates.push(Predicate::new(
                "properties.cost_per_night",
                Operator::Gte,
                SqlParam::Int(to_minor_units(min)),
            ));
        }

        if let Some(max) = self.filter.maximum_price_per_night() {
            predicates.push(Predicate::new(
                "properties.cost_per_night",
                Operator::Lt,
                SqlParam::Int(to_minor_units(max)),
            ));
        }

        predicates
    }

    pub fn build(&self) -> BuiltQuery {
        let mut query = BuiltQuery {
            sql: String::from(SELECT_LISTINGS),
            params: Vec::new(),
        };

        for (i, predicate) in self.predicates().into_iter().enumerate() {
            let placeholder = query.push(predicate.value);
            query.sql.push_str(&format!(
                "{} {} {} {}\n",
                clause_prefix(i),
                predicate.column,
                predicate.op.as_sql(),
                placeholder
            ));
        }

        query.sql.push_str("GROUP BY properties.id\n");

        // Post-aggregation; at most one, so never prefixed
        if let Some(rating) = self.filter.minimum_rating() {
            let placeholder = query.push(SqlParam::Float(rating));
            query.sql.push_str(&format!(
                "HAVING avg(property_reviews.rating) >= {}\n",
                placeholder
            ));
        }

        let placeholder = query.push(SqlParam::Int(self.limit.as_i64()));
        query.sql.push_str(&format!(
            "ORDER BY properties.cost_per_night ASC\nLIMIT {};",
            placeholder
        ));

        debug!(sql = %query.sql, params = ?query.params, "built property search");
        query
    }
}

use lightbnb_db::{Limit, PropertyFilter, PropertySearch, SqlParam};
use proptest::prelude::*;

// Strategy for filters with arbitrary, possibly hostile, values
fn arb_filter() -> impl Strategy<Value = PropertyFilter> {
    (
        prop::option::of(".*"),
        prop::option::of(any::<i32>()),
        prop::option::of(-1.0e6..1.0e6f64),
        prop::option::of(-1.0e6..1.0e6f64),
        prop::option::of(0.0..5.0f64),
    )
        .prop_map(|(city, owner_id, min, max, rating)| PropertyFilter {
            city,
            owner_id,
            minimum_price_per_night: min,
            maximum_price_per_night: max,
            minimum_rating: rating,
        })
}

/// Same filters present, different values.
fn with_placeholder_values(filter: &PropertyFilter) -> PropertyFilter {
    PropertyFilter {
        city: filter.city().map(|_| "x".to_string()),
        owner_id: filter.owner_id().map(|_| 1),
        minimum_price_per_night: filter.minimum_price_per_night().map(|_| 1.0),
        maximum_price_per_night: filter.maximum_price_per_night().map(|_| 1.0),
        minimum_rating: filter.minimum_rating().map(|_| 1.0),
    }
}

fn present_count(filter: &PropertyFilter) -> usize {
    [
        filter.city().is_some(),
        filter.owner_id().is_some(),
        filter.minimum_price_per_night().is_some(),
        filter.maximum_price_per_night().is_some(),
        filter.minimum_rating().is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}

proptest! {
    /// Property: statement text depends only on which filters are present,
    /// never on their values (no caller value reaches the SQL text)
    #[test]
    fn prop_values_never_reach_statement(filter in arb_filter(), limit in 0u32..500) {
        let built = PropertySearch::new(&filter, Limit::new(limit)).build();
        let reference = with_placeholder_values(&filter);
        let reference_built = PropertySearch::new(&reference, Limit::new(7)).build();

        prop_assert_eq!(built.sql, reference_built.sql);
    }

    /// Property: one parameter per present filter plus the limit, and
    /// placeholders $1..$n all appear
    #[test]
    fn prop_placeholders_match_params(filter in arb_filter()) {
        let built = PropertySearch::new(&filter, Limit::default()).build();

        prop_assert_eq!(built.params.len(), present_count(&filter) + 1);
        for n in 1..=built.params.len() {
            let placeholder = format!("${}", n);
            prop_assert!(built.sql.contains(&placeholder));
        }
        let next = format!("${}", built.params.len() + 1);
        prop_assert!(!built.sql.contains(&next));
    }

    /// Property: exactly one WHERE when any pre-aggregation filter is set,
    /// and AND count is one less than the predicate count
    #[test]
    fn prop_where_and_prefixes(filter in arb_filter()) {
        let built = PropertySearch::new(&filter, Limit::default()).build();
        let predicates = present_count(&filter)
            - usize::from(filter.minimum_rating().is_some());

        let wheres = built.sql.matches("\nWHERE ").count();
        let ands = built.sql.matches("\nAND ").count();
        prop_assert_eq!(wheres, usize::from(predicates > 0));
        prop_assert_eq!(ands, predicates.saturating_sub(1));
    }

    /// Property: the limit is always the last parameter, capped at 100
    #[test]
    fn prop_limit_is_last_param(filter in arb_filter(), limit in 0u32..500) {
        let built = PropertySearch::new(&filter, Limit::new(limit)).build();
        let expected = i64::from(limit.min(100));

        prop_assert_eq!(built.params.last(), Some(&SqlParam::Int(expected)));
    }
}

//! Property search criteria

use serde::{Deserialize, Serialize};

/// Optional filters for the property listings search.
///
/// Prices are in major currency units (dollars) as entered by the guest;
/// the query builder converts them to stored cents. A filter only counts
/// as present when it carries a value: empty strings and zero are ignored,
/// matching how the search form submits untouched fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub city: Option<String>,
    /// Submitted as `user_id` by the web form
    #[serde(alias = "user_id")]
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    pub fn owner_id(&self) -> Option<i32> {
        self.owner_id.filter(|id| *id != 0)
    }

    pub fn minimum_price_per_night(&self) -> Option<f64> {
        present(self.minimum_price_per_night)
    }

    pub fn maximum_price_per_night(&self) -> Option<f64> {
        present(self.maximum_price_per_night)
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        present(self.minimum_rating)
    }

    /// True when no filter is present.
    pub fn is_empty(&self) -> bool {
        self.city().is_none()
            && self.owner_id().is_none()
            && self.minimum_price_per_night().is_none()
            && self.maximum_price_per_night().is_none()
            && self.minimum_rating().is_none()
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

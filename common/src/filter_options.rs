//! Filter option lists derived from the park dataset.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::park::Park;

/// Distinct facility and suburb values, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterOptions {
    pub facilities: Vec<String>,
    pub suburbs: Vec<String>,
}

/// Recompute both option lists from scratch.
pub fn populate_filters(parks: &[Park]) -> FilterOptions {
    let mut facilities = BTreeSet::new();
    let mut suburbs = BTreeSet::new();
    for park in parks {
        facilities.extend(park.facilities.iter().cloned());
        suburbs.insert(park.suburb.clone());
    }
    tracing::debug!(parks = parks.len(), facilities = facilities.len(), suburbs = suburbs.len(), "derived filter options");
    FilterOptions {
        facilities: facilities.into_iter().collect(),
        suburbs: suburbs.into_iter().collect(),
    }
}

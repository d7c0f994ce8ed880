//! Mirroring the filter selection in the page URL.
//!
//! Each dimension is a single query parameter holding a comma-joined list,
//! e.g. `?facility=BBQ,Toilet&suburb=Bondi`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    filter_options::FilterOptions,
    filter_selection::FilterSelection,
    park_const::QUERY_VALUE_SEPARATOR,
};

/// Raw `facility` and `suburb` query parameter values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    pub facility: String,
    pub suburb: String,
}

/// Encode the current selection for the URL.
pub fn update_url_with_filters(selection: &FilterSelection) -> FilterQuery {
    FilterQuery {
        facility: join_values(&selection.facilities),
        suburb: join_values(&selection.suburbs),
    }
}

/// Select the options named in the URL. Matching ignores case and keeps the
/// option's own spelling; names without an option are dropped.
pub fn pre_populate_filters_from_url(query: &FilterQuery, options: &FilterOptions) -> FilterSelection {
    FilterSelection {
        facilities: match_values(&query.facility, &options.facilities),
        suburbs: match_values(&query.suburb, &options.suburbs),
    }
}

fn join_values(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(&QUERY_VALUE_SEPARATOR.to_string())
}

fn match_values(raw: &str, options: &[String]) -> BTreeSet<String> {
    let mut selected = BTreeSet::new();
    for wanted in raw.split(QUERY_VALUE_SEPARATOR).map(str::trim).filter(|v| !v.is_empty()) {
        let wanted = wanted.to_lowercase();
        // options differing only by case are all selected
        let matches: Vec<&String> = options.iter().filter(|option| option.to_lowercase() == wanted).collect();
        if matches.is_empty() {
            tracing::debug!(value = %wanted, "ignoring url filter value with no matching option");
        }
        selected.extend(matches.into_iter().cloned());
    }
    selected
}

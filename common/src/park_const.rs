//! Constants shared between the page and the filter logic.

pub const QUERY_VALUE_SEPARATOR: char = ',';

pub const FACILITY_FILTER_ID: &str = "facility-filter";
pub const SUBURB_FILTER_ID: &str = "suburb-filter";
pub const PARK_LIST_ID: &str = "park-list";
pub const SEARCH_BUTTON_ID: &str = "search-button";

pub const NO_RESULTS_TEXT: &str = "No parks found matching the selected filters.";

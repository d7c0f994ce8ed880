//! What the park list shows after a filter pass.

use crate::{filter_and_sort::filter_and_sort, filter_selection::FilterSelection, park::Park};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkListView {
    Parks(Vec<Park>),
    /// Rendered as a single placeholder entry.
    NoResults,
}

impl ParkListView {
    pub fn from_sorted(parks: Vec<Park>) -> Self {
        if parks.is_empty() { ParkListView::NoResults } else { ParkListView::Parks(parks) }
    }

    pub fn len(&self) -> usize {
        match self {
            ParkListView::Parks(parks) => parks.len(),
            ParkListView::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter, sort and wrap for rendering.
pub fn apply_filters(parks: &[Park], selection: &FilterSelection) -> ParkListView {
    ParkListView::from_sorted(filter_and_sort(parks, selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matches_is_a_placeholder_not_an_error() {
        let parks = vec![Park::new("Alpha Park", "Bondi", vec!["BBQ"])];
        let view = apply_filters(&parks, &FilterSelection::new(["Pool"], Vec::<String>::new()));
        assert_eq!(view, ParkListView::NoResults);
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn empty_dataset_is_no_results() {
        assert_eq!(apply_filters(&[], &FilterSelection::default()), ParkListView::NoResults);
    }

    #[test]
    fn matches_are_kept_in_sorted_order() {
        let parks = vec![
            Park::new("Beta Park", "Bondi", vec!["BBQ"]),
            Park::new("Alpha Park", "Bondi", vec!["BBQ"]),
        ];
        match apply_filters(&parks, &FilterSelection::default()) {
            ParkListView::Parks(parks) => assert_eq!(parks[0].park_name, "Alpha Park"),
            ParkListView::NoResults => panic!("expected parks"),
        }
    }
}

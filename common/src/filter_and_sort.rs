//! Filtering and ordering of parks for display.

use std::cmp::Ordering;

use crate::{filter_selection::FilterSelection, park::Park};

/// A park matches when it has every selected facility and its suburb is one
/// of the selected suburbs. An empty selection on either side matches all.
pub fn park_matches(park: &Park, selection: &FilterSelection) -> bool {
    let facilities_ok = selection.facilities.iter().all(|facility| park.has_facility(facility));
    let suburbs_ok = selection.suburbs.is_empty() || selection.suburbs.contains(&park.suburb);
    facilities_ok && suburbs_ok
}

/// Matching parks ordered by suburb, then by park name.
pub fn filter_and_sort(parks: &[Park], selection: &FilterSelection) -> Vec<Park> {
    let mut matching: Vec<Park> = parks.iter().filter(|park| park_matches(park, selection)).cloned().collect();
    matching.sort_by(compare_parks);
    matching
}

pub fn compare_parks(a: &Park, b: &Park) -> Ordering {
    locale_compare(&a.suburb, &b.suburb).then_with(|| locale_compare(&a.park_name, &b.park_name))
}

/// Human ordering for display strings: letters compare case-insensitively,
/// and when two strings differ only by case the lowercase one comes first.
///
/// Only case is folded. Punctuation and symbols keep their code point order
/// and accented letters sort after `z`, unlike a full collation.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| lowercase_first(a, b))
        .then_with(|| a.cmp(b))
}

fn lowercase_first(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        if x.is_lowercase() && y.is_uppercase() {
            return Ordering::Less;
        }
        if x.is_uppercase() && y.is_lowercase() {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parks() -> Vec<Park> {
        vec![
            Park::new("Gamma Park", "Coogee", vec!["Toilet"]),
            Park::new("Beta Park", "Bondi", vec!["BBQ"]),
            Park::new("Alpha Park", "Bondi", vec!["BBQ", "Toilet"]),
        ]
    }

    fn names(parks: &[Park]) -> Vec<&str> {
        parks.iter().map(|p| p.park_name.as_str()).collect()
    }

    #[test]
    fn single_facility_filter() {
        let selection = FilterSelection::new(["BBQ"], Vec::<String>::new());
        let result = filter_and_sort(&sample_parks(), &selection);
        assert_eq!(names(&result), vec!["Alpha Park", "Beta Park"]);
    }

    #[test]
    fn facilities_use_and_semantics() {
        let selection = FilterSelection::new(["BBQ", "Toilet"], Vec::<String>::new());
        let result = filter_and_sort(&sample_parks(), &selection);
        assert_eq!(names(&result), vec!["Alpha Park"]);
    }

    #[test]
    fn suburbs_use_or_semantics() {
        let selection = FilterSelection::new(Vec::<String>::new(), ["Bondi", "Coogee"]);
        let result = filter_and_sort(&sample_parks(), &selection);
        assert_eq!(names(&result), vec!["Alpha Park", "Beta Park", "Gamma Park"]);
    }

    #[test]
    fn both_dimensions_combine() {
        let selection = FilterSelection::new(["Toilet"], ["Coogee"]);
        let result = filter_and_sort(&sample_parks(), &selection);
        assert_eq!(names(&result), vec!["Gamma Park"]);

        let selection = FilterSelection::new(["BBQ"], ["Coogee"]);
        assert!(filter_and_sort(&sample_parks(), &selection).is_empty());
    }

    #[test]
    fn empty_selection_returns_everything_sorted() {
        let result = filter_and_sort(&sample_parks(), &FilterSelection::default());
        assert_eq!(names(&result), vec!["Alpha Park", "Beta Park", "Gamma Park"]);
    }

    #[test]
    fn unknown_values_match_nothing() {
        let selection = FilterSelection::new(["Pool"], Vec::<String>::new());
        assert!(filter_and_sort(&sample_parks(), &selection).is_empty());
        let selection = FilterSelection::new(Vec::<String>::new(), ["Manly"]);
        assert!(filter_and_sort(&sample_parks(), &selection).is_empty());
    }

    #[test]
    fn predicate_agrees_with_filter_for_every_selection() {
        let parks = sample_parks();
        let facilities = ["BBQ", "Toilet", "Pool"];
        let suburbs = ["Bondi", "Coogee"];
        // every subset of both dimensions
        for fmask in 0..(1 << facilities.len()) {
            for smask in 0..(1 << suburbs.len()) {
                let selection = FilterSelection::new(
                    facilities.iter().enumerate().filter(|(i, _)| fmask & (1 << i) != 0).map(|(_, f)| *f),
                    suburbs.iter().enumerate().filter(|(i, _)| smask & (1 << i) != 0).map(|(_, s)| *s),
                );
                let result = filter_and_sort(&parks, &selection);
                for park in &parks {
                    let expected = selection.facilities.iter().all(|f| park.facilities.contains(f))
                        && (selection.suburbs.is_empty() || selection.suburbs.contains(&park.suburb));
                    assert_eq!(result.contains(park), expected, "{park:?} with {selection:?}");
                }
            }
        }
    }

    #[test]
    fn sort_is_case_insensitive() {
        let parks = vec![
            Park::new("zeta", "bondi", Vec::<&str>::new()),
            Park::new("Alpha", "Bondi", Vec::<&str>::new()),
            Park::new("beta", "Bondi", Vec::<&str>::new()),
            Park::new("Delta", "Arncliffe", Vec::<&str>::new()),
        ];
        let result = filter_and_sort(&parks, &FilterSelection::default());
        let keys: Vec<(&str, &str)> = result.iter().map(|p| (p.suburb.as_str(), p.park_name.as_str())).collect();
        assert_eq!(keys, vec![("Arncliffe", "Delta"), ("bondi", "zeta"), ("Bondi", "Alpha"), ("Bondi", "beta")]);
    }

    #[test]
    fn locale_compare_orders_case_variants() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("park", "Park"), Ordering::Less);
        assert_eq!(locale_compare("Park", "park"), Ordering::Greater);
        assert_eq!(locale_compare("Park", "Park"), Ordering::Equal);
        assert_eq!(locale_compare("Park", "Parks"), Ordering::Less);
    }
}

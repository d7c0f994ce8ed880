//! The set of filter values a user has picked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSelection {
    pub facilities: BTreeSet<String>,
    pub suburbs: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Facility,
    Suburb,
}

impl FilterKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterKind::Facility => "Facilities",
            FilterKind::Suburb => "Suburbs",
        }
    }
}

impl FilterSelection {
    pub fn new(facilities: impl IntoIterator<Item = impl Into<String>>, suburbs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            facilities: facilities.into_iter().map(|s| s.into()).collect(),
            suburbs: suburbs.into_iter().map(|s| s.into()).collect(),
        }
    }

    pub fn values(&self, kind: FilterKind) -> &BTreeSet<String> {
        match kind {
            FilterKind::Facility => &self.facilities,
            FilterKind::Suburb => &self.suburbs,
        }
    }

    fn values_mut(&mut self, kind: FilterKind) -> &mut BTreeSet<String> {
        match kind {
            FilterKind::Facility => &mut self.facilities,
            FilterKind::Suburb => &mut self.suburbs,
        }
    }

    pub fn is_selected(&self, kind: FilterKind, value: &str) -> bool {
        self.values(kind).contains(value)
    }

    /// Flip one option. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, kind: FilterKind, value: &str) -> bool {
        let values = self.values_mut(kind);
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    pub fn clear(&mut self, kind: FilterKind) {
        self.values_mut(kind).clear();
    }
}

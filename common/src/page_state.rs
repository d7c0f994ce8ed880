//! Lifecycle of the park finder page.

use crate::{
    filter_options::{FilterOptions, populate_filters},
    filter_selection::FilterSelection,
    park::Park,
    park_list_view::{ParkListView, apply_filters},
    url_filters::{FilterQuery, pre_populate_filters_from_url},
};

/// `Loading` until the first dataset arrives, `Ready` from then on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Ready(ReadyPage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPage {
    pub options: FilterOptions,
    pub view: ParkListView,
}

impl PageState {
    /// First load: derive options, restore the URL selection and render.
    pub fn first_load(parks: &[Park], url_query: &FilterQuery) -> (Self, FilterSelection) {
        let options = populate_filters(parks);
        let selection = pre_populate_filters_from_url(url_query, &options);
        let view = apply_filters(parks, &selection);
        (PageState::Ready(ReadyPage { options, view }), selection)
    }

    /// Apply any fetched dataset and return the selection it was rendered
    /// with. Until the page is `Ready` the URL selection is restored first,
    /// whichever fetch gets there; after that `selection` is used and the
    /// options stay as first derived.
    pub fn apply_fetch(&mut self, parks: &[Park], selection: &FilterSelection, url_query: &FilterQuery) -> FilterSelection {
        match self {
            PageState::Ready(ready) => {
                ready.view = apply_filters(parks, selection);
                selection.clone()
            }
            PageState::Loading => {
                let (state, restored) = PageState::first_load(parks, url_query);
                *self = state;
                restored
            }
        }
    }
}

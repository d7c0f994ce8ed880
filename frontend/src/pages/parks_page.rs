//! The park finder page: filter controls above the park list.

use std::collections::BTreeSet;

use dioxus::{logger::tracing, prelude::*};

use common::{
    fetch_generation::FetchGeneration,
    filter_selection::{FilterKind, FilterSelection},
    page_state::PageState,
    url_filters::{FilterQuery, update_url_with_filters},
};
use crate::{
    api::parks_api::fetch_parks,
    components::{
        error_boundary::ComponentErrorBoundary,
        loading_indicator::LoadingIndicator,
        park_components::{filter_select::FilterSelect, park_list::ParkList, search_button::SearchButton},
    },
    routes::Route,
};

/// Park list page. `facility` and `suburb` are the comma-joined URL filters.
#[component]
pub fn ParksPage(facility: String, suburb: String) -> Element {
    // only the url the page was opened with is restored; later url changes are our own replacements
    let url_query = use_hook(|| FilterQuery { facility: facility.clone(), suburb: suburb.clone() });

    rsx! {
        Title { "Park Finder" }
        ParksPageRootComponent { url_query }
    }
}

#[component]
fn ParksPageRootComponent(url_query: FilterQuery) -> Element {
    let mut page_state = use_signal(PageState::default);
    let mut selection = use_signal(FilterSelection::default);
    let mut generation = use_signal(FetchGeneration::default);
    let nav = navigator();

    let initial_query = url_query.clone();
    use_future(move || {
        let url_query = initial_query.clone();
        async move {
            let ticket = generation.write().issue();
            match fetch_parks().await {
                Ok(parks) => {
                    if !generation.peek().is_current(ticket) {
                        tracing::debug!("Discarding initial park fetch {}, a newer one is in flight", ticket.generation());
                        return;
                    }
                    let requested = selection.peek().clone();
                    let restored = page_state.write().apply_fetch(&parks, &requested, &url_query);
                    tracing::info!("Loaded {} parks, restored {} url filters", parks.len(), restored.facilities.len() + restored.suburbs.len());
                    selection.set(restored);
                }
                Err(e) => tracing::error!("Initial park fetch failed: {e}"),
            }
        }
    });

    // every filter change refetches the dataset; only the newest fetch may render
    let fetch_and_apply = Callback::new(move |_: ()| {
        let ticket = generation.write().issue();
        let requested = selection.peek().clone();
        let url_query = url_query.clone();
        spawn(async move {
            match fetch_parks().await {
                Ok(parks) => {
                    if !generation.peek().is_current(ticket) {
                        tracing::debug!("Discarding stale park fetch {}", ticket.generation());
                        return;
                    }
                    // a search issued while still loading restores the url selection here
                    let applied = page_state.write().apply_fetch(&parks, &requested, &url_query);
                    let FilterQuery { facility, suburb } = update_url_with_filters(&applied);
                    selection.set(applied);
                    nav.replace(Route::ParksPage { facility, suburb });
                }
                Err(e) => tracing::error!("Park fetch {} failed: {e}", ticket.generation()),
            }
        });
    });

    let toggle_filter = Callback::new(move |(kind, value): (FilterKind, String)| {
        selection.write().toggle(kind, &value);
        fetch_and_apply(());
    });
    let clear_filter = Callback::new(move |kind: FilterKind| {
        selection.write().clear(kind);
        fetch_and_apply(());
    });

    let (facility_options, suburb_options, list_view) = match &*page_state.read() {
        PageState::Ready(ready) => (ready.options.facilities.clone(), ready.options.suburbs.clone(), Some(ready.view.clone())),
        PageState::Loading => (Vec::new(), Vec::new(), None),
    };
    let selected_facilities: BTreeSet<String> = selection.read().facilities.clone();
    let selected_suburbs: BTreeSet<String> = selection.read().suburbs.clone();

    rsx! {
        div {
            id: "x-parks-page-root-component",
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
                background-color: #ECEEF2;
            ",
            div {
                id: "x-parks-filter-bar",
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: flex-start;
                    gap: 16px;
                    padding: 16px;
                    background-color: #F8FCFF;
                    border-bottom: 1px solid rgb(164, 164, 164);
                ",
                FilterSelect {
                    kind: FilterKind::Facility,
                    options: facility_options,
                    selected: selected_facilities,
                    on_toggle: toggle_filter,
                    on_clear: clear_filter,
                }
                FilterSelect {
                    kind: FilterKind::Suburb,
                    options: suburb_options,
                    selected: selected_suburbs,
                    on_toggle: toggle_filter,
                    on_clear: clear_filter,
                }
                SearchButton { onclick: fetch_and_apply }
            }
            div {
                id: "x-parks-list-panel",
                style: "padding: 7px; width: 100%; box-sizing: border-box;",
                if let Some(view) = list_view {
                    ComponentErrorBoundary {
                        ParkList { view }
                    }
                } else {
                    LoadingIndicator {}
                }
            }
        }
    }
}

//! The rendered list of matching parks.

use common::{park::Park, park_const::{NO_RESULTS_TEXT, PARK_LIST_ID}, park_list_view::ParkListView};
use dioxus::prelude::*;

use crate::components::park_components::park_item_card::ParkItemCard;

#[component]
pub fn ParkList(view: ReadSignal<ParkListView>) -> Element {
    let count = view.read().len();
    let parks: Vec<Park> = match &*view.read() {
        ParkListView::Parks(parks) => parks.clone(),
        ParkListView::NoResults => Vec::new(),
    };

    rsx! {
        div {
            id: "x-park-list-wrapper",
            style: "display: flex; flex-direction: column; width: 100%;",
            h2 {
                class: "x-park-count",
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 7px;",
                if count == 1 { "1 park" } else { "{count} parks" }
            }
            ul {
                id: PARK_LIST_ID,
                style: "width: 100%; list-style: none; margin: 0px; padding: 0px;",
                if view.read().is_empty() {
                    li {
                        class: "no-results",
                        style: "font-size: 18px; color: rgba(28, 33, 45, 0.7); padding: 16px;",
                        "{NO_RESULTS_TEXT}"
                    }
                }
                // names repeat across records, so entries are keyed by position
                for (idx, park) in parks.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: "park-item",
                        ParkItemCard { park }
                    }
                }
            }
        }
    }
}

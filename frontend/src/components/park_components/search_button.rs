use common::park_const::SEARCH_BUTTON_ID;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

#[component]
pub fn SearchButton(onclick: Callback<()>) -> Element {
    rsx! {
        button {
            id: SEARCH_BUTTON_ID,
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                height: 44px;
                padding: 10px 18px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                border-radius: 9999px;
                background-color: white;
                cursor: pointer;
                font-size: 17px;
            ",
            onclick: move |_| onclick(()),
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            "Search"
        }
    }
}

//! Multi-select filter control with one checkbox row per option.

use std::collections::BTreeSet;

use common::{filter_selection::FilterKind, park_const::{FACILITY_FILTER_ID, SUBURB_FILTER_ID}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdInfo, md_communication_icons::MdLocationOn, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

pub fn filter_element_id(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::Facility => FACILITY_FILTER_ID,
        FilterKind::Suburb => SUBURB_FILTER_ID,
    }
}

#[component]
pub fn FilterSelect(
    kind: FilterKind,
    options: ReadSignal<Vec<String>>,
    selected: ReadSignal<BTreeSet<String>>,
    on_toggle: Callback<(FilterKind, String)>,
    on_clear: Callback<FilterKind>,
) -> Element {
    let selected_count = use_memo(move || selected.read().len());
    let border_color = use_memo(move || if selected_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });

    rsx! {
        div {
            id: filter_element_id(kind),
            class: "x-filter-select",
            style: "
                display: flex;
                flex-direction: column;
                min-width: 260px;
                max-width: 400px;
                border: 2px solid {border_color()};
                border-radius: 10px;
                background-color: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                padding: 10px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    font-size: 17px;
                ",
                match kind {
                    FilterKind::Facility => rsx! { Icon { icon: MdInfo, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" } },
                    FilterKind::Suburb => rsx! { Icon { icon: MdLocationOn, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" } },
                }
                "{kind.display_name()}"
                div { style: "flex: 1 1 auto;" }
                if selected_count() > 0 {
                    span {
                        class: "x-filter-selected-count",
                        style: "color: rgba(28, 33, 45, 0.7);",
                        "{selected_count} selected"
                    }
                    button {
                        class: "x-filter-clear",
                        style: "border: none; background: none; color: blue; cursor: pointer;",
                        onclick: move |_| on_clear(kind),
                        "Clear"
                    }
                }
            }
            ul {
                style: "max-height: 300px; overflow-y: auto; margin: 0px; padding: 0px; list-style: none;",
                for option in options.read().iter().cloned() {
                    li {
                        key: "{option}",
                        FilterOptionCheckbox {
                            checked: selected.read().contains(&option),
                            label: option.clone(),
                            on_toggle: move |value: String| on_toggle((kind, value)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOptionCheckbox(checked: bool, label: String, on_toggle: Callback<String>) -> Element {
    let value = label.clone();
    rsx! {
        div {
            class: "x-filter-option",
            "data-selected": "{checked}",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_| on_toggle(value.clone()),

            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
        }
    }
}

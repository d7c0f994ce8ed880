use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            align_items: "center",
            justify_content: "center",
            div {
                class: "x-loading-indicator",
                style: "color:black; font-size: 22px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
                "Loading parks..."
            }
        }
    }
}

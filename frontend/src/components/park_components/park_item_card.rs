use common::park::Park;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

#[component]
pub fn ParkItemCard(park: ReadSignal<Park>) -> Element {
    let Park { park_name, suburb, facilities, park_address, canonical_link } = park.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                box-sizing: border-box;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                match canonical_link {
                    Some(link) => rsx! { a { class: "park-name", href: "{link}", "{park_name}" } },
                    None => rsx! { span { class: "park-name", "{park_name}" } },
                }
                div { style: "flex: 1 1 auto;" }
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.6);" }
                span { class: "park-suburb", "{suburb}" }
            }
            if let Some(address) = park_address {
                div {
                    class: "park-address",
                    style: "font-size: 15px; color: rgba(28, 33, 45, 0.7);",
                    "{address}"
                }
            }
            ul {
                class: "park-facilities",
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px; list-style: none; margin: 0px; padding: 0px;",
                for facility in facilities {
                    li {
                        key: "{facility}",
                        style: "border: 1px solid rgba(0,0,0,0.3); border-radius: 1000px; padding: 2px 10px; font-size: 14px;",
                        "{facility}"
                    }
                }
            }
        }
    }
}

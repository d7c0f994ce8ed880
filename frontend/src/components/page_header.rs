//! Page frame with a title bar above the routed page.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        div {
            id: "x-page-frame",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",
            header {
                id: "x-page-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    height: 64px;
                    padding: 0px 24px;
                    background-color: #1C212D;
                    color: white;
                    flex-shrink: 0;
                ",
                h1 {
                    style: "font-size: 24px; font-weight: 400; margin: 0px;",
                    "Park Finder"
                }
            }
            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "PageHeader".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render error caught by {} boundary: {:?}", boundary_name(), err);
                rsx! {
                    h1 {
                        style: "color:red; font-size: 34px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:darkred; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Reload the park list"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failure inside one panel so the filters stay usable.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                dioxus::logger::tracing::error!("Component error: {}", error_txt);
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-component-error",
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color:red; font-size: 26px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                "Could not show the park list",
            }

            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}

//! Loading the park dataset.

use common::park::{Park, parse_parks_json};
use dioxus::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

const PARKS_JSON: Asset = asset!("/assets/parks.json");

#[derive(Debug, Clone, PartialEq)]
pub enum ParkFetchError {
    NoWindow,
    Network(String),
    HttpStatus(u16),
    Decode(String),
}

impl std::fmt::Display for ParkFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No browser window available"),
            Self::Network(err) => write!(f, "Failed to fetch parks.json: {}", err),
            Self::HttpStatus(status) => write!(f, "Fetching parks.json returned HTTP {}", status),
            Self::Decode(err) => write!(f, "Failed to decode parks.json: {}", err),
        }
    }
}

impl std::error::Error for ParkFetchError {}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// GET the whole dataset. Nothing is cached between calls.
pub async fn fetch_parks() -> Result<Vec<Park>, ParkFetchError> {
    let window = web_sys::window().ok_or(ParkFetchError::NoWindow)?;
    let url = PARKS_JSON.to_string();

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| ParkFetchError::Network(js_error_text(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ParkFetchError::Network(js_error_text(&e)))?;
    if !response.ok() {
        return Err(ParkFetchError::HttpStatus(response.status()));
    }

    let body = response.text().map_err(|e| ParkFetchError::Network(js_error_text(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ParkFetchError::Network(js_error_text(&e)))?
        .as_string()
        .unwrap_or_default();
    let parks = parse_parks_json(&body).map_err(|e| ParkFetchError::Decode(e.to_string()))?;

    dioxus::logger::tracing::debug!("Fetched {} parks from {}", parks.len(), url);
    Ok(parks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_the_failure() {
        assert_eq!(ParkFetchError::HttpStatus(404).to_string(), "Fetching parks.json returned HTTP 404");
        assert!(ParkFetchError::Decode("expected array".into()).to_string().contains("expected array"));
    }
}

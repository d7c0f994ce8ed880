//! Park records as published in `parks.json`.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Park {
    pub park_name: String,
    pub suburb: String,
    #[serde(default, deserialize_with = "deserialize_facility_tags")]
    pub facilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub park_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_link: Option<String>,
}

impl Park {
    pub fn new(park_name: impl Into<String>, suburb: impl Into<String>, facilities: Vec<impl Into<String>>) -> Self {
        Self {
            park_name: park_name.into(),
            suburb: suburb.into(),
            facilities: dedup_facility_tags(facilities.into_iter().map(|f| f.into())),
            park_address: None,
            canonical_link: None,
        }
    }

    pub fn with_address(mut self, park_address: impl Into<String>) -> Self {
        self.park_address = Some(park_address.into());
        self
    }

    pub fn with_canonical_link(mut self, canonical_link: impl Into<String>) -> Self {
        self.canonical_link = Some(canonical_link.into());
        self
    }

    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }
}

/// Facility tags are a set per park; keep the first occurrence of each.
fn dedup_facility_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn deserialize_facility_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let tags = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(dedup_facility_tags(tags))
}

/// Parse the text of `parks.json`.
pub fn parse_parks_json(text: &str) -> Result<Vec<Park>, serde_json::Error> {
    let parks: Vec<Park> = serde_json::from_str(text)?;
    tracing::debug!(count = parks.len(), "parsed park dataset");
    Ok(parks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_later_variant_record() {
        let text = json!([{
            "park_name": "Alpha Park",
            "suburb": "Bondi",
            "facilities": ["BBQ", "Toilet"],
            "park_address": "1 Beach Rd",
            "extra_field": 42
        }])
        .to_string();
        let parks = parse_parks_json(&text).unwrap();
        assert_eq!(parks.len(), 1);
        assert_eq!(parks[0].park_name, "Alpha Park");
        assert_eq!(parks[0].park_address.as_deref(), Some("1 Beach Rd"));
        assert_eq!(parks[0].canonical_link, None);
    }

    #[test]
    fn parses_earliest_variant_record_with_link() {
        let text = json!([{
            "park_name": "Beta Park",
            "suburb": "Coogee",
            "facilities": [],
            "canonical_link": "https://example.org/parks/beta"
        }])
        .to_string();
        let parks = parse_parks_json(&text).unwrap();
        assert_eq!(parks[0].canonical_link.as_deref(), Some("https://example.org/parks/beta"));
        assert!(parks[0].facilities.is_empty());
    }

    #[test]
    fn duplicate_facility_tags_are_collapsed() {
        let text = json!([{
            "park_name": "Gamma Park",
            "suburb": "Coogee",
            "facilities": ["Toilet", "BBQ", "Toilet"]
        }])
        .to_string();
        let parks = parse_parks_json(&text).unwrap();
        assert_eq!(parks[0].facilities, vec!["Toilet".to_string(), "BBQ".to_string()]);
    }

    #[test]
    fn missing_or_null_facilities_are_empty() {
        let text = json!([
            {"park_name": "A", "suburb": "X"},
            {"park_name": "B", "suburb": "Y", "facilities": null}
        ])
        .to_string();
        let parks = parse_parks_json(&text).unwrap();
        assert!(parks.iter().all(|p| p.facilities.is_empty()));
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(parse_parks_json(r#"{"park_name": "A"}"#).is_err());
    }
}

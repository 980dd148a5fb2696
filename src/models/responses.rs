//! Response DTOs for the PokeAPI endpoints
//!
//! Defines the structure of incoming API response bodies.

use serde::Deserialize;

/// One entry in a paginated resource listing.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "canalave-city-area"
    pub name: String,
    /// Canonical URL of the resource
    pub url: String,
}

/// One page of the location-area listing (GET /location-area).
///
/// `next` and `previous` are full URLs for the neighbouring pages; either
/// may be null at the ends of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
            {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
        ]
    }"#;

    #[test]
    fn test_location_area_page_deserialize() {
        let page: LocationAreaPage = serde_json::from_str(SAMPLE_PAGE).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.next.as_deref().unwrap().contains("offset=20"));
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_area_page_last_page() {
        let json = r#"{"count": 2, "next": null, "previous": "https://pokeapi.co/api/v2/location-area?offset=0&limit=20", "results": []}"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert!(page.next.is_none());
        assert!(page.previous.is_some());
        assert!(page.results.is_empty());
    }
}

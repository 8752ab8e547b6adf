//! Suggestion assembly from raw place features.

use serde::{Deserialize, Serialize};

use super::provider::{PlaceFeature, PlaceProperties};
use super::SearchOptions;

/// Result cap applied after filtering; the provider is asked for more to
/// absorb filtering loss.
pub(crate) const RESULT_CAP: usize = 10;

/// Sentinel title when a feature carries no usable name at all.
const UNKNOWN_LOCATION: &str = "Unknown Location";

/// One autocomplete suggestion ready for display and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Full display name, `"title, subtitle"` when a subtitle exists
    pub name: String,
    /// Primary line
    pub title: String,
    /// Disambiguating second line, possibly empty
    pub subtitle: String,
    pub lat: f64,
    pub lng: f64,
}

/// Filters, caps, and maps provider features into suggestions.
pub(crate) fn build_suggestions(
    features: Vec<PlaceFeature>,
    options: &SearchOptions,
) -> Vec<Suggestion> {
    features
        .into_iter()
        .filter(|feature| !options.only_cities || is_place_like(&feature.properties))
        .take(RESULT_CAP)
        .map(|feature| to_suggestion(feature, options))
        .collect()
}

/// Whether a feature's classification is administrative/place-like.
///
/// Strict tag filtering at the provider misses major cities whose tagging is
/// quirky, so the rules are permissive: explicit place/boundary keys and the
/// city..country value list pass, object/POI keys are rejected, and anything
/// else (natural features and the like) is allowed through.
fn is_place_like(properties: &PlaceProperties) -> bool {
    if matches!(properties.osm_key.as_deref(), Some("place" | "boundary")) {
        return true;
    }

    const PLACE_VALUES: [&str; 9] = [
        "city", "town", "village", "hamlet", "suburb", "borough", "county", "state", "country",
    ];
    if properties
        .osm_value
        .as_deref()
        .is_some_and(|value| PLACE_VALUES.contains(&value))
    {
        return true;
    }

    const OBJECT_KEYS: [&str; 6] = [
        "highway", "amenity", "shop", "tourism", "leisure", "building",
    ];
    !properties
        .osm_key
        .as_deref()
        .is_some_and(|key| OBJECT_KEYS.contains(&key))
}

fn to_suggestion(feature: PlaceFeature, options: &SearchOptions) -> Suggestion {
    let properties = &feature.properties;

    let title = properties
        .name
        .clone()
        .or_else(|| properties.city.clone())
        .or_else(|| properties.town.clone())
        .or_else(|| properties.village.clone())
        .or_else(|| properties.state.clone())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

    let mut parts: Vec<String> = Vec::new();

    if !options.only_cities {
        if let Some(street) = &properties.street {
            let number = properties.housenumber.as_deref().unwrap_or("");
            parts.push(format!("{street} {number}").trim().to_string());
        }
    }

    // First locality that is present and distinct from the title
    let locality = [&properties.city, &properties.town, &properties.village]
        .into_iter()
        .flatten()
        .find(|value| **value != title);
    if let Some(locality) = locality {
        parts.push(locality.clone());
    }

    if let Some(state) = &properties.state {
        if *state != title {
            parts.push(state.clone());
        }
    }
    if let Some(country) = &properties.country {
        if *country != title {
            parts.push(country.clone());
        }
    }

    parts.retain(|part| !part.is_empty());
    let subtitle = parts.join(", ");

    let name = if subtitle.is_empty() {
        title.clone()
    } else {
        format!("{title}, {subtitle}")
    };

    Suggestion {
        name,
        title,
        subtitle,
        lat: feature.coordinates.lat,
        lng: feature.coordinates.lng,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn feature(properties: PlaceProperties) -> PlaceFeature {
        PlaceFeature {
            coordinates: Coordinates::new(48.8566, 2.3522),
            properties,
        }
    }

    fn city(name: &str) -> PlaceFeature {
        feature(PlaceProperties {
            name: Some(name.to_string()),
            osm_key: Some("place".to_string()),
            osm_value: Some("city".to_string()),
            ..PlaceProperties::default()
        })
    }

    fn restaurant(name: &str) -> PlaceFeature {
        feature(PlaceProperties {
            name: Some(name.to_string()),
            osm_key: Some("amenity".to_string()),
            osm_value: Some("restaurant".to_string()),
            ..PlaceProperties::default()
        })
    }

    const CITIES_ONLY: SearchOptions = SearchOptions { only_cities: true };
    const ANYTHING: SearchOptions = SearchOptions { only_cities: false };

    #[test]
    fn test_only_cities_filters_object_categories() {
        let features = vec![city("Paris"), restaurant("Chez Marie"), city("Lyon")];
        let suggestions = build_suggestions(features, &CITIES_ONLY);

        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Paris", "Lyon"]);
    }

    #[test]
    fn test_only_cities_keeps_boundary_and_place_values() {
        let boundary = feature(PlaceProperties {
            name: Some("Île-de-France".to_string()),
            osm_key: Some("boundary".to_string()),
            osm_value: Some("administrative".to_string()),
            ..PlaceProperties::default()
        });
        let hamlet = feature(PlaceProperties {
            name: Some("Tiny".to_string()),
            osm_key: Some("unclassified".to_string()),
            osm_value: Some("hamlet".to_string()),
            ..PlaceProperties::default()
        });
        // Unclassified natural features stay in rather than risking empty lists
        let peak = feature(PlaceProperties {
            name: Some("Mont Blanc".to_string()),
            osm_key: Some("natural".to_string()),
            osm_value: Some("peak".to_string()),
            ..PlaceProperties::default()
        });

        let suggestions = build_suggestions(vec![boundary, hamlet, peak], &CITIES_ONLY);
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_everything_passes_without_only_cities() {
        let features = vec![restaurant("Chez Marie")];
        assert_eq!(build_suggestions(features, &ANYTHING).len(), 1);
    }

    #[test]
    fn test_cap_applies_after_filtering() {
        let mut features = Vec::new();
        for i in 0..12 {
            features.push(city(&format!("City {i}")));
            if i % 4 == 0 {
                features.push(restaurant(&format!("Bistro {i}")));
            }
        }

        let suggestions = build_suggestions(features, &CITIES_ONLY);
        assert_eq!(suggestions.len(), RESULT_CAP);
        assert!(suggestions.iter().all(|s| s.title.starts_with("City")));
    }

    #[test]
    fn test_title_fallback_chain() {
        let nameless = feature(PlaceProperties {
            town: Some("Óbidos".to_string()),
            country: Some("Portugal".to_string()),
            ..PlaceProperties::default()
        });
        let empty = feature(PlaceProperties::default());

        let suggestions = build_suggestions(vec![nameless, empty], &ANYTHING);
        assert_eq!(suggestions[0].title, "Óbidos");
        assert_eq!(suggestions[1].title, "Unknown Location");
        assert_eq!(suggestions[1].name, "Unknown Location");
    }

    #[test]
    fn test_subtitle_composition_and_dedup() {
        let full = feature(PlaceProperties {
            name: Some("Torre de Belém".to_string()),
            city: Some("Lisbon".to_string()),
            state: Some("Lisboa".to_string()),
            country: Some("Portugal".to_string()),
            street: Some("Av. Brasília".to_string()),
            ..PlaceProperties::default()
        });
        let suggestion = &build_suggestions(vec![full], &ANYTHING)[0];
        assert_eq!(
            suggestion.subtitle,
            "Av. Brasília, Lisbon, Lisboa, Portugal"
        );
        assert_eq!(
            suggestion.name,
            "Torre de Belém, Av. Brasília, Lisbon, Lisboa, Portugal"
        );

        // A city suggestion never repeats its own name in the subtitle
        let paris = feature(PlaceProperties {
            name: Some("Paris".to_string()),
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            osm_key: Some("place".to_string()),
            osm_value: Some("city".to_string()),
            ..PlaceProperties::default()
        });
        let suggestion = &build_suggestions(vec![paris], &CITIES_ONLY)[0];
        assert_eq!(suggestion.subtitle, "France");
        assert_eq!(suggestion.name, "Paris, France");
    }

    #[test]
    fn test_street_number_omitted_for_cities() {
        let addressed = feature(PlaceProperties {
            name: Some("Somewhere".to_string()),
            street: Some("Main St".to_string()),
            housenumber: Some("12".to_string()),
            country: Some("Portugal".to_string()),
            ..PlaceProperties::default()
        });

        let with_street = &build_suggestions(vec![addressed.clone()], &ANYTHING)[0];
        assert_eq!(with_street.subtitle, "Main St 12, Portugal");

        let cities = &build_suggestions(vec![addressed], &CITIES_ONLY)[0];
        assert_eq!(cities.subtitle, "Portugal");
    }

    #[test]
    fn test_suggestion_carries_coordinates() {
        let suggestion = &build_suggestions(vec![city("Paris")], &ANYTHING)[0];
        assert_eq!(suggestion.lat, 48.8566);
        assert_eq!(suggestion.lng, 2.3522);
    }
}

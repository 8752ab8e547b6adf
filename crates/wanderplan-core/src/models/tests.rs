use std::str::FromStr;

use crate::models::{ChillLevel, Coordinates, GeneratedTrip, PhotoRef, SpotType};

#[test]
fn test_spot_type_round_trip() {
    for (text, expected) in [
        ("visited", SpotType::Visited),
        ("want_to_visit", SpotType::WantToVisit),
        ("itinerary", SpotType::Itinerary),
        ("accommodation", SpotType::Accommodation),
    ] {
        let parsed = SpotType::from_str(text).expect("valid spot type");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), text);
    }
}

#[test]
fn test_spot_type_rejects_unknown() {
    assert!(SpotType::from_str("hotel").is_err());
}

#[test]
fn test_chill_level_labels() {
    assert_eq!(ChillLevel::Relaxed.label(), "Relaxed (Resort/Beach/Chill)");
    assert_eq!(ChillLevel::Balanced.label(), "Balanced (Sightseeing + Rest)");
    assert_eq!(
        ChillLevel::Active.label(),
        "Active (Hiking/Adventure/Full Day)"
    );
    assert_eq!(ChillLevel::Culture.label(), "Cultural (Museums/History/Food)");
    assert_eq!(ChillLevel::Party.label(), "Nightlife & Social");
}

#[test]
fn test_chill_level_parse_accepts_alternate_spelling() {
    assert_eq!(
        ChillLevel::from_str("cultural").expect("valid level"),
        ChillLevel::Culture
    );
    assert!(ChillLevel::from_str("extreme").is_err());
}

#[test]
fn test_coordinates_range() {
    assert!(Coordinates::new(48.8566, 2.3522).in_range());
    assert!(Coordinates::new(-90.0, 180.0).in_range());
    assert!(!Coordinates::new(91.0, 0.0).in_range());
    assert!(!Coordinates::new(0.0, -180.5).in_range());
}

#[test]
fn test_photo_ref_is_opaque() {
    let photo = PhotoRef::new("data:image/png;base64,AAAA");
    assert_eq!(photo.as_str(), "data:image/png;base64,AAAA");
    assert_eq!(PhotoRef::from("x"), PhotoRef::new("x"));
}

#[test]
fn test_generated_trip_parses_full_document() {
    let raw = r#"{
        "summary": "Two easy days in Lisbon",
        "days": [
            {
                "day": 1,
                "morning_cluster": "Alfama",
                "accommodation": {
                    "name": "Casa do Castelo",
                    "description": "Quiet guesthouse",
                    "reason": "Central to the old town",
                    "is_check_in": true,
                    "coordinates": { "lat": 38.7139, "lng": -9.1334 }
                },
                "activities": [
                    {
                        "time": "09:30",
                        "name": "Castle walk",
                        "notes": "Go early to beat the crowds",
                        "location_name": "Castelo de S. Jorge",
                        "energy_score": 6,
                        "duration_min": 120,
                        "coordinates": { "lat": 38.7139, "lng": -9.1335 }
                    }
                ]
            }
        ]
    }"#;

    let document: GeneratedTrip = serde_json::from_str(raw).expect("document parses");
    assert_eq!(document.summary, "Two easy days in Lisbon");
    assert_eq!(document.days.len(), 1);
    assert_eq!(document.days[0].cluster, "Alfama");
    let accommodation = document.days[0]
        .accommodation
        .as_ref()
        .expect("accommodation present");
    assert!(accommodation.is_check_in);
    assert_eq!(document.days[0].activities[0].energy_score, 6);
    assert_eq!(document.days[0].activities[0].website, None);
}

#[test]
fn test_generated_trip_rejects_missing_days() {
    let raw = r#"{ "summary": "No itinerary" }"#;
    assert!(serde_json::from_str::<GeneratedTrip>(raw).is_err());
}

#[test]
fn test_generated_day_allows_absent_accommodation() {
    let raw = r#"{
        "day": 2,
        "morning_cluster": "Belem",
        "accommodation": null,
        "activities": []
    }"#;
    let day: crate::models::GeneratedDay = serde_json::from_str(raw).expect("day parses");
    assert!(day.accommodation.is_none());
}

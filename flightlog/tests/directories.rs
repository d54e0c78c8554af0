mod common;

use common::{JFK, SYD, airline, airlines, airport, airports};
use flightlog::error::ReferenceDataError;
use flightlog::geo::Coordinate;
use flightlog::reference::{AirlineDirectory, AirportClassification, AirportDirectory};
use serde_json::json;

#[test]
fn looks_up_coordinates_and_country() {
    let airports = airports();
    let jfk = airports.coordinates_of("JFK").expect("JFK is in the directory");
    assert!((jfk.latitude() - 40.6413).abs() < 1e-9);
    assert!((jfk.longitude() + 73.7781).abs() < 1e-9);
    assert_eq!(airports.country_of("SYD"), Some("AU"));
}

#[test]
fn unknown_airport_is_not_found() {
    let airports = airports();
    assert_eq!(airports.coordinates_of("XXX"), None);
    assert_eq!(airports.country_of("XXX"), None);
    assert!(airports.get("XXX").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    let airports = airports();
    assert!(airports.coordinates_of("jfk").is_none());
    assert!(airlines().lookup("jst").is_none());
}

#[test]
fn excludes_closed_airports_and_heliports() -> Result<(), ReferenceDataError> {
    let mut closed = airport("OLD", JFK, "US");
    closed.classification = Some(AirportClassification::Closed);
    let mut heliport = airport("HEL", JFK, "US");
    heliport.classification = Some(AirportClassification::Heliport);
    let mut seaplane = airport("SEA", JFK, "US");
    seaplane.classification = Some(AirportClassification::SeaplaneBase);
    let mut unclassified = airport("TFU", (30.31, 104.44), "CN");
    unclassified.classification = None;

    let directory = AirportDirectory::build([closed, heliport, seaplane, unclassified])?;
    assert_eq!(directory.len(), 2);
    assert!(directory.get("OLD").is_none());
    assert!(directory.get("HEL").is_none());
    assert!(directory.get("SEA").is_some());
    assert!(directory.get("TFU").is_some());
    Ok(())
}

#[test]
fn later_duplicate_wins() -> Result<(), ReferenceDataError> {
    let directory =
        AirportDirectory::build([airport("TFU", JFK, "US"), airport("TFU", (30.31, 104.44), "CN")])?;
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.country_of("TFU"), Some("CN"));
    assert_eq!(
        directory.coordinates_of("TFU"),
        Some(Coordinate::new(30.31, 104.44).expect("valid"))
    );
    Ok(())
}

#[test]
fn invalid_coordinate_fails_the_build() {
    let result = AirportDirectory::build([airport("SYD", SYD, "AU"), airport("BAD", (123.0, 0.0), "XX")]);
    match result {
        Err(ReferenceDataError::InvalidCoordinate { code, .. }) => assert_eq!(code, "BAD"),
        other => panic!("expected an invalid coordinate error, got {other:?}"),
    }
}

#[test]
fn equator_meridian_airport_is_found() -> Result<(), ReferenceDataError> {
    let directory = AirportDirectory::build([airport("NUL", (0.0, 0.0), "XX")])?;
    assert_eq!(
        directory.coordinates_of("NUL"),
        Some(Coordinate::new(0.0, 0.0).expect("valid"))
    );
    Ok(())
}

#[test]
fn deserializes_upstream_airport_rows() -> Result<(), serde_json::Error> {
    let rows = json!([
        {
            "iata": "JFK",
            "airport_name": "John F Kennedy International Airport",
            "country": "United States",
            "city": "New York",
            "type": "large_airport",
            "lat": 40.6413,
            "lon": -73.7781,
            "iso_country": "US",
            "iso_region": "US-NY",
            "elevation": 3.9
        },
        { "code": "HEL", "latitude": 1.0, "longitude": 2.0, "country_code": "FI", "classification": "heliport" },
        { "iata": "XYZ", "lat": 1.0, "lon": 2.0, "type": "something_new" }
    ]);
    let records: Vec<flightlog::reference::AirportRecord> = serde_json::from_value(rows)?;
    assert_eq!(records[0].region.as_deref(), Some("US-NY"));
    assert_eq!(records[1].classification, Some(AirportClassification::Heliport));
    assert_eq!(records[2].classification, Some(AirportClassification::Other));
    assert_eq!(records[2].country_code, None);

    let directory = AirportDirectory::build(records).expect("valid rows");
    assert_eq!(directory.len(), 2);
    Ok(())
}

#[test]
fn airline_lookup() {
    let airlines = airlines();
    let jetstar = airlines.lookup("JST").expect("JST is in the directory");
    assert_eq!(jetstar.display_name, "Jet Star");
    assert!(airlines.lookup("ZZZ").is_none());
}

#[test]
fn icon_path_prefers_full_colour_logo() {
    assert_eq!(
        airline("JST", "Jet Star", &["logo", "logo_mono"]).icon_path(),
        Some("jet-star.svg".to_string())
    );
    assert_eq!(
        airline("JST", "Jet Star", &["logo_mono"]).icon_path(),
        Some("jet-star_mono.svg".to_string())
    );
    assert_eq!(airline("JST", "Jet Star", &["wordmark"]).icon_path(), None);
    assert_eq!(airline("JST", "Jet Star", &[]).icon_path(), None);
}

#[test]
fn deserializes_upstream_airline_rows() -> Result<(), serde_json::Error> {
    let rows = json!([{
        "iata": "JQ",
        "name": "Jet Star",
        "icao": "JST",
        "country": "Australia",
        "website": "https://www.jetstar.com",
        "alliance": null,
        "branding": { "primary_color": "#ff5a00", "variations": ["logo", "logo_mono"] }
    }, {
        "code": "QFA",
        "display_name": "Qantas",
        "branding": { "primary_color": null, "variants": ["logo_mono"] }
    }]);
    let entries: Vec<flightlog::reference::AirlineEntry> = serde_json::from_value(rows)?;
    let directory = AirlineDirectory::build(entries);
    assert_eq!(directory.len(), 2);
    assert_eq!(
        directory.lookup("JST").and_then(|a| a.icon_path()),
        Some("jet-star.svg".to_string())
    );
    assert_eq!(
        directory
            .lookup("QFA")
            .and_then(|a| a.branding.primary_color.clone()),
        None
    );
    Ok(())
}

#![allow(dead_code)]

use flightlog::reference::{
    AirlineDirectory, AirlineEntry, AirportClassification, AirportDirectory, AirportRecord,
    Branding, FlightRecord,
};
use serde_json::{Map, Value};

pub const JFK: (f64, f64) = (40.6413, -73.7781);
pub const LAX: (f64, f64) = (33.9416, -118.4085);
pub const SYD: (f64, f64) = (-33.9461, 151.1770);
pub const MEL: (f64, f64) = (-37.6690, 144.8410);

pub fn airport(code: &str, (latitude, longitude): (f64, f64), country: &str) -> AirportRecord {
    AirportRecord {
        code: code.to_string(),
        latitude,
        longitude,
        country_code: Some(country.to_string()),
        classification: Some(AirportClassification::LargeAirport),
        name: None,
        city: None,
        region: None,
    }
}

pub fn airline(code: &str, name: &str, variants: &[&str]) -> AirlineEntry {
    AirlineEntry {
        code: code.to_string(),
        display_name: name.to_string(),
        branding: Branding {
            primary_color: Some("#ff5a00".to_string()),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        },
    }
}

pub fn flight(number: &str, airline: Option<&str>, from: &str, to: &str) -> FlightRecord {
    FlightRecord {
        airline_code: airline.map(str::to_string),
        departure_code: from.to_string(),
        arrival_code: to.to_string(),
        flight_number: number.to_string(),
        passthrough: Map::<String, Value>::new(),
    }
}

pub fn airports() -> AirportDirectory {
    AirportDirectory::build([
        airport("JFK", JFK, "US"),
        airport("LAX", LAX, "US"),
        airport("SYD", SYD, "AU"),
        airport("MEL", MEL, "AU"),
    ])
    .expect("fixture airports are valid")
}

pub fn airlines() -> AirlineDirectory {
    AirlineDirectory::build([
        airline("JST", "Jet Star", &["logo", "logo_mono"]),
        airline("QFA", "Qantas", &["logo_mono"]),
        airline("DAL", "Delta Air Lines", &[]),
    ])
}

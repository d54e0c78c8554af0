use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys written by enrichment. Input values under these names are replaced, never duplicated.
pub const DERIVED_FIELDS: [&str; 10] = [
    "departure_coordinates",
    "arrival_coordinates",
    "distance_km",
    "flight_time_hours",
    "departure_country",
    "arrival_country",
    "international",
    "airline_name",
    "airline_primary_color",
    "airline_icon_path",
];

/// A flight log row. Only the routing fields are typed; everything else rides along in
/// `passthrough` and is written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "airline", alias = "airline_code", default)]
    pub airline_code: Option<String>,
    #[serde(rename = "from", alias = "departure_code")]
    pub departure_code: String,
    #[serde(rename = "to", alias = "arrival_code")]
    pub arrival_code: String,
    pub flight_number: String,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

/// Output row. Every derived field is always serialized; lookups that found nothing
/// are written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedFlightRecord {
    #[serde(flatten)]
    pub flight: FlightRecord,
    pub departure_coordinates: Coordinate,
    pub arrival_coordinates: Coordinate,
    pub distance_km: f64,
    pub flight_time_hours: f64,
    pub departure_country: Option<String>,
    pub arrival_country: Option<String>,
    pub international: bool,
    pub airline_name: Option<String>,
    pub airline_primary_color: Option<String>,
    pub airline_icon_path: Option<String>,
}

impl EnrichedFlightRecord {
    pub fn is_west_bound(&self) -> bool {
        self.departure_coordinates.longitude() > self.arrival_coordinates.longitude()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Typical commercial cruise speed, used when no per-run speed is configured.
pub const DEFAULT_CRUISE_SPEED_KMH: f64 = 900.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Serialized as a `[lat, lon]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_to(&self, other: Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.latitude, value.longitude]
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = CoordinateError;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(latitude, longitude)
    }
}

/// Distance between two possibly unresolved points. Absence on either side yields `None`.
pub fn distance(a: Option<Coordinate>, b: Option<Coordinate>) -> Option<f64> {
    a.zip(b).map(|(a, b)| a.distance_to(b))
}

pub fn flight_time(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh
}

/// Estimated flight time in hours, `None` when the distance is unknown.
pub fn estimate_time(distance_km: Option<f64>, speed_kmh: f64) -> Option<f64> {
    distance_km.map(|d| flight_time(d, speed_kmh))
}

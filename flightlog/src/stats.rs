use crate::reference::EnrichedFlightRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LONG_HAUL_THRESHOLD_KM: f64 = 5000.0;

/// Passthrough key holding the flight's `YYYY-MM-DD` date.
pub const DATE_FIELD: &str = "date";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized flight period '{0}', expected 'all', 'upcoming' or a year")]
pub struct FlightPeriodParseError(pub String);

/// Which flights a statistics run looks at, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlightPeriod", into = "String")]
pub enum FlightPeriod {
    /// Every flight on or before the reference day.
    All,
    /// Flights after the reference day.
    Upcoming,
    /// Past flights in the given calendar year.
    Year(i32),
}

impl FlightPeriod {
    /// Undated flights match no period.
    pub fn contains(self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        let Some(date) = date else {
            return false;
        };
        match self {
            Self::All => date <= today,
            Self::Upcoming => date > today,
            Self::Year(year) => date <= today && date.year() == year,
        }
    }
}

impl FromStr for FlightPeriod {
    type Err = FlightPeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "upcoming" => Ok(Self::Upcoming),
            other => other
                .parse::<i32>()
                .map(Self::Year)
                .map_err(|_| FlightPeriodParseError(s.to_string())),
        }
    }
}

/// Periods arrive as strings from TOML but as bare integers from environment variables.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlightPeriod {
    Year(i32),
    Name(String),
}

impl TryFrom<RawFlightPeriod> for FlightPeriod {
    type Error = FlightPeriodParseError;

    fn try_from(value: RawFlightPeriod) -> Result<Self, Self::Error> {
        match value {
            RawFlightPeriod::Year(year) => Ok(Self::Year(year)),
            RawFlightPeriod::Name(name) => name.parse(),
        }
    }
}

impl Display for FlightPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

impl From<FlightPeriod> for String {
    fn from(value: FlightPeriod) -> Self {
        value.to_string()
    }
}

/// The flight's date, read from its passthrough fields. Missing, null or unparseable dates
/// give `None`, so such flights fall outside every period.
pub fn flight_date(record: &EnrichedFlightRecord) -> Option<NaiveDate> {
    let raw = record.flight.passthrough.get(DATE_FIELD)?.as_str()?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(
                flight = record.flight.flight_number,
                date = raw,
                error = %e,
                "ignoring unparseable flight date"
            );
            None
        }
    }
}

pub fn filter_by_period(
    flights: &[EnrichedFlightRecord],
    period: FlightPeriod,
    today: NaiveDate,
) -> Vec<EnrichedFlightRecord> {
    flights
        .iter()
        .filter(|f| period.contains(flight_date(f), today))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightLeg {
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

impl From<&EnrichedFlightRecord> for FlightLeg {
    fn from(record: &EnrichedFlightRecord) -> Self {
        Self {
            flight_number: record.flight.flight_number.clone(),
            from: record.flight.departure_code.clone(),
            to: record.flight.arrival_code.clone(),
            distance_km: record.distance_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightStats {
    pub flights: usize,
    pub airlines: usize,
    pub airports: usize,
    pub countries: usize,
    pub domestic_flights: usize,
    pub international_flights: usize,
    pub long_haul_flights: usize,
    pub west_bound_flights: usize,
    pub total_distance_km: f64,
    pub total_flight_time_hours: f64,
    pub shortest_flight: Option<FlightLeg>,
    pub longest_flight: Option<FlightLeg>,
}

impl FlightStats {
    pub fn compute(flights: &[EnrichedFlightRecord], long_haul_threshold_km: f64) -> Self {
        let mut airports = HashSet::new();
        let mut airlines = HashSet::new();
        let mut countries = HashSet::new();
        let mut shortest: Option<&EnrichedFlightRecord> = None;
        let mut longest: Option<&EnrichedFlightRecord> = None;

        for flight in flights {
            airports.insert(flight.flight.departure_code.as_str());
            airports.insert(flight.flight.arrival_code.as_str());
            if let Some(name) = &flight.airline_name {
                airlines.insert(name.as_str());
            }
            countries.extend(flight.departure_country.as_deref());
            countries.extend(flight.arrival_country.as_deref());

            // Ties keep the earlier flight
            if shortest.is_none_or(|s| flight.distance_km < s.distance_km) {
                shortest = Some(flight);
            }
            if longest.is_none_or(|l| flight.distance_km > l.distance_km) {
                longest = Some(flight);
            }
        }

        let international_flights = flights.iter().filter(|f| f.international).count();

        Self {
            flights: flights.len(),
            airlines: airlines.len(),
            airports: airports.len(),
            countries: countries.len(),
            domestic_flights: flights.len() - international_flights,
            international_flights,
            long_haul_flights: flights
                .iter()
                .filter(|f| f.distance_km >= long_haul_threshold_km)
                .count(),
            west_bound_flights: flights.iter().filter(|f| f.is_west_bound()).count(),
            total_distance_km: flights.iter().map(|f| f.distance_km).sum(),
            total_flight_time_hours: flights.iter().map(|f| f.flight_time_hours).sum(),
            shortest_flight: shortest.map(FlightLeg::from),
            longest_flight: longest.map(FlightLeg::from),
        }
    }
}

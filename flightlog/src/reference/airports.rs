use crate::error::ReferenceDataError;
use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportClassification {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    SeaplaneBase,
    BalloonPort,
    Heliport,
    Closed,
    #[serde(other)]
    Other,
}

impl AirportClassification {
    /// Closed fields and heliports never serve the flights in a log.
    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Closed | Self::Heliport)
    }
}

/// One row of the airport reference collection, as produced by the upstream merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    #[serde(rename = "iata", alias = "code")]
    pub code: String,
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    #[serde(rename = "iso_country", alias = "country_code", default)]
    pub country_code: Option<String>,
    #[serde(rename = "type", alias = "classification", default)]
    pub classification: Option<AirportClassification>,
    #[serde(rename = "airport_name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "iso_region", alias = "region", default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirportEntry {
    pub code: String,
    pub coordinate: Coordinate,
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

impl TryFrom<AirportRecord> for AirportEntry {
    type Error = ReferenceDataError;

    fn try_from(record: AirportRecord) -> Result<Self, Self::Error> {
        let coordinate = Coordinate::new(record.latitude, record.longitude).map_err(|source| {
            ReferenceDataError::InvalidCoordinate {
                code: record.code.clone(),
                source,
            }
        })?;
        Ok(Self {
            code: record.code,
            coordinate,
            country_code: record.country_code,
            name: record.name,
            city: record.city,
            region: record.region,
        })
    }
}

/// Read-only airport lookup keyed by exact (case-sensitive) airport code.
#[derive(Debug, Default)]
pub struct AirportDirectory {
    airports: HashMap<String, AirportEntry>,
}

impl AirportDirectory {
    /// Builds the directory, dropping closed airports and heliports. When a code appears
    /// more than once the last record wins, so custom entries chained after the main
    /// reference override it.
    pub fn build(
        records: impl IntoIterator<Item = AirportRecord>,
    ) -> Result<Self, ReferenceDataError> {
        let mut airports = HashMap::new();
        let mut excluded = 0usize;

        for record in records {
            if record.classification.is_some_and(AirportClassification::is_excluded) {
                trace!(code = record.code, classification = ?record.classification, "excluding airport");
                excluded += 1;
                continue;
            }

            let entry = AirportEntry::try_from(record)?;
            if let Some(previous) = airports.insert(entry.code.clone(), entry) {
                debug!(code = previous.code, "airport code supplied more than once, keeping the later entry");
            }
        }

        debug!(airports = airports.len(), excluded, "built airport directory");
        Ok(Self { airports })
    }

    pub fn get(&self, code: &str) -> Option<&AirportEntry> {
        self.airports.get(code)
    }

    pub fn coordinates_of(&self, code: &str) -> Option<Coordinate> {
        self.get(code).map(|airport| airport.coordinate)
    }

    pub fn country_of(&self, code: &str) -> Option<&str> {
        self.get(code).and_then(|airport| airport.country_code.as_deref())
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

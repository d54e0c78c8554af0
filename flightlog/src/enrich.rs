use crate::geo::{self, DEFAULT_CRUISE_SPEED_KMH};
use crate::reference::{
    AirlineDirectory, AirportDirectory, DERIVED_FIELDS, EnrichedFlightRecord, FlightRecord,
};
use std::fmt::{Display, Formatter};
use tracing::{info, instrument, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedEndpoint {
    Departure,
    Arrival,
    Both,
}

impl UnresolvedEndpoint {
    fn from_lookups(departure_found: bool, arrival_found: bool) -> Self {
        match (departure_found, arrival_found) {
            (false, true) => Self::Departure,
            (true, false) => Self::Arrival,
            _ => Self::Both,
        }
    }
}

impl Display for UnresolvedEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Departure => write!(f, "departure"),
            Self::Arrival => write!(f, "arrival"),
            Self::Both => write!(f, "departure and arrival"),
        }
    }
}

/// A flight left out of the output because one or both airports have no known coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedFlight {
    pub flight_number: String,
    pub departure_code: String,
    pub arrival_code: String,
    pub unresolved: UnresolvedEndpoint,
}

impl DroppedFlight {
    pub fn unresolved_codes(&self) -> Vec<&str> {
        match self.unresolved {
            UnresolvedEndpoint::Departure => vec![&self.departure_code],
            UnresolvedEndpoint::Arrival => vec![&self.arrival_code],
            UnresolvedEndpoint::Both => vec![&self.departure_code, &self.arrival_code],
        }
    }
}

impl Display for DroppedFlight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coordinates not found for flight {} from {} to {} (unresolved {} airport: {}), skipping this flight",
            self.flight_number,
            self.departure_code,
            self.arrival_code,
            self.unresolved,
            self.unresolved_codes().join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    Enriched(EnrichedFlightRecord),
    Dropped(DroppedFlight),
}

#[derive(Debug, Default)]
pub struct EnrichmentReport {
    /// Enriched flights in input order.
    pub flights: Vec<EnrichedFlightRecord>,
    pub dropped: Vec<DroppedFlight>,
}

impl EnrichmentReport {
    /// One human-readable line per dropped flight.
    pub fn diagnostics(&self) -> Vec<String> {
        self.dropped.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Default, PartialEq)]
struct AirlineBranding {
    name: Option<String>,
    primary_color: Option<String>,
    icon_path: Option<String>,
}

pub struct FlightEnricher<'a> {
    airports: &'a AirportDirectory,
    airlines: &'a AirlineDirectory,
    cruise_speed_kmh: f64,
}

impl<'a> FlightEnricher<'a> {
    pub fn new(airports: &'a AirportDirectory, airlines: &'a AirlineDirectory) -> Self {
        Self {
            airports,
            airlines,
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
        }
    }

    pub fn with_cruise_speed(mut self, cruise_speed_kmh: f64) -> Self {
        self.cruise_speed_kmh = cruise_speed_kmh;
        self
    }

    pub fn enrich(&self, mut flight: FlightRecord) -> EnrichmentOutcome {
        let departure = self.airports.coordinates_of(&flight.departure_code);
        let arrival = self.airports.coordinates_of(&flight.arrival_code);

        // Distance and time are both `None` unless both endpoints resolved.
        let distance_km = geo::distance(departure, arrival);
        let flight_time_hours = geo::estimate_time(distance_km, self.cruise_speed_kmh);

        let (
            Some(departure_coordinates),
            Some(arrival_coordinates),
            Some(distance_km),
            Some(flight_time_hours),
        ) = (departure, arrival, distance_km, flight_time_hours)
        else {
            return EnrichmentOutcome::Dropped(DroppedFlight {
                flight_number: flight.flight_number,
                departure_code: flight.departure_code,
                arrival_code: flight.arrival_code,
                unresolved: UnresolvedEndpoint::from_lookups(departure.is_some(), arrival.is_some()),
            });
        };

        let departure_country = self
            .airports
            .country_of(&flight.departure_code)
            .map(str::to_owned);
        let arrival_country = self
            .airports
            .country_of(&flight.arrival_code)
            .map(str::to_owned);

        // An unknown country never equals a known one, so such flights count as international.
        let international = departure_country != arrival_country;

        let branding = self.resolve_branding(flight.airline_code.as_deref());

        for key in DERIVED_FIELDS {
            if flight.passthrough.remove(key).is_some() {
                trace!(flight = flight.flight_number, key, "replacing input value of derived field");
            }
        }

        trace!(
            flight = flight.flight_number,
            distance_km,
            international,
            "enriched flight"
        );

        EnrichmentOutcome::Enriched(EnrichedFlightRecord {
            flight,
            departure_coordinates,
            arrival_coordinates,
            distance_km,
            flight_time_hours,
            departure_country,
            arrival_country,
            international,
            airline_name: branding.name,
            airline_primary_color: branding.primary_color,
            airline_icon_path: branding.icon_path,
        })
    }

    #[instrument(skip_all)]
    pub fn enrich_all(&self, flights: impl IntoIterator<Item = FlightRecord>) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();

        for flight in flights {
            match self.enrich(flight) {
                EnrichmentOutcome::Enriched(record) => report.flights.push(record),
                EnrichmentOutcome::Dropped(dropped) => {
                    warn!(
                        flight = dropped.flight_number,
                        from = dropped.departure_code,
                        to = dropped.arrival_code,
                        unresolved = ?dropped.unresolved_codes(),
                        "{dropped}"
                    );
                    report.dropped.push(dropped);
                }
            }
        }

        info!(
            enriched = report.flights.len(),
            dropped = report.dropped.len(),
            "finished enriching flights"
        );
        report
    }

    fn resolve_branding(&self, airline_code: Option<&str>) -> AirlineBranding {
        let Some(airline) = airline_code.and_then(|code| self.airlines.lookup(code)) else {
            return AirlineBranding::default();
        };
        AirlineBranding {
            name: Some(airline.display_name.clone()),
            primary_color: airline.branding.primary_color.clone(),
            icon_path: airline.icon_path(),
        }
    }
}

pub mod airlines;
pub mod airports;
pub mod flights;

pub use airlines::{AirlineDirectory, AirlineEntry, Branding};
pub use airports::{AirportClassification, AirportDirectory, AirportEntry, AirportRecord};
pub use flights::{DERIVED_FIELDS, EnrichedFlightRecord, FlightRecord};

#![warn(clippy::pedantic)]

mod error;
mod logging;

use crate::error::EnricherError;
use crate::logging::log_stats;
use chrono::Local;
use flightlog::enrich::FlightEnricher;
use flightlog::error::InitializationError;
use flightlog::io::{load_airlines, load_airports, load_flights, write_json};
use flightlog::reference::{AirlineDirectory, AirportDirectory};
use flightlog::stats::{FlightStats, filter_by_period};
use flightlog::{Config, load_config};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), EnricherError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(InitializationError::from)?;

    let config = load_config().map_err(InitializationError::from)?;
    info!(config = ?config, "config loaded");

    let res = run(&config);
    match res {
        Ok(()) => info!("flight enrichment was successful"),
        Err(ref e) => error!(error = ?e, "failed to enrich flights"),
    }

    res
}

fn run(config: &Config) -> Result<(), EnricherError> {
    // All reference data is loaded up front; any failure aborts before enrichment starts.
    let mut airport_records = load_airports(&config.input.airports_path)?;
    if let Some(custom_path) = &config.input.custom_airports_path {
        airport_records.extend(load_airports(custom_path)?);
    }
    let airports = AirportDirectory::build(airport_records)?;
    let airlines = AirlineDirectory::build(load_airlines(&config.input.airlines_path)?);
    let flights = load_flights(&config.input.flights_path)?;
    info!(
        airports = airports.len(),
        airlines = airlines.len(),
        flights = flights.len(),
        "reference data loaded"
    );

    let enricher = FlightEnricher::new(&airports, &airlines)
        .with_cruise_speed(config.enrichment.cruise_speed_kmh);
    let report = enricher.enrich_all(flights);

    write_json(&config.output.enriched_path, &report.flights)?;
    info!(
        path = %config.output.enriched_path.display(),
        flights = report.flights.len(),
        "wrote enriched flights"
    );

    let stats = match config.stats.period {
        Some(period) => {
            let today = Local::now().date_naive();
            debug!(%period, %today, "filtering flights for statistics");
            let selected = filter_by_period(&report.flights, period, today);
            FlightStats::compute(&selected, config.stats.long_haul_threshold_km)
        }
        None => FlightStats::compute(&report.flights, config.stats.long_haul_threshold_km),
    };
    log_stats(&stats);

    if let Some(stats_path) = &config.output.stats_path {
        write_json(stats_path, &stats)?;
        info!(path = %stats_path.display(), "wrote flight statistics");
    }

    Ok(())
}

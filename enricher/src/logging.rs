use flightlog::stats::{FlightLeg, FlightStats};
use tracing::{Level, debug, event_enabled, info};

fn describe_leg(leg: &FlightLeg) -> String {
    format!(
        "{} {}-{} ({:.0} km)",
        leg.flight_number, leg.from, leg.to, leg.distance_km
    )
}

pub fn log_stats(stats: &FlightStats) {
    info!(
        flights = stats.flights,
        total_distance_km = stats.total_distance_km.round(),
        total_flight_time_hours = stats.total_flight_time_hours,
        international = stats.international_flights,
        domestic = stats.domestic_flights,
        "flight statistics"
    );

    if !event_enabled!(Level::DEBUG) {
        return;
    }

    debug!(
        airlines = stats.airlines,
        airports = stats.airports,
        countries = stats.countries,
        long_haul = stats.long_haul_flights,
        west_bound = stats.west_bound_flights,
        "flight statistics details"
    );

    match (&stats.shortest_flight, &stats.longest_flight) {
        (Some(shortest), Some(longest)) => {
            let shortest = describe_leg(shortest);
            let longest = describe_leg(longest);
            debug!(shortest, longest, "flight distance extremes");
        }
        _ => debug!("no flights to compare distances"),
    }
}

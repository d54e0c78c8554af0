pub mod enrich;
pub mod geo;
pub mod io;
pub mod reference;
pub mod stats;

use crate::error::ConfigError;
use crate::geo::DEFAULT_CRUISE_SPEED_KMH;
use crate::stats::{DEFAULT_LONG_HAUL_THRESHOLD_KM, FlightPeriod};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_VAR_PREFIX: &str = "FLIGHTLOG__";
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub airports_path: PathBuf,
    pub airlines_path: PathBuf,
    pub flights_path: PathBuf,
    /// Extra airports applied after `airports_path`, overriding entries with the same code.
    pub custom_airports_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub enriched_path: PathBuf,
    pub stats_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub cruise_speed_kmh: f64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StatsConfig {
    pub long_haul_threshold_km: f64,
    /// When unset, statistics cover every enriched flight regardless of date.
    pub period: Option<FlightPeriod>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            long_haul_threshold_km: DEFAULT_LONG_HAUL_THRESHOLD_KM,
            period: None,
        }
    }
}

impl Config {
    fn validate(self) -> Result<Self, ConfigError> {
        let speed = self.enrichment.cruise_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Invalid {
                setting: "enrichment.cruise_speed_kmh",
                reason: format!("must be a positive number, got {speed}"),
            });
        }

        let threshold = self.stats.long_haul_threshold_km;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid {
                setting: "stats.long_haul_threshold_km",
                reason: format!("must be a non-negative number, got {threshold}"),
            });
        }

        Ok(self)
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    Figment::new()
        .merge(Toml::file(SETTINGS_FILE))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?
        .validate()
}

pub mod error {
    use crate::geo::CoordinateError;
    use std::path::PathBuf;
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
        #[error("invalid setting {setting}: {reason}")]
        Invalid {
            setting: &'static str,
            reason: String,
        },
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
    }

    #[derive(Debug, Error)]
    pub enum ReferenceDataError {
        #[error("failed to read reference data from '{}': {source}", .path.display())]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },
        #[error("failed to parse reference data from '{}': {source}", .path.display())]
        Parse {
            path: PathBuf,
            source: serde_json::Error,
        },
        #[error("airport {code} has an invalid coordinate: {source}")]
        InvalidCoordinate {
            code: String,
            source: CoordinateError,
        },
    }

    #[derive(Debug, Error)]
    pub enum OutputError {
        #[error("failed to write output to '{}': {source}", .path.display())]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },
        #[error("failed to serialize output for '{}': {source}", .path.display())]
        Serialize {
            path: PathBuf,
            source: serde_json::Error,
        },
    }
}

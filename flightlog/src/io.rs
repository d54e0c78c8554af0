use crate::error::{OutputError, ReferenceDataError};
use crate::reference::{AirlineEntry, AirportRecord, FlightRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReferenceDataError> {
    let file = File::open(path).map_err(|source| ReferenceDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        ReferenceDataError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), len = records.len(), "loaded reference data");
    Ok(records)
}

pub fn load_airports(path: &Path) -> Result<Vec<AirportRecord>, ReferenceDataError> {
    read_json(path)
}

pub fn load_airlines(path: &Path) -> Result<Vec<AirlineEntry>, ReferenceDataError> {
    read_json(path)
}

pub fn load_flights(path: &Path) -> Result<Vec<FlightRecord>, ReferenceDataError> {
    read_json(path)
}

/// Writes `value` as pretty-printed JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| OutputError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)?;

    debug!(path = %path.display(), "wrote output");
    Ok(())
}

use flightlog::error::{InitializationError, OutputError, ReferenceDataError};

#[derive(Debug, thiserror::Error)]
pub enum EnricherError {
    #[error("failed to initialize flight enricher: {0}")]
    Initialization(#[from] InitializationError),
    #[error("failed to load reference data: {0}")]
    ReferenceData(#[from] ReferenceDataError),
    #[error("failed to write enriched flights: {0}")]
    Output(#[from] OutputError),
}

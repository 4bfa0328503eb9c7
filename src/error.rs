use crate::hydroshare::error::{DecodeError, FetchError};
use crate::validation::error::ValidationError;
use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to build the time series frame")]
    DataFrame(#[from] PolarsError),
}

/// The raw payload could not be written to the requested path.
///
/// Not fatal: the series is still returned, with this attached.
#[derive(Debug, Error)]
#[error("Failed to save the data as a WaterML file at '{path}'")]
pub struct PersistenceWarning {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

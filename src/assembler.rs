//! Turns a decoded payload into an [`NwmSeries`] and optionally keeps the raw
//! WaterML on disk.

use crate::error::PersistenceWarning;
use crate::hydroshare::decoder::DecodedSeries;
use crate::types::request::NwmRequest;
use crate::types::series::{records_to_frame, NwmSeries};
use polars::prelude::PolarsResult;
use std::path::Path;

/// Builds the result for `request` from its decoded payload.
///
/// The metadata `archive` field is filled from the request.
pub fn assemble(request: NwmRequest, decoded: DecodedSeries) -> PolarsResult<NwmSeries> {
    let DecodedSeries {
        records,
        mut metadata,
    } = decoded;
    metadata.archive = request.archive().code().to_string();

    Ok(NwmSeries {
        frame: records_to_frame(&records)?,
        metadata,
        request,
        persistence_warning: None,
    })
}

/// Writes the payload to `path` byte for byte, replacing any existing file.
pub async fn persist_payload(path: &Path, raw: &str) -> Result<(), PersistenceWarning> {
    tokio::fs::write(path, raw)
        .await
        .map_err(|source| PersistenceWarning {
            path: path.to_path_buf(),
            source,
        })
}

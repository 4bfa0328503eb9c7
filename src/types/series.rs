//! Contains `NwmSeries`, the time-indexed result of a HydroShare request.

use crate::error::PersistenceWarning;
use crate::types::request::NwmRequest;
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::Serialize;

/// One timestamped value decoded from a WaterML payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValue {
    /// UTC timestamp of the value.
    pub time: NaiveDateTime,
    pub value: f64,
}

/// Descriptive fields of a time series, taken from the WaterML payload.
///
/// `archive` is not part of the payload; it is filled in from the request
/// that produced the series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesMetadata {
    pub site_name: String,
    pub variable_name: String,
    pub variable_unit_name: String,
    pub variable_unit: String,
    pub value_type: String,
    pub no_data_value: Option<f64>,
    pub method_description: Option<String>,
    pub quality_control_level: Option<String>,
    pub archive: String,
}

/// The result of [`crate::NwmHs::get_data`]: a time series with its metadata
/// and the request it answers.
///
/// The series is held in a Polars `DataFrame` with two columns, `time`
/// (`Datetime`, UTC) and `value` (`Float64`), ordered as in the payload.
#[derive(Debug)]
pub struct NwmSeries {
    /// The `time`/`value` frame.
    pub frame: DataFrame,
    pub metadata: SeriesMetadata,
    /// The validated request this series was fetched with.
    pub request: NwmRequest,
    /// Set when the raw payload could not be written to the requested output path.
    pub persistence_warning: Option<PersistenceWarning>,
}

impl NwmSeries {
    /// Number of timestamps in the series.
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The `value` column as plain floats, in time order.
    pub fn values(&self) -> PolarsResult<Vec<Option<f64>>> {
        Ok(self.frame.column("value")?.f64()?.into_iter().collect())
    }

    /// Rows whose `time` lies between `start` and `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the lazy filter fails to execute.
    pub fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> PolarsResult<DataFrame> {
        self.frame
            .clone()
            .lazy()
            .filter(
                col("time")
                    .gt_eq(lit(start))
                    .and(col("time").lt_eq(lit(end))),
            )
            .collect()
    }
}

/// Builds the `time`/`value` frame for a list of records.
pub(crate) fn records_to_frame(records: &[TimeValue]) -> PolarsResult<DataFrame> {
    let times: Vec<NaiveDateTime> = records.iter().map(|record| record.time).collect();
    let values: Vec<f64> = records.iter().map(|record| record.value).collect();
    DataFrame::new(vec![
        Column::new("time".into(), times),
        Column::new("value".into(), values),
    ])
}

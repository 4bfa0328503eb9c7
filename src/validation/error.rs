use crate::types::archive::{Archive, DateWindow};
use crate::types::configuration::Configuration;
use crate::types::geometry::Geometry;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // Covers archive, config, geom and variable
    #[error("Please set \"{field}\" with the following options: {}. Got \"{value}\".", .options.join(", "))]
    InvalidEnumeration {
        field: &'static str,
        value: String,
        options: Vec<&'static str>,
    },

    #[error("Incorrect date format \"{value}\", should be YYYY-MM-DD")]
    InvalidDateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    DateOutOfRange(#[from] DateRangeViolation),

    #[error("Incorrect {field} {value} for {configuration}, value should be {allowed}")]
    InvalidTimeField {
        field: &'static str,
        value: i64,
        configuration: Configuration,
        allowed: &'static str,
    },

    #[error(
        "Please set \"comid\" as a list of one integer COMID (e.g. [11359107]) for channel_rt and reservoir \
         or two integer COMIDs (e.g. [1636, 2036]) for land and forcing. Got [{given}] for {geometry}."
    )]
    InvalidIdentifier { geometry: Geometry, given: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeViolation {
    #[error("Incorrect start date {start}, should be between {window} for {archive} archive")]
    OutsideArchiveWindow {
        start: NaiveDate,
        archive: Archive,
        window: DateWindow,
    },

    #[error("Incorrect end date {end}, should be later than start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
}

//! The raw request a caller fills in and the normalized request validation produces.

use crate::types::archive::Archive;
use crate::types::configuration::Configuration;
use crate::types::geometry::{Geometry, Variable};
use crate::types::identifier::{Location, RawIdentifier};
use chrono::NaiveDate;

/// Unvalidated request fields, as loosely typed as callers provide them.
///
/// `Default` gives the same request the HydroShare NWM tool issues when no
/// argument is changed: Harvey short range streamflow for reach 5781915.
///
/// # Examples
///
/// ```
/// use nwm::RawRequest;
///
/// let raw = RawRequest {
///     configuration: "medium_range".to_string(),
///     initiation_hour: 6,
///     ..Default::default()
/// };
/// assert_eq!(raw.archive, "harvey");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub archive: String,
    pub configuration: String,
    pub geometry: String,
    pub variable: String,
    pub identifiers: Vec<RawIdentifier>,
    pub initiation_hour: i64,
    pub time_lag: i64,
    pub start_date: String,
    pub end_date: String,
}

impl Default for RawRequest {
    fn default() -> Self {
        Self {
            archive: "harvey".to_string(),
            configuration: "short_range".to_string(),
            geometry: "channel_rt".to_string(),
            variable: "streamflow".to_string(),
            identifiers: vec![RawIdentifier::Integer(5781915)],
            initiation_hour: 0,
            time_lag: 0,
            start_date: "2017-08-23".to_string(),
            end_date: "2017-09-06".to_string(),
        }
    }
}

/// The time fields of a request, which depend on the configuration.
///
/// Each variant holds only the fields its configuration uses, so a short range
/// request cannot carry an end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastTiming {
    AnalysisAssim {
        end_date: NaiveDate,
    },
    ShortRange {
        /// Hour of day, 0 to 23.
        initiation_hour: u8,
    },
    MediumRange {
        /// One of 0, 6, 12, 18.
        initiation_hour: u8,
    },
    LongRange {
        /// The validated lag, one of 0, 6, 12.
        time_lag: u8,
        /// Hour written into the `lag` tag.
        ///
        /// Taken from the initiation hour, not from `time_lag`, and not
        /// range checked.
        tag_hour: i64,
    },
}

impl ForecastTiming {
    pub fn configuration(&self) -> Configuration {
        match self {
            ForecastTiming::AnalysisAssim { .. } => Configuration::AnalysisAssim,
            ForecastTiming::ShortRange { .. } => Configuration::ShortRange,
            ForecastTiming::MediumRange { .. } => Configuration::MediumRange,
            ForecastTiming::LongRange { .. } => Configuration::LongRange,
        }
    }
}

/// A fully validated request, ready to be sent to HydroShare.
///
/// Built by [`crate::validate`]; there is no public constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NwmRequest {
    pub(crate) archive: Archive,
    pub(crate) timing: ForecastTiming,
    pub(crate) start_date: NaiveDate,
    pub(crate) geometry: Geometry,
    pub(crate) variable: Variable,
    pub(crate) location: Location,
}

impl NwmRequest {
    pub fn archive(&self) -> Archive {
        self.archive
    }

    pub fn configuration(&self) -> Configuration {
        self.timing.configuration()
    }

    pub fn timing(&self) -> ForecastTiming {
        self.timing
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The end date, only present for analysis and assimilation.
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self.timing {
            ForecastTiming::AnalysisAssim { end_date } => Some(end_date),
            _ => None,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Renders the request as the `GetWaterML` query parameters.
    ///
    /// Keys appear in a fixed order and only the keys relevant to the
    /// configuration are present: `endDate` for analysis and assimilation,
    /// `time` for short and medium range, `lag` for long range.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("archive", self.archive.code().to_string()),
            ("config", self.configuration().code().to_string()),
            ("startDate", self.start_date.format("%Y-%m-%d").to_string()),
        ];
        match self.timing {
            ForecastTiming::AnalysisAssim { end_date } => {
                query.push(("endDate", end_date.format("%Y-%m-%d").to_string()));
            }
            ForecastTiming::ShortRange { initiation_hour }
            | ForecastTiming::MediumRange { initiation_hour } => {
                query.push(("time", format!("{:02}", initiation_hour)));
            }
            ForecastTiming::LongRange { tag_hour, .. } => {
                query.push(("lag", format!("t{:02}z", tag_hour)));
            }
        }
        query.push(("geom", self.geometry.code().to_string()));
        query.push(("variable", self.variable.code.to_string()));
        query.push(("COMID", self.location.wire_value()));
        query
    }
}

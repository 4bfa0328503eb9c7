//! Turns a [`RawRequest`] into a [`NwmRequest`], checking every field against
//! the [`Catalog`] in a fixed order and stopping at the first failure.

use crate::catalog::Catalog;
use crate::types::archive::Archive;
use crate::types::configuration::Configuration;
use crate::types::geometry::{Geometry, Variable};
use crate::types::identifier::{Location, RawIdentifier};
use crate::types::request::{ForecastTiming, NwmRequest, RawRequest};
use crate::validation::error::{DateRangeViolation, ValidationError};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MEDIUM_RANGE_HOURS: [u8; 4] = [0, 6, 12, 18];
const LONG_RANGE_LAGS: [u8; 3] = [0, 6, 12];

/// Validates raw request fields and normalizes them into a [`NwmRequest`].
///
/// Checks run in this order: archive, configuration, date format (both
/// dates, whatever the configuration), start date against the archive
/// window, end date ordering (analysis and assimilation only), the
/// configuration's time field, geometry, variable, identifiers.
///
/// Fields that the configuration does not use are dropped, so the resulting
/// request never carries an end date for a forecast or an initiation hour for
/// analysis and assimilation.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first failing check. Enumeration
/// errors list the valid options.
///
/// # Examples
///
/// ```
/// use nwm::{validate, Catalog, RawRequest};
///
/// let request = validate(&Catalog::default(), &RawRequest::default()).unwrap();
/// let query = request.to_query();
/// assert!(query.contains(&("COMID", "5781915".to_string())));
/// assert!(query.contains(&("time", "00".to_string())));
/// ```
pub fn validate(catalog: &Catalog, raw: &RawRequest) -> Result<NwmRequest, ValidationError> {
    let archive = Archive::from_code(&raw.archive).ok_or_else(|| {
        invalid_enumeration("archive", &raw.archive, Archive::ALL.map(|a| a.code()))
    })?;

    let configuration = Configuration::from_code(&raw.configuration).ok_or_else(|| {
        invalid_enumeration(
            "config",
            &raw.configuration,
            Configuration::ALL.map(|c| c.code()),
        )
    })?;

    let start_date = parse_date(&raw.start_date)?;
    let end_date = parse_date(&raw.end_date)?;

    let window = catalog.date_window(archive);
    if !window.contains(start_date) {
        return Err(DateRangeViolation::OutsideArchiveWindow {
            start: start_date,
            archive,
            window,
        }
        .into());
    }

    let timing = forecast_timing(configuration, raw, start_date, end_date)?;

    let geometry = Geometry::from_code(&raw.geometry).ok_or_else(|| {
        invalid_enumeration("geom", &raw.geometry, Geometry::ALL.map(|g| g.code()))
    })?;
    let variable = resolve_variable(catalog, geometry, &raw.variable)?;
    let location = resolve_location(geometry, &raw.identifiers)?;

    Ok(NwmRequest {
        archive,
        timing,
        start_date,
        geometry,
        variable,
        location,
    })
}

fn invalid_enumeration<const N: usize>(
    field: &'static str,
    value: &str,
    options: [&'static str; N],
) -> ValidationError {
    ValidationError::InvalidEnumeration {
        field,
        value: value.to_string(),
        options: options.to_vec(),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| {
        ValidationError::InvalidDateFormat {
            value: value.to_string(),
            source,
        }
    })
}

fn forecast_timing(
    configuration: Configuration,
    raw: &RawRequest,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<ForecastTiming, ValidationError> {
    let invalid = |field, value, allowed| ValidationError::InvalidTimeField {
        field,
        value,
        configuration,
        allowed,
    };

    match configuration {
        Configuration::AnalysisAssim => {
            if start_date < end_date {
                Ok(ForecastTiming::AnalysisAssim { end_date })
            } else {
                Err(DateRangeViolation::EndNotAfterStart {
                    start: start_date,
                    end: end_date,
                }
                .into())
            }
        }
        Configuration::ShortRange => u8::try_from(raw.initiation_hour)
            .ok()
            .filter(|hour| *hour <= 23)
            .map(|initiation_hour| ForecastTiming::ShortRange { initiation_hour })
            .ok_or_else(|| invalid("init_time", raw.initiation_hour, "between 0 and 23")),
        Configuration::MediumRange => u8::try_from(raw.initiation_hour)
            .ok()
            .filter(|hour| MEDIUM_RANGE_HOURS.contains(hour))
            .map(|initiation_hour| ForecastTiming::MediumRange { initiation_hour })
            .ok_or_else(|| invalid("init_time", raw.initiation_hour, "0, 6, 12, or 18")),
        // The tag is built from the initiation hour, see `ForecastTiming::LongRange`.
        Configuration::LongRange => u8::try_from(raw.time_lag)
            .ok()
            .filter(|lag| LONG_RANGE_LAGS.contains(lag))
            .map(|time_lag| ForecastTiming::LongRange {
                time_lag,
                tag_hour: raw.initiation_hour,
            })
            .ok_or_else(|| invalid("time_lag", raw.time_lag, "0, 6, or 12")),
    }
}

fn resolve_variable(
    catalog: &Catalog,
    geometry: Geometry,
    code: &str,
) -> Result<Variable, ValidationError> {
    geometry
        .variable(code)
        .ok_or_else(|| ValidationError::InvalidEnumeration {
            field: "variable",
            value: code.to_string(),
            options: catalog
                .valid_variables(geometry)
                .iter()
                .map(|variable| variable.code)
                .collect(),
        })
}

fn resolve_location(
    geometry: Geometry,
    identifiers: &[RawIdentifier],
) -> Result<Location, ValidationError> {
    let integers: Option<Vec<i64>> = identifiers.iter().map(RawIdentifier::as_integer).collect();

    match (geometry.identifier_arity(), integers.as_deref()) {
        (1, Some(&[comid])) => Ok(Location::Reach(comid)),
        (2, Some(&[x, y])) => Ok(Location::Grid(x, y)),
        _ => Err(ValidationError::InvalidIdentifier {
            geometry,
            given: identifiers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

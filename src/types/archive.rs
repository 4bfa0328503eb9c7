//! Defines the HydroShare NWM archives and the date windows they cover.

use chrono::NaiveDate;
use std::fmt;

/// A collection of National Water Model output hosted by the HydroShare NWM app.
///
/// The storm archives cover a fixed historical period. The rolling archive
/// always ends today and starts a configurable number of days earlier, see
/// [`crate::Catalog::date_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archive {
    /// The most recent forecasts, relative to the current date.
    Rolling,
    /// Hurricane Florence (2018).
    Florence,
    /// Hurricane Harvey (2017).
    Harvey,
    /// Hurricane Irma (2017).
    Irma,
}

impl Archive {
    /// Every archive, in the order the API documents them.
    pub const ALL: [Archive; 4] = [
        Archive::Rolling,
        Archive::Florence,
        Archive::Harvey,
        Archive::Irma,
    ];

    /// The value sent as the `archive` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Archive::Rolling => "rolling",
            Archive::Florence => "florence",
            Archive::Harvey => "harvey",
            Archive::Irma => "irma",
        }
    }

    /// The human readable name shown by the HydroShare app.
    pub fn display_name(&self) -> &'static str {
        match self {
            Archive::Rolling => "40-Day Rolling Window",
            Archive::Florence => "Florence",
            Archive::Harvey => "Harvey",
            Archive::Irma => "Irma",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|archive| archive.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|archive| archive.display_name() == name)
    }

    /// The window of a storm archive. `None` for [`Archive::Rolling`], whose
    /// window depends on the current date.
    pub(crate) fn fixed_window(&self) -> Option<DateWindow> {
        let (start, end) = match self {
            Archive::Rolling => return None,
            Archive::Florence => ((2018, 9, 1), (2019, 10, 19)),
            Archive::Harvey => ((2017, 8, 18), (2017, 9, 6)),
            Archive::Irma => ((2017, 8, 29), (2017, 9, 15)),
        };
        Some(DateWindow {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
        })
    }
}

impl fmt::Display for Archive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An inclusive range of dates for which an archive holds data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    /// First available date (inclusive).
    pub start: NaiveDate,
    /// Last available date (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` when `date` lies in the window, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

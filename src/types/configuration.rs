//! Defines the NWM model configurations served by HydroShare.

use std::fmt;

/// The forecast or analysis mode of a National Water Model run.
///
/// Each configuration needs different time parameters: short and medium range
/// take an initiation hour, long range takes a time lag, and analysis and
/// assimilation takes an end date instead.
///
/// # Examples
///
/// ```
/// use nwm::Configuration;
///
/// let config = Configuration::from_code("short_range").unwrap();
/// assert_eq!(config, Configuration::ShortRange);
/// assert_eq!(config.display_name(), "Short Range");
/// assert_eq!(config.to_string(), "short_range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// Analysis and assimilation, a "current conditions" reanalysis over a date range.
    AnalysisAssim,
    /// 18-hour forecast, issued every hour.
    ShortRange,
    /// 10-day forecast, issued every six hours.
    MediumRange,
    /// 30-day ensemble forecast, identified by its time lag member.
    LongRange,
}

impl Configuration {
    pub const ALL: [Configuration; 4] = [
        Configuration::AnalysisAssim,
        Configuration::ShortRange,
        Configuration::MediumRange,
        Configuration::LongRange,
    ];

    /// The value sent as the `config` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Configuration::AnalysisAssim => "analysis_assim",
            Configuration::ShortRange => "short_range",
            Configuration::MediumRange => "medium_range",
            Configuration::LongRange => "long_range",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Configuration::AnalysisAssim => "Analysis and Assimilation",
            Configuration::ShortRange => "Short Range",
            Configuration::MediumRange => "Medium Range",
            Configuration::LongRange => "Long Range",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|config| config.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|config| config.display_name() == name)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error(
        "HTTP request failed for {url} with status {status}. Requested data is not available, \
         please check available data options and corresponding parameter settings at https://nwm.readthedocs.io/"
    )]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed WaterML at byte {position}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("WaterML response contains no time series")]
    NoTimeSeries,

    #[error("WaterML value has no dateTime attribute")]
    MissingTimestamp,

    #[error("Invalid timestamp \"{0}\" in WaterML value")]
    InvalidTimestamp(String),

    #[error("Invalid value \"{value}\" at {time}")]
    InvalidValue { time: NaiveDateTime, value: String },
}

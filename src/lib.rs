mod assembler;
mod catalog;
mod config;
mod error;
mod hydroshare;
mod nwm;
mod types;
mod validation;

pub use error::{NwmError, PersistenceWarning};
pub use nwm::*;

pub use assembler::{assemble, persist_payload};
pub use catalog::clock::{Clock, FixedClock, SystemClock};
pub use catalog::{Catalog, LEGACY_ROLLING_LOOKBACK_DAYS, ROLLING_LOOKBACK_DAYS};
pub use config::{NwmHsConfig, DEFAULT_ENDPOINT, DEFAULT_TOKEN};

pub use types::archive::{Archive, DateWindow};
pub use types::configuration::Configuration;
pub use types::geometry::{Geometry, Variable};
pub use types::identifier::{Location, RawIdentifier};
pub use types::request::{ForecastTiming, NwmRequest, RawRequest};
pub use types::series::{NwmSeries, SeriesMetadata, TimeValue};

pub use validation::error::{DateRangeViolation, ValidationError};
pub use validation::validator::validate;

pub use hydroshare::decoder::{decode_waterml, DecodedSeries};
pub use hydroshare::error::{DecodeError, FetchError};
pub use hydroshare::transport::{HydroShareTransport, RawResponse, Transport};

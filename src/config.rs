use crate::catalog::ROLLING_LOOKBACK_DAYS;
use bon::Builder;
use std::time::Duration;

/// The `GetWaterML` endpoint of the HydroShare NWM forecasts app.
pub const DEFAULT_ENDPOINT: &str = "https://hs-apps.hydroshare.org/apps/nwm-forecasts/api/GetWaterML/";

/// The public API token published for the NWM forecasts app.
pub const DEFAULT_TOKEN: &str = "2b2c17f99447ad2497c8090569caac530e1ce13a";

/// Settings for talking to HydroShare.
///
/// # Examples
///
/// ```
/// use nwm::NwmHsConfig;
/// use std::time::Duration;
///
/// let config = NwmHsConfig::builder()
///     .token("my-token")
///     .timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.rolling_lookback_days, 24);
/// assert_eq!(config.token, "my-token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct NwmHsConfig {
    #[builder(into, default = DEFAULT_ENDPOINT.to_string())]
    pub endpoint: String,

    /// Sent as `Authorization: Token <token>`.
    #[builder(into, default = DEFAULT_TOKEN.to_string())]
    pub token: String,

    /// How many days back from today the rolling archive reaches.
    #[builder(default = ROLLING_LOOKBACK_DAYS)]
    pub rolling_lookback_days: u32,

    /// Total request timeout. No timeout when unset.
    pub timeout: Option<Duration>,
}

impl Default for NwmHsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

//! The main entry point: validate a request, fetch it from HydroShare and
//! turn the WaterML answer into an [`NwmSeries`].

use crate::assembler::{assemble, persist_payload};
use crate::catalog::clock::SystemClock;
use crate::catalog::Catalog;
use crate::config::NwmHsConfig;
use crate::error::NwmError;
use crate::hydroshare::decoder::decode_waterml;
use crate::hydroshare::error::FetchError;
use crate::hydroshare::transport::{HydroShareTransport, Transport};
use crate::types::identifier::RawIdentifier;
use crate::types::request::RawRequest;
use crate::types::series::NwmSeries;
use crate::validation::validator::validate;
use bon::bon;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

/// Client for the HydroShare NWM forecasts API.
///
/// # Examples
///
/// ```rust,no_run
/// # use nwm::{NwmHs, NwmError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), NwmError> {
/// let client = NwmHs::new()?;
///
/// // Harvey short range streamflow for reach 5781915, issued at 00z.
/// let series = client.get_data().call().await?;
/// println!("{} values of {}", series.len(), series.metadata.variable_name);
/// # Ok(())
/// # }
/// ```
pub struct NwmHs {
    catalog: Catalog,
    transport: Arc<dyn Transport>,
}

#[bon]
impl NwmHs {
    /// Creates a client with [`NwmHsConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`NwmError::Fetch`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, NwmError> {
        Self::with_config(NwmHsConfig::default())
    }

    /// Creates a client talking to `config.endpoint` with `config.token`.
    pub fn with_config(config: NwmHsConfig) -> Result<Self, NwmError> {
        let transport = HydroShareTransport::new(&config)?;
        let catalog = Catalog::new(Arc::new(SystemClock), config.rolling_lookback_days);
        Ok(Self::with_transport(catalog, Arc::new(transport)))
    }

    /// Creates a client from an existing catalog and transport.
    pub fn with_transport(catalog: Catalog, transport: Arc<dyn Transport>) -> Self {
        Self { catalog, transport }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fetches one NWM time series.
    ///
    /// Every argument is optional. Unset arguments take the values of
    /// [`RawRequest::default`], which describe the Harvey short range
    /// streamflow forecast for reach `5781915` starting 2017-08-23.
    ///
    /// * `.archive(&str)`: `rolling`, `florence`, `harvey` or `irma`.
    /// * `.config(&str)`: `analysis_assim`, `short_range`, `medium_range` or `long_range`.
    /// * `.geom(&str)`: `channel_rt`, `land`, `reservoir` or `forcing`.
    /// * `.variable(&str)`: a variable of the chosen geometry.
    /// * `.comid(Vec<RawIdentifier>)`: one COMID for channel and reservoir, two for land and forcing.
    /// * `.init_time(i64)`: forecast initiation hour for short and medium range.
    /// * `.time_lag(i64)`: lag hour for long range.
    /// * `.start_date(&str)` / `.end_date(&str)`: `YYYY-MM-DD`. The end date is only sent for analysis and assimilation.
    /// * `.output(&Path)`: also write the raw WaterML payload here.
    ///
    /// The request is validated before anything is sent. A failure to write
    /// `output` does not fail the call; it is logged and stored in
    /// [`NwmSeries::persistence_warning`].
    ///
    /// # Errors
    ///
    /// * [`NwmError::Validation`] when a parameter is rejected.
    /// * [`NwmError::Fetch`] when the request fails or HydroShare answers with a non-success status.
    /// * [`NwmError::Decode`] when the answer is not usable WaterML.
    /// * [`NwmError::DataFrame`] when the frame cannot be built.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub async fn get_data(
        &self,
        archive: Option<&str>,
        config: Option<&str>,
        geom: Option<&str>,
        variable: Option<&str>,
        comid: Option<Vec<RawIdentifier>>,
        init_time: Option<i64>,
        time_lag: Option<i64>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        output: Option<&Path>,
    ) -> Result<NwmSeries, NwmError> {
        let defaults = RawRequest::default();
        let raw = RawRequest {
            archive: archive.map_or(defaults.archive, str::to_string),
            configuration: config.map_or(defaults.configuration, str::to_string),
            geometry: geom.map_or(defaults.geometry, str::to_string),
            variable: variable.map_or(defaults.variable, str::to_string),
            identifiers: comid.unwrap_or(defaults.identifiers),
            initiation_hour: init_time.unwrap_or(defaults.initiation_hour),
            time_lag: time_lag.unwrap_or(defaults.time_lag),
            start_date: start_date.map_or(defaults.start_date, str::to_string),
            end_date: end_date.map_or(defaults.end_date, str::to_string),
        };

        let request = validate(&self.catalog, &raw)?;
        let query = request.to_query();
        debug!("GetWaterML query: {:?}", query);

        let response = self.transport.fetch(&query).await?;
        if !response.status.is_success() {
            warn!(
                "HydroShare answered {} for {} {} at {}",
                response.status,
                request.archive(),
                request.configuration(),
                request.location()
            );
            return Err(FetchError::HttpStatus {
                url: self.transport.endpoint().to_string(),
                status: response.status,
            }
            .into());
        }

        let decoded = decode_waterml(&response.body)?;
        let mut series = assemble(request, decoded)?;
        info!(
            "Decoded {} values for site {}",
            series.len(),
            series.metadata.site_name
        );

        if let Some(path) = output {
            match persist_payload(path, &response.body).await {
                Ok(()) => info!("Saved WaterML to {}", path.display()),
                Err(warning) => {
                    warn!("{}: {}", warning, warning.source);
                    series.persistence_warning = Some(warning);
                }
            }
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::clock::FixedClock;
    use crate::hydroshare::transport::RawResponse;
    use crate::validation::error::ValidationError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const PAYLOAD: &str = r#"<timeSeriesResponse xmlns="http://www.cuahsi.org/waterML/1.1/">
  <timeSeries>
    <sourceInfo><siteName>5781915</siteName></sourceInfo>
    <variable>
      <variableName>Streamflow</variableName>
      <unit><unitAbbreviation>m^3/s</unitAbbreviation></unit>
    </variable>
    <values>
      <value dateTimeUTC="2017-08-23T01:00:00">10.5</value>
      <value dateTimeUTC="2017-08-23T02:00:00">11</value>
    </values>
  </timeSeries>
</timeSeriesResponse>"#;

    struct MockTransport {
        status: StatusCode,
        body: &'static str,
        calls: AtomicUsize,
        last_query: Mutex<Vec<(&'static str, String)>>,
    }

    impl MockTransport {
        fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        fn endpoint(&self) -> &str {
            "http://mock/GetWaterML/"
        }

        async fn fetch(
            &self,
            query: &[(&'static str, String)],
        ) -> Result<RawResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = query.to_vec();
            Ok(RawResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    fn client(transport: Arc<MockTransport>) -> NwmHs {
        let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
        NwmHs::with_transport(Catalog::new(Arc::new(FixedClock(today)), 24), transport)
    }

    #[tokio::test]
    async fn test_validation_failure_skips_transport() {
        let transport = MockTransport::new(StatusCode::OK, PAYLOAD);
        let client = client(transport.clone());

        let result = client
            .get_data()
            .geom("land")
            .variable("SNOWH")
            .comid(vec![RawIdentifier::Integer(1635)])
            .call()
            .await;

        assert!(matches!(
            result,
            Err(NwmError::Validation(ValidationError::InvalidIdentifier { .. }))
        ));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let transport = MockTransport::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        let client = client(transport.clone());

        let err = client.get_data().call().await.unwrap_err();
        assert!(err.to_string().contains("https://nwm.readthedocs.io/"));

        match err {
            NwmError::Fetch(FetchError::HttpStatus { url, status }) => {
                assert_eq!(url, "http://mock/GetWaterML/");
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_data_defaults() {
        let transport = MockTransport::new(StatusCode::OK, PAYLOAD);
        let client = client(transport.clone());

        let series = client.get_data().call().await.unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.values().unwrap(), vec![Some(10.5), Some(11.0)]);
        assert_eq!(series.metadata.archive, "harvey");
        assert_eq!(series.metadata.site_name, "5781915");
        assert_eq!(series.metadata.variable_unit, "m^3/s");
        assert!(series.persistence_warning.is_none());

        let query = transport.last_query.lock().unwrap().clone();
        assert!(query.contains(&("COMID", "5781915".to_string())));
        assert!(query.contains(&("time", "00".to_string())));
        assert!(!query.iter().any(|(key, _)| *key == "endDate"));
    }

    #[tokio::test]
    async fn test_get_data_medium_range_query() {
        let transport = MockTransport::new(StatusCode::OK, PAYLOAD);
        let client = client(transport.clone());

        client
            .get_data()
            .archive("irma")
            .config("medium_range")
            .init_time(6)
            .start_date("2017-09-01")
            .call()
            .await
            .unwrap();

        let query = transport.last_query.lock().unwrap().clone();
        assert_eq!(query[0], ("archive", "irma".to_string()));
        assert_eq!(query[1], ("config", "medium_range".to_string()));
        assert!(query.contains(&("time", "06".to_string())));
    }

    #[tokio::test]
    async fn test_undecodable_payload() {
        let transport = MockTransport::new(StatusCode::OK, "<html>maintenance</html>");
        let client = client(transport);

        let result = client.get_data().call().await;
        assert!(matches!(result, Err(NwmError::Decode(_))));
    }

    #[tokio::test]
    async fn test_output_is_persisted() {
        let transport = MockTransport::new(StatusCode::OK, PAYLOAD);
        let client = client(transport);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harvey.xml");

        let series = client.get_data().output(&path).call().await.unwrap();

        assert!(series.persistence_warning.is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), PAYLOAD);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_a_warning() {
        let transport = MockTransport::new(StatusCode::OK, PAYLOAD);
        let client = client(transport);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("harvey.xml");

        let series = client.get_data().output(&path).call().await.unwrap();

        assert_eq!(series.len(), 2);
        let warning = series.persistence_warning.unwrap();
        assert_eq!(warning.path, path);
    }

    #[tokio::test]
    #[ignore = "talks to hs-apps.hydroshare.org"]
    async fn test_live_harvey_streamflow() {
        let client = NwmHs::new().unwrap();

        let series = client.get_data().call().await.unwrap();

        assert!(!series.is_empty());
        assert_eq!(series.metadata.archive, "harvey");
    }
}

//! Command line access to the HydroShare NWM forecasts API.
//!
//! Fetches one time series and writes the raw WaterML answer to the output
//! path, e.g.
//!
//! ```text
//! nwm --archive harvey --config short_range --geom channel_rt \
//!     --variable streamflow --comid 5781915 --init_time 0 \
//!     --start_date 2017-08-23 harvey.xml
//! ```

use clap::Parser;
use log::{error, info};
use nwm::{NwmHs, NwmHsConfig, RawIdentifier};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "nwm")]
#[command(version, about = "Retrieve National Water Model data from HydroShare")]
struct Args {
    /// Archive: rolling, florence, harvey or irma
    #[arg(long, default_value = "harvey")]
    archive: String,

    /// Configuration: analysis_assim, short_range, medium_range or long_range
    #[arg(long, default_value = "short_range")]
    config: String,

    /// Geometry: channel_rt, land, reservoir or forcing
    #[arg(long, default_value = "channel_rt")]
    geom: String,

    /// Variable of the chosen geometry
    #[arg(long, default_value = "streamflow")]
    variable: String,

    /// Comma separated COMIDs; two for land and forcing
    #[arg(long, default_value = "5781915")]
    comid: String,

    /// Forecast initiation hour (short_range 0-23, medium_range 0, 6, 12 or 18)
    #[arg(long = "init_time", default_value_t = 0, allow_negative_numbers = true)]
    init_time: i64,

    /// Lag hour for long_range: 0, 6 or 12
    #[arg(long = "time_lag", default_value_t = 0, allow_negative_numbers = true)]
    time_lag: i64,

    /// Start date, YYYY-MM-DD
    #[arg(long = "start_date", default_value = "2017-08-23")]
    start_date: String,

    /// End date for analysis_assim, YYYY-MM-DD
    #[arg(long = "end_date", default_value = "2017-09-06")]
    end_date: String,

    /// HydroShare API token
    #[arg(long, env = "NWM_HS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GetWaterML endpoint
    #[arg(long, env = "NWM_HS_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Where to write the WaterML file
    output: PathBuf,
}

impl Args {
    fn nwm_config(&self) -> NwmHsConfig {
        NwmHsConfig::builder()
            .maybe_token(self.token.clone())
            .maybe_endpoint(self.endpoint.clone())
            .maybe_timeout(self.timeout.map(Duration::from_secs))
            .build()
    }
}

fn parse_comid(list: &str) -> Vec<RawIdentifier> {
    list.split(',').map(RawIdentifier::from_token).collect()
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), nwm::NwmError> {
    let client = NwmHs::with_config(args.nwm_config())?;

    let series = client
        .get_data()
        .archive(&args.archive)
        .config(&args.config)
        .geom(&args.geom)
        .variable(&args.variable)
        .comid(parse_comid(&args.comid))
        .init_time(args.init_time)
        .time_lag(args.time_lag)
        .start_date(&args.start_date)
        .end_date(&args.end_date)
        .output(&args.output)
        .call()
        .await?;

    match serde_json::to_string(&series.metadata) {
        Ok(metadata) => info!("Metadata: {}", metadata),
        Err(e) => error!("Failed to serialize metadata: {}", e),
    }
    info!("Retrieved {} values", series.len());

    if args.output.exists() {
        println!("Done");
    }
    Ok(())
}

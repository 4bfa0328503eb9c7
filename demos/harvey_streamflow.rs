//! Fetches the Harvey short range streamflow forecast for one reach and
//! prints the series.
//!
//! Set RUST_LOG=debug to see the query that is sent.

use nwm::{NwmError, NwmHs, RawIdentifier};
use std::env;

#[tokio::main]
async fn main() -> Result<(), NwmError> {
    env_logger::init();
    configure_polars_display();

    let client = NwmHs::new()?;
    let series = client
        .get_data()
        .archive("harvey")
        .config("short_range")
        .geom("channel_rt")
        .variable("streamflow")
        .comid(vec![RawIdentifier::Integer(5781915)])
        .init_time(0)
        .start_date("2017-08-23")
        .call()
        .await?;

    println!(
        "{} ({}) at site {}",
        series.metadata.variable_name, series.metadata.variable_unit, series.metadata.site_name
    );
    println!("{}", series.frame);

    Ok(())
}

fn configure_polars_display() {
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}

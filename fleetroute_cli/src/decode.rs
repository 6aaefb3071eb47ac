use std::io::Write;

use clap::Args;
use fleetroute_geometry::{line_string::route_geometry, polyline};
use geojson::{Feature, GeoJson};
use tracing::info;

#[derive(Args)]
pub struct DecodeArgs {
    /// Encoded polyline, e.g. "_p~iF~ps|U_ulLnnqC_mqNvxq`@"
    polyline: String,
}

pub fn decoded_feature(encoded: &str) -> Result<Feature, polyline::PolylineError> {
    let path = polyline::decode(encoded)?;
    info!("Decoded {} points", path.len());

    Ok(Feature::from(route_geometry(&path)))
}

pub fn run<W: Write>(args: DecodeArgs, out: &mut W) -> anyhow::Result<()> {
    let feature = decoded_feature(&args.polyline)?;
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&GeoJson::Feature(feature))?
    )?;

    Ok(())
}

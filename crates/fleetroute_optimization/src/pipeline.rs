use std::{io::Write, path::PathBuf};

use tracing::{info, warn};

use crate::{
    client::{OptimizeToursClient, OptimizeToursError},
    export::{self, DEFAULT_OUTPUT_FILE},
    plan::RoutePlan,
    response::ShipmentRoute,
    summary::RouteSummary,
};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub output: PathBuf,

    /// Export every returned route instead of only the first one.
    pub all_routes: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            all_routes: false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PipelineOutcome {
    Exported { path: PathBuf, features: usize },

    /// The routes came back without a polyline, nothing was written.
    NoGeometry,

    /// The service answered with a non-200 status.
    Rejected { status: u16 },
}

/// Sends the plan, prints the route summaries to `out` and writes the GeoJSON file.
pub async fn run<W: Write>(
    client: &OptimizeToursClient,
    plan: &RoutePlan,
    options: &PipelineOptions,
    out: &mut W,
) -> anyhow::Result<PipelineOutcome> {
    info!(
        "Requesting optimization of {} shipments for {} vehicles",
        plan.request.shipments.len(),
        plan.request.vehicles.len()
    );

    let response = match client.optimize_tours(&plan.request).await {
        Ok(response) => response,
        Err(OptimizeToursError::Api { status, message }) => {
            writeln!(out, "Route optimization failed: {}", status)?;
            writeln!(out, "{}", message)?;
            return Ok(PipelineOutcome::Rejected { status });
        }
        Err(err) => return Err(err.into()),
    };

    let routes = select_routes(&response.routes, options.all_routes)?;
    info!(
        "Optimization returned {} routes, processing {}",
        response.routes.len(),
        routes.len()
    );

    for route in routes {
        writeln!(out, "{}", RouteSummary::from(route))?;
    }

    let Some(collection) = export::route_feature_collection(routes, plan)? else {
        warn!("No route polyline in the response, skipping GeoJSON output");
        return Ok(PipelineOutcome::NoGeometry);
    };

    export::write_feature_collection(&options.output, &collection)?;
    writeln!(out, "GeoJSON written to {}", options.output.display())?;

    Ok(PipelineOutcome::Exported {
        path: options.output.clone(),
        features: collection.features.len(),
    })
}

fn select_routes(routes: &[ShipmentRoute], all_routes: bool) -> anyhow::Result<&[ShipmentRoute]> {
    if routes.is_empty() {
        anyhow::bail!("Optimization response contains no routes");
    }

    Ok(if all_routes { routes } else { &routes[..1] })
}

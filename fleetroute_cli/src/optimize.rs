use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use fleetroute_optimization::{
    client::{OptimizeToursClient, OptimizeToursClientParams},
    export::DEFAULT_OUTPUT_FILE,
    pipeline::{self, PipelineOptions, PipelineOutcome},
};
use tracing::{error, info};

use crate::plan_input::load_plan;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Route plan JSON file (defaults to the built-in sample plan)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the GeoJSON FeatureCollection
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Override the optimizeTours endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Export every returned route instead of only the first one
    #[arg(long)]
    pub all_routes: bool,
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<ExitCode> {
    let plan = load_plan(args.input.as_deref())?;

    let params = OptimizeToursClientParams::from_env()?;
    let params = match args.endpoint {
        Some(endpoint) => params.with_url(endpoint),
        None => params,
    };
    let client = OptimizeToursClient::new(params);

    let options = PipelineOptions {
        output: args.output,
        all_routes: args.all_routes,
    };

    let mut stdout = std::io::stdout();
    match pipeline::run(&client, &plan, &options, &mut stdout).await? {
        PipelineOutcome::Exported { path, features } => {
            info!("Exported {} route features to {}", features, path.display());
            Ok(ExitCode::SUCCESS)
        }
        PipelineOutcome::NoGeometry => Ok(ExitCode::SUCCESS),
        PipelineOutcome::Rejected { status } => {
            error!("{} rejected the request with status {}", client.url(), status);
            Ok(ExitCode::FAILURE)
        }
    }
}

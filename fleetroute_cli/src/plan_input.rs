use std::path::Path;

use fleetroute_optimization::plan::RoutePlan;
use tracing::info;

pub fn load_plan(input: Option<&Path>) -> anyhow::Result<RoutePlan> {
    match input {
        Some(path) => {
            info!("Loading route plan from {}", path.display());
            RoutePlan::from_file(path)
        }
        None => {
            info!("No plan given, using the built-in sample plan");
            Ok(RoutePlan::sample())
        }
    }
}

use std::{io::Write, path::PathBuf};

use clap::Args;

use crate::plan_input::load_plan;

#[derive(Args)]
pub struct RequestArgs {
    /// Route plan JSON file (defaults to the built-in sample plan)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

pub fn run<W: Write>(args: RequestArgs, out: &mut W) -> anyhow::Result<()> {
    let plan = load_plan(args.input.as_deref())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&plan.request)?)?;

    Ok(())
}

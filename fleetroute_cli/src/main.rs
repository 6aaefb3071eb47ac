use std::{io, process::ExitCode};

use clap::{Parser, Subcommand};

use crate::{decode::DecodeArgs, optimize::OptimizeArgs, request::RequestArgs};

mod decode;
mod optimize;
mod plan_input;
mod request;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a route plan with the remote API and export the route as GeoJSON
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Print the request body of a route plan without calling the API
    Request {
        #[command(flatten)]
        args: RequestArgs,
    },
    /// Decode an encoded polyline into a GeoJSON LineString feature
    Decode {
        #[command(flatten)]
        args: DecodeArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args).await,
        Commands::Request { args } => {
            request::run(args, &mut io::stdout().lock()).map(|_| ExitCode::SUCCESS)
        }
        Commands::Decode { args } => {
            decode::run(args, &mut io::stdout().lock()).map(|_| ExitCode::SUCCESS)
        }
    }
}

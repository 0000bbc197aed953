//! Command-line entry point for managing a Drill source configuration.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ndc_drill_cli::{run, Command, Context};
use ndc_drill_configuration::environment::ProcessEnvironment;

/// The command-line arguments.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// The path to the configuration. Defaults to the current directory.
    #[arg(
        long = "context-path",
        env = "DRILL_CONNECTOR_CONTEXT_PATH",
        value_name = "DIRECTORY"
    )]
    pub context_path: Option<PathBuf>,
    /// The command to invoke.
    #[command(subcommand)]
    pub subcommand: Command,
}

/// The application entrypoint. It pulls information from the environment and then calls the [run]
/// function. The library remains unaware of the environment, so that we can more easily test it.
#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let context_path = match args.context_path {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(error) => {
                eprintln!("unable to read the current directory: {error}");
                return ExitCode::FAILURE;
            }
        },
    };

    let context = Context {
        context_path,
        environment: ProcessEnvironment,
        output: std::io::stdout(),
    };

    match run(args.subcommand, context).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

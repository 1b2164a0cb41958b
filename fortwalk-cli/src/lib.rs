//! Command-line interface for planning fort walks.
//!
//! `fortwalk plan` reads a fort document and a route request, runs the beam
//! planner and prints the resulting route as JSON. `fortwalk compare` does
//! the same once per strategy. Options layer CLI flags over
//! `FORTWALK_CMDS_<SUBCOMMAND>_<FIELD>` environment variables over
//! configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{CompareArgs, PlanArgs};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_FORT: &str = "fort";
pub(crate) const ARG_BEAM_WIDTH: &str = "beam-width";
pub(crate) const ARG_ADD_STOP: &str = "add-stop";
pub(crate) const ARG_REROUTE_FROM: &str = "reroute-from";
pub(crate) const ENV_PLAN_REQUEST: &str = "FORTWALK_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_PLAN_FORT: &str = "FORTWALK_CMDS_PLAN_FORT";
pub(crate) const ENV_COMPARE_REQUEST: &str = "FORTWALK_CMDS_COMPARE_REQUEST_PATH";
pub(crate) const ENV_COMPARE_FORT: &str = "FORTWALK_CMDS_COMPARE_FORT";

/// Run the fortwalk CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or planning
/// fail, or when the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Compare(args) => plan::run_compare(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fortwalk",
    about = "Plan time-boxed walking routes around a fort",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan one route and print it as JSON.
    Plan(PlanArgs),
    /// Plan the same request under every strategy.
    Compare(CompareArgs),
}

#[cfg(test)]
mod tests;

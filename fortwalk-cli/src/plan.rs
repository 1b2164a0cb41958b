//! `plan` and `compare` command implementations.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fortwalk_core::{
    FortGraph, NodeKey, OptimizeError, RouteOptimizer, RouteRequest, RouteResult,
    add_stop_to_route, compare_strategies, reroute_from_node,
};
use fortwalk_solver_beam::BeamSolver;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ADD_STOP, ARG_BEAM_WIDTH, ARG_FORT, ARG_REQUEST, ARG_REROUTE_FROM, CliError,
    ENV_COMPARE_FORT, ENV_COMPARE_REQUEST, ENV_PLAN_FORT, ENV_PLAN_REQUEST,
};

/// Request field filled from the fort's declared entry when absent.
const ENTRY_POINT_FIELD: &str = "entry_point";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking route around a fort. The fort is a JSON \
                 fort document and the request a JSON-encoded RouteRequest. \
                 A request without an entry point starts at the fort's \
                 declared entry. The planned RouteResult is printed to stdout.",
    about = "Plan a route"
)]
#[ortho_config(prefix = "FORTWALK")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a RouteRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the fort document.
    #[arg(long = ARG_FORT, value_name = "path")]
    #[serde(default)]
    pub(crate) fort: Option<Utf8PathBuf>,
    /// Override the request's beam width.
    #[arg(long = ARG_BEAM_WIDTH, value_name = "n")]
    #[serde(default)]
    pub(crate) beam_width: Option<usize>,
    /// Re-plan so that this location is included when it fits.
    #[arg(long = ARG_ADD_STOP, value_name = "key", conflicts_with = "reroute_from")]
    #[serde(default)]
    pub(crate) add_stop: Option<String>,
    /// Restart the walk from this location, forgetting earlier visits.
    #[arg(long = ARG_REROUTE_FROM, value_name = "key")]
    #[serde(default)]
    pub(crate) reroute_from: Option<String>,
}

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the same request once per strategy and print the \
                 routes as a JSON object keyed by strategy.",
    about = "Compare strategies"
)]
#[ortho_config(prefix = "FORTWALK")]
pub(crate) struct CompareArgs {
    /// Path to a JSON file containing a RouteRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the fort document.
    #[arg(long = ARG_FORT, value_name = "path")]
    #[serde(default)]
    pub(crate) fort: Option<Utf8PathBuf>,
    /// Override the request's beam width.
    #[arg(long = ARG_BEAM_WIDTH, value_name = "n")]
    #[serde(default)]
    pub(crate) beam_width: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

impl CompareArgs {
    pub(crate) fn into_config(self) -> Result<InputConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InputConfig::try_from(merged)
    }
}

/// Edit applied to the request before planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteEdit {
    /// Include this stop when it fits.
    AddStop(NodeKey),
    /// Restart from this node with a fresh history.
    RerouteFrom(NodeKey),
}

/// Input documents and overrides shared by both commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the fort document.
    pub(crate) fort_path: Utf8PathBuf,
    /// Beam width replacing the request's own.
    pub(crate) beam_width: Option<usize>,
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) inputs: InputConfig,
    pub(crate) edit: Option<RouteEdit>,
}

impl InputConfig {
    fn resolve(
        request_path: Option<Utf8PathBuf>,
        fort: Option<Utf8PathBuf>,
        beam_width: Option<usize>,
        envs: (&'static str, &'static str),
    ) -> Result<Self, CliError> {
        let (request_env, fort_env) = envs;
        let request_path = request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: request_env,
        })?;
        let fort_path = fort.ok_or(CliError::MissingArgument {
            field: ARG_FORT,
            env: fort_env,
        })?;
        Ok(Self {
            request_path,
            fort_path,
            beam_width,
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.fort_path, ARG_FORT)?;
        Ok(())
    }

    /// Load both documents and check the request against the fort.
    fn load(&self) -> Result<(FortGraph, RouteRequest), CliError> {
        let fort = load_fort(&self.fort_path)?;
        let mut request = load_request(&self.request_path, fort.default_entry())?;
        if let Some(width) = self.beam_width {
            request = request.with_beam_width(width);
        }
        request
            .validate_for(&fort)
            .map_err(|source| CliError::InvalidRequest {
                path: self.request_path.clone(),
                source,
            })?;
        Ok((fort, request))
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let inputs = InputConfig::resolve(
            args.request_path,
            args.fort,
            args.beam_width,
            (ENV_PLAN_REQUEST, ENV_PLAN_FORT),
        )?;
        let edit = match (args.add_stop, args.reroute_from) {
            (Some(stop), Some(node)) => return Err(CliError::ConflictingEdits { stop, node }),
            (Some(stop), None) => Some(RouteEdit::AddStop(stop.into())),
            (None, Some(node)) => Some(RouteEdit::RerouteFrom(node.into())),
            (None, None) => None,
        };
        Ok(Self { inputs, edit })
    }
}

impl TryFrom<CompareArgs> for InputConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.request_path,
            args.fort,
            args.beam_width,
            (ENV_COMPARE_REQUEST, ENV_COMPARE_FORT),
        )
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the planner for the loaded fort.
pub(crate) trait PlannerBuilder {
    fn build(&self, fort: FortGraph) -> Box<dyn RouteOptimizer>;
}

/// Default planner: beam search with default weights and configuration.
pub(crate) struct BeamPlannerBuilder;

impl PlannerBuilder for BeamPlannerBuilder {
    fn build(&self, fort: FortGraph) -> Box<dyn RouteOptimizer> {
        Box::new(BeamSolver::new(fort))
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_plan_with(args, &BeamPlannerBuilder, writer)
}

pub(crate) fn run_compare(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_compare_with(args, &BeamPlannerBuilder, writer)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.inputs.validate_sources()?;
    let result = execute_plan(&config, builder)?;
    write_json(writer, &result)
}

pub(crate) fn run_compare_with(
    args: CompareArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let (fort, request) = config.load()?;
    let planner = builder.build(fort);
    let results =
        compare_strategies(planner.as_ref(), &request).map_err(|source| CliError::Plan { source })?;
    write_json(writer, &results)
}

fn execute_plan(config: &PlanConfig, builder: &dyn PlannerBuilder) -> Result<RouteResult, CliError> {
    let (fort, request) = config.inputs.load()?;
    let planner = builder.build(fort);
    let outcome: Result<RouteResult, OptimizeError> = match &config.edit {
        None => planner.optimize(&request),
        Some(RouteEdit::AddStop(stop)) => add_stop_to_route(planner.as_ref(), stop.clone(), &request),
        Some(RouteEdit::RerouteFrom(node)) => {
            reroute_from_node(planner.as_ref(), node.clone(), &request)
        }
    };
    outcome.map_err(|source| CliError::Plan { source })
}

/// Loads a fort document from disk; the graph is validated while decoding.
pub(crate) fn load_fort(path: &Utf8Path) -> Result<FortGraph, CliError> {
    let fort: FortGraph = load_json(path, ARG_FORT)?;
    log::debug!(
        "loaded fort {} ({} locations, {} edges) from {path}",
        fort.id(),
        fort.locations().count(),
        fort.edges().len()
    );
    Ok(fort)
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
///
/// A request without an `entry_point` starts at `default_entry`, the fort's
/// declared entry, when there is one.
pub(crate) fn load_request(
    path: &Utf8Path,
    default_entry: Option<&NodeKey>,
) -> Result<RouteRequest, CliError> {
    let mut document: serde_json::Value = load_json(path, ARG_REQUEST)?;
    if let (Some(fields), Some(entry)) = (document.as_object_mut(), default_entry)
        && !fields.contains_key(ENTRY_POINT_FIELD)
    {
        log::debug!("{path} names no entry point; starting at the fort's entry {entry}");
        fields.insert(
            ENTRY_POINT_FIELD.to_owned(),
            serde_json::Value::from(entry.as_str()),
        );
    }
    serde_json::from_value(document).map_err(|source| CliError::ParseInput {
        field: ARG_REQUEST,
        path: path.to_path_buf(),
        source,
    })
}

fn load_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn plan_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

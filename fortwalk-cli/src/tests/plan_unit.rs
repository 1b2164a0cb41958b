//! Focused unit tests covering plan and compare configuration, inputs and
//! output.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::plan::{
    BeamPlannerBuilder, CompareArgs, InputConfig, PlanArgs, PlanConfig, PlannerBuilder,
    RouteEdit, load_fort, load_request, plan_config_from_layers_for_test, run_compare_with,
    run_plan_with,
};
use camino::Utf8Path;
use clap::Parser;
use fortwalk_core::{
    FortGraph, NodeKey, OptimizeError, RouteMetrics, RouteOptimizer, RouteRequest,
    RouteRequestValidationError, RouteResult, Strategy,
};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn plan_to_string(args: PlanArgs) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_plan_with(args, &BeamPlannerBuilder, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("stdout utf-8"))
}

fn planned_route(args: PlanArgs) -> RouteResult {
    let stdout = plan_to_string(args).expect("plan should succeed");
    serde_json::from_str(&stdout).expect("output should be a JSON route")
}

#[rstest]
#[case(None, Some("fort.json"), ARG_REQUEST, ENV_PLAN_REQUEST)]
#[case(Some("request.json"), None, ARG_FORT, ENV_PLAN_FORT)]
fn converting_plan_without_required_paths_errors(
    #[case] request: Option<&str>,
    #[case] fort: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = PlanArgs {
        request_path: request.map(Into::into),
        fort: fort.map(Into::into),
        ..PlanArgs::default()
    };
    let err = PlanConfig::try_from(args).expect_err("missing path should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_compare_without_fort_names_compare_env() {
    let args = CompareArgs {
        request_path: Some("request.json".into()),
        ..CompareArgs::default()
    };
    let err = InputConfig::try_from(args).expect_err("missing fort should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_FORT);
            assert_eq!(env, ENV_COMPARE_FORT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(Some("B"), None, Some(RouteEdit::AddStop("B".into())))]
#[case(None, Some("C"), Some(RouteEdit::RerouteFrom("C".into())))]
#[case(None, None, None)]
fn plan_config_records_the_requested_edit(
    #[case] add_stop: Option<&str>,
    #[case] reroute_from: Option<&str>,
    #[case] expected: Option<RouteEdit>,
) {
    let args = PlanArgs {
        request_path: Some("request.json".into()),
        fort: Some("fort.json".into()),
        add_stop: add_stop.map(str::to_owned),
        reroute_from: reroute_from.map(str::to_owned),
        ..PlanArgs::default()
    };
    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.edit, expected);
}

#[rstest]
fn combining_edits_in_configuration_errors() {
    let args = PlanArgs {
        request_path: Some("request.json".into()),
        fort: Some("fort.json".into()),
        add_stop: Some("B".to_owned()),
        reroute_from: Some("C".to_owned()),
        ..PlanArgs::default()
    };
    let err = PlanConfig::try_from(args).expect_err("conflicting edits should error");
    match err {
        CliError::ConflictingEdits { stop, node } => {
            assert_eq!(stop, "B");
            assert_eq!(node, "C");
        }
        other => panic!("expected ConflictingEdits, found {other:?}"),
    }
}

#[rstest]
fn combining_edit_flags_is_rejected_by_clap() {
    let parsed = Cli::try_parse_from([
        "fortwalk",
        "plan",
        "request.json",
        "--fort",
        "fort.json",
        "--add-stop",
        "B",
        "--reroute-from",
        "C",
    ]);
    assert!(parsed.is_err());
}

#[rstest]
fn plan_flags_parse_into_arguments() {
    let cli = Cli::try_parse_from([
        "fortwalk",
        "plan",
        "request.json",
        "--fort",
        "fort.json",
        "--beam-width",
        "5",
        "--add-stop",
        "B",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Plan(args) => {
            assert_eq!(args.request_path.as_deref().map(Utf8Path::as_str), Some("request.json"));
            assert_eq!(args.fort.as_deref().map(Utf8Path::as_str), Some("fort.json"));
            assert_eq!(args.beam_width, Some(5));
            assert_eq!(args.add_stop.as_deref(), Some("B"));
        }
        Command::Compare(_) => panic!("expected plan command"),
    }
}

#[rstest]
#[case::missing_request(ARG_REQUEST, true)]
#[case::missing_fort(ARG_FORT, false)]
fn validate_sources_reports_missing_documents(
    workspace: Workspace,
    #[case] expected_field: &'static str,
    #[case] drop_request: bool,
) {
    let missing = workspace.root().join("missing.json");
    let config = InputConfig {
        request_path: if drop_request {
            missing.clone()
        } else {
            workspace.request_path().to_path_buf()
        },
        fort_path: if drop_request {
            workspace.fort_path().to_path_buf()
        } else {
            missing
        },
        beam_width: None,
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let fort_dir = workspace.root().join("fort.d");
    std::fs::create_dir(fort_dir.as_std_path()).expect("fort directory");
    let config = InputConfig {
        request_path: workspace.request_path().to_path_buf(),
        fort_path: fort_dir.clone(),
        beam_width: None,
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_FORT);
            assert_eq!(path, fort_dir);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_request_decodes_json(workspace: Workspace) {
    let request = RouteRequest::new("A", 55.0)
        .with_strategy(Strategy::MaxCulture)
        .with_previous_visited(["C"])
        .with_forced_node("B")
        .with_beam_width(4);
    workspace.write_request(&request);
    let decoded = load_request(workspace.request_path(), None).expect("request should decode");
    assert_eq!(decoded, request);
}

#[rstest]
fn load_request_applies_serde_defaults(workspace: Workspace) {
    write_utf8(
        workspace.request_path(),
        br#"{ "entry_point": "A", "time_available_minutes": 40 }"#,
    );
    let decoded = load_request(workspace.request_path(), None).expect("request should decode");
    assert_eq!(decoded, RouteRequest::new("A", 40.0));
}

#[rstest]
fn load_request_falls_back_to_the_fort_entry(workspace: Workspace) {
    write_utf8(workspace.request_path(), br#"{ "time_available_minutes": 40 }"#);
    let entry = NodeKey::from("A");
    let decoded =
        load_request(workspace.request_path(), Some(&entry)).expect("request should decode");
    assert_eq!(decoded, RouteRequest::new("A", 40.0));
}

#[rstest]
fn load_request_keeps_an_explicit_entry(workspace: Workspace) {
    workspace.write_request(&RouteRequest::new("B", 40.0));
    let entry = NodeKey::from("A");
    let decoded =
        load_request(workspace.request_path(), Some(&entry)).expect("request should decode");
    assert_eq!(decoded.entry_point, "B");
}

#[rstest]
fn load_request_without_any_entry_errors(workspace: Workspace) {
    write_utf8(workspace.request_path(), br#"{ "time_available_minutes": 40 }"#);
    let err = load_request(workspace.request_path(), None)
        .expect_err("a request with no entry point should error");
    match err {
        CliError::ParseInput { field, source, .. } => {
            assert_eq!(field, ARG_REQUEST);
            assert!(source.to_string().contains("entry_point"));
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_request_rejects_invalid_json(workspace: Workspace) {
    write_utf8(workspace.request_path(), b"{ not valid json");
    let err = load_request(workspace.request_path(), None).expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, workspace.request_path());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error(workspace: Workspace) {
    let missing = workspace.root().join("absent.json");
    let err = load_request(&missing, None).expect_err("missing request should error");
    match err {
        CliError::OpenInput { field, path, .. } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, missing);
        }
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn load_fort_round_trips_the_document(workspace: Workspace) {
    let fort = load_fort(workspace.fort_path()).expect("fort should decode");
    assert_eq!(fort.id(), "triangle");
    assert_eq!(fort.locations().count(), 3);
    assert_eq!(fort.default_entry().map(|key| key.as_str()), Some("A"));
}

#[rstest]
fn load_fort_rejects_unknown_edge_endpoints(workspace: Workspace) {
    write_utf8(
        workspace.fort_path(),
        br#"{
            "id": "broken",
            "name": "Broken",
            "locations": [
                { "id": "gate", "name": "Gate", "historical_score": 1.0,
                  "spiritual_score": 1.0, "architectural_score": 1.0,
                  "walking_effort": 1, "visit_minutes": 5.0 }
            ],
            "edges": [
                { "from": "gate", "to": "tower", "walking_minutes": 4.0, "difficulty": 1 }
            ]
        }"#,
    );
    let err = load_fort(workspace.fort_path()).expect_err("malformed fort should error");
    match err {
        CliError::ParseInput { field, source, .. } => {
            assert_eq!(field, ARG_FORT);
            assert!(source.to_string().contains("tower"));
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn plan_prints_the_route_as_json(workspace: Workspace) {
    let route = planned_route(workspace.plan_args());
    assert_eq!(route.stops, ["A", "B", "A"]);
    assert!((route.metrics.total_minutes - 30.0).abs() < 1e-9);
}

#[rstest]
fn plan_starts_at_the_fort_entry_when_the_request_names_none(workspace: Workspace) {
    write_utf8(workspace.request_path(), br#"{ "time_available_minutes": 40 }"#);
    let route = planned_route(workspace.plan_args());
    assert_eq!(route.stops, ["A", "B", "A"]);
}

#[rstest]
fn plan_output_ends_with_newline(workspace: Workspace) {
    let stdout = plan_to_string(workspace.plan_args()).expect("plan should succeed");
    assert!(stdout.ends_with("}\n"));
}

#[rstest]
fn plan_with_add_stop_includes_it(workspace: Workspace) {
    let args = PlanArgs {
        add_stop: Some("C".to_owned()),
        ..workspace.plan_args()
    };
    assert_eq!(planned_route(args).stops, ["A", "C", "A"]);
}

#[rstest]
fn plan_with_reroute_starts_at_the_new_node(workspace: Workspace) {
    workspace.write_request(&RouteRequest::new("A", 40.0).with_previous_visited(["B"]));
    let args = PlanArgs {
        reroute_from: Some("B".to_owned()),
        ..workspace.plan_args()
    };
    assert_eq!(planned_route(args).stops, ["B", "A", "B"]);
}

#[rstest]
fn plan_rejects_requests_that_do_not_fit_the_fort(workspace: Workspace) {
    workspace.write_request(&RouteRequest::new("Z", 40.0));
    let err = plan_to_string(workspace.plan_args()).expect_err("unknown entry should fail");
    match err {
        CliError::InvalidRequest { path, source } => {
            assert_eq!(path, workspace.request_path());
            assert_eq!(
                source,
                RouteRequestValidationError::UnknownEntryPoint { key: "Z".into() }
            );
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}

#[rstest]
fn plan_rejects_zero_beam_width_override(workspace: Workspace) {
    let args = PlanArgs {
        beam_width: Some(0),
        ..workspace.plan_args()
    };
    let err = plan_to_string(args).expect_err("zero beam width should fail");
    match err {
        CliError::InvalidRequest { source, .. } => {
            assert_eq!(source, RouteRequestValidationError::ZeroBeamWidth);
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}

#[rstest]
fn plan_reroute_to_unknown_node_reports_planner_error(workspace: Workspace) {
    let args = PlanArgs {
        reroute_from: Some("Z".to_owned()),
        ..workspace.plan_args()
    };
    let err = plan_to_string(args).expect_err("unknown reroute node should fail");
    match err {
        CliError::Plan {
            source: OptimizeError::InvalidRequest(_),
        } => {}
        other => panic!("expected Plan, found {other:?}"),
    }
}

/// Records every request it is asked to plan.
#[derive(Clone, Default)]
struct RecordingBuilder {
    seen: Arc<Mutex<Vec<RouteRequest>>>,
}

struct RecordingPlanner {
    seen: Arc<Mutex<Vec<RouteRequest>>>,
}

impl RouteOptimizer for RecordingPlanner {
    fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizeError> {
        self.seen
            .lock()
            .expect("recorder lock")
            .push(request.clone());
        Ok(RouteResult {
            strategy: request.strategy,
            stops: vec![request.entry_point.clone()],
            locations: Vec::new(),
            metrics: RouteMetrics::default(),
            decision_log: Vec::new(),
        })
    }
}

impl PlannerBuilder for RecordingBuilder {
    fn build(&self, _fort: FortGraph) -> Box<dyn RouteOptimizer> {
        Box::new(RecordingPlanner {
            seen: Arc::clone(&self.seen),
        })
    }
}

#[rstest]
fn beam_width_override_reaches_the_planner(workspace: Workspace) {
    let builder = RecordingBuilder::default();
    let args = PlanArgs {
        beam_width: Some(5),
        ..workspace.plan_args()
    };
    let mut buffer = Vec::new();
    run_plan_with(args, &builder, &mut buffer).expect("plan should succeed");
    let seen = builder.seen.lock().expect("recorder lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen.first().map(|request| request.beam_width), Some(5));
}

#[rstest]
fn compare_plans_every_strategy(workspace: Workspace) {
    let args = CompareArgs {
        request_path: Some(workspace.request_path().to_path_buf()),
        fort: Some(workspace.fort_path().to_path_buf()),
        beam_width: None,
    };
    let mut buffer = Vec::new();
    run_compare_with(args, &BeamPlannerBuilder, &mut buffer).expect("compare should succeed");
    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    let routes: BTreeMap<Strategy, RouteResult> =
        serde_json::from_str(&stdout).expect("output should map strategies to routes");
    assert_eq!(routes.len(), Strategy::ALL.len());
    for (strategy, route) in &routes {
        assert_eq!(route.strategy, *strategy);
        assert_eq!(route.stops, ["A", "B", "A"]);
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "beam_width": "wide" }));

    let err = plan_config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let root = workspace.root();
    let env_request = root.join("from-env-request.json");
    let cli_fort = root.join("from-cli-fort.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "fort": root.join("from-file-fort.json").as_str(),
            "beam_width": 4,
            "add_stop": "C",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "fort": root.join("from-env-fort.json").as_str(),
    }));
    composer.push_cli(json!({
        "fort": cli_fort.as_str(),
    }));

    let config =
        plan_config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.inputs.request_path, env_request);
    assert_eq!(config.inputs.fort_path, cli_fort);
    assert_eq!(config.inputs.beam_width, Some(4));
    assert_eq!(config.edit, Some(RouteEdit::AddStop("C".into())));
}

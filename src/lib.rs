//! Facade crate for the fortwalk route planner.
//!
//! This crate re-exports the core domain types and exposes the beam-search
//! planner behind a feature flag.

#![forbid(unsafe_code)]

pub use fortwalk_core::{
    DecisionLogEntry, Edge, EnergyLevel, FortGraph, FortGraphError, ImportanceScorer,
    ImportanceWeights, Location, NodeKey, OptimizeError, RouteMetrics, RouteOptimizer,
    RouteRequest, RouteRequestValidationError, RouteResult, Strategy, WeightedImportance,
    add_stop_to_route, compare_strategies, reroute_from_node,
};

#[cfg(feature = "solver-beam")]
pub use fortwalk_solver_beam::{BeamSolver, BeamSolverConfig, optimize_route};

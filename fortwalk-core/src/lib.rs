//! Core domain types for the fortwalk route planner.
//!
//! A fort is modelled as a small weighted graph of points of interest
//! ([`Location`]) joined by bidirectional walking paths ([`Edge`]). The
//! [`FortGraph`] container validates that data once, so downstream planners
//! can treat it as trusted. Requests and results crossing the planner
//! boundary live here too, alongside the graph utilities every planner needs
//! (reachability and difficulty-filtered shortest paths).
//!
//! Planners implement [`RouteOptimizer`]; the editing helpers in
//! [`editing`] layer "add a stop" and "restart from here" on top of any
//! implementation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod editing;
mod edge;
mod energy;
mod fort;
pub mod graph;
mod importance;
mod location;
mod optimizer;
mod request;
mod result;
mod strategy;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use edge::Edge;
pub use editing::{add_stop_to_route, compare_strategies, reroute_from_node};
pub use energy::EnergyLevel;
pub use fort::{FortGraph, FortGraphError};
pub use graph::{Adjacency, Neighbour, ShortestPath};
pub use importance::{ImportanceScorer, ImportanceWeights, WeightedImportance};
pub use location::{Location, LocationError, NodeKey, RATING_MAX};
pub use optimizer::{OptimizeError, RouteOptimizer};
pub use request::{DEFAULT_BEAM_WIDTH, RouteRequest, RouteRequestValidationError};
pub use result::{DecisionLogEntry, RouteMetrics, RouteResult};
pub use strategy::{Strategy, UnknownStrategyError};

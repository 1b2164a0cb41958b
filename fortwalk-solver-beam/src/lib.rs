//! Beam-search route planner for fort walks.
//!
//! This crate provides [`BeamSolver`], an implementation of the
//! [`RouteOptimizer`](fortwalk_core::RouteOptimizer) trait. Starting from the
//! entry point, it grows partial routes one stop at a time, keeping only the
//! best few per round under the request's [`Strategy`](fortwalk_core::Strategy).
//! A stop is only ever added when the shortest walk back to the entry point
//! still fits the time budget, so every route it returns is a closed walk
//! that can be completed in time.
//!
//! The search is deterministic: candidates are enumerated in key order,
//! shortest-path ties resolve by key, and beam ranking is stable.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod beam;
mod feasibility;
mod objective;
mod path;
mod solver;

pub use solver::{BeamSolver, BeamSolverConfig, optimize_route};

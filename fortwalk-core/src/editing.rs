//! Edits applied to a planned route.
//!
//! Each operation derives a new request from the current one and hands it to
//! a [`RouteOptimizer`]. None of them inspects the returned route: whether a
//! requested stop made it in is for the caller to check with
//! [`RouteResult::visits`].

use std::collections::BTreeMap;

use crate::{NodeKey, OptimizeError, RouteOptimizer, RouteRequest, RouteResult, Strategy};

/// Re-plan `request` so that `stop` is included when any feasible route can
/// include it.
///
/// Entry point and session history are kept.
///
/// # Errors
/// Propagates [`OptimizeError`] from the optimizer.
pub fn add_stop_to_route<O>(
    optimizer: &O,
    stop: impl Into<NodeKey>,
    request: &RouteRequest,
) -> Result<RouteResult, OptimizeError>
where
    O: RouteOptimizer + ?Sized,
{
    let node = stop.into();
    log::debug!("re-planning from {} to include {node}", request.entry_point);
    let result = optimizer.optimize(&request.clone().forcing(node.clone()))?;
    if !result.visits(node.as_str()) {
        log::info!("{node} does not fit within {} minutes", request.time_available_minutes);
    }
    Ok(result)
}

/// Restart exploration at `node`, forgetting session history.
///
/// # Errors
/// Propagates [`OptimizeError`] from the optimizer, including an unknown
/// `node` reported as an invalid entry point.
pub fn reroute_from_node<O>(
    optimizer: &O,
    node: impl Into<NodeKey>,
    request: &RouteRequest,
) -> Result<RouteResult, OptimizeError>
where
    O: RouteOptimizer + ?Sized,
{
    optimizer.optimize(&request.clone().restarted_from(node))
}

/// Plan `request` once per strategy.
///
/// # Errors
/// Returns the first [`OptimizeError`] raised.
pub fn compare_strategies<O>(
    optimizer: &O,
    request: &RouteRequest,
) -> Result<BTreeMap<Strategy, RouteResult>, OptimizeError>
where
    O: RouteOptimizer + ?Sized,
{
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let result = optimizer.optimize(&request.clone().with_strategy(strategy))?;
            Ok((strategy, result))
        })
        .collect()
}

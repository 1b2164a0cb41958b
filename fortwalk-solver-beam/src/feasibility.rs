//! Round-trip feasibility.
//!
//! Before a path may step to a location, the planner checks that the walk
//! home from there still fits the budget. Return times are cached per
//! location for the lifetime of one planning call; an unreachable entry is
//! cached as `None`.

use std::collections::BTreeMap;

use fortwalk_core::{Adjacency, NodeKey};

/// Cached shortest walks from any location back to the entry point.
pub(crate) struct ReturnLegs<'a> {
    adjacency: &'a Adjacency,
    entry: &'a NodeKey,
    max_difficulty: u8,
    cache: BTreeMap<NodeKey, Option<f64>>,
}

impl<'a> ReturnLegs<'a> {
    pub(crate) const fn new(adjacency: &'a Adjacency, entry: &'a NodeKey, max_difficulty: u8) -> Self {
        Self {
            adjacency,
            entry,
            max_difficulty,
            cache: BTreeMap::new(),
        }
    }

    /// Minutes needed to walk from `from` back to the entry point.
    pub(crate) fn minutes(&mut self, from: &NodeKey) -> Option<f64> {
        if let Some(known) = self.cache.get(from) {
            return *known;
        }
        let minutes = self
            .adjacency
            .shortest_path(from.as_str(), self.entry.as_str(), self.max_difficulty)
            .map(|walk| walk.total_minutes);
        self.cache.insert(from.clone(), minutes);
        minutes
    }

    /// Whether a visitor who will have spent `forward` minutes on reaching
    /// and visiting `node` can still get home within `budget`.
    #[expect(
        clippy::float_arithmetic,
        reason = "feasibility compares floating-point minute totals"
    )]
    pub(crate) fn allows(&mut self, node: &NodeKey, forward: f64, budget: f64) -> bool {
        let Some(back) = self.minutes(node) else {
            log::trace!("return check {node}: no way back to {}", self.entry);
            return false;
        };
        let total = forward + back;
        let allowed = total <= budget;
        log::trace!(
            "return check {node}: forward {forward:.1} + return {back:.1} = {total:.1} of {budget} min, allowed: {allowed}"
        );
        allowed
    }
}

//! Partial routes explored by the beam.

use std::collections::BTreeSet;

use fortwalk_core::NodeKey;

/// An immutable partial route and its running totals.
///
/// Extending a path yields a new path; the original is left untouched so
/// several expansions can share a parent. The visited set always holds
/// exactly the keys present in the route.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchPath {
    current: NodeKey,
    route: Vec<NodeKey>,
    hop_walks: Vec<f64>,
    visited: BTreeSet<NodeKey>,
    importance: f64,
    walk_minutes: f64,
    visit_minutes: f64,
    score: f64,
}

impl SearchPath {
    /// A path standing at `entry` having just visited it.
    pub(crate) fn seed(entry: NodeKey, importance: f64, visit_minutes: f64) -> Self {
        Self {
            current: entry.clone(),
            visited: BTreeSet::from([entry.clone()]),
            route: vec![entry],
            hop_walks: Vec::new(),
            importance,
            walk_minutes: 0.0,
            visit_minutes,
            score: 0.0,
        }
    }

    /// Walk to `next` and visit it.
    #[expect(
        clippy::float_arithmetic,
        reason = "path totals accumulate floating-point minutes and importance"
    )]
    pub(crate) fn extend(&self, next: &NodeKey, walk: f64, visit: f64, importance: f64) -> Self {
        let mut route = self.route.clone();
        route.push(next.clone());
        let mut hop_walks = self.hop_walks.clone();
        hop_walks.push(walk);
        let mut visited = self.visited.clone();
        visited.insert(next.clone());
        Self {
            current: next.clone(),
            route,
            hop_walks,
            visited,
            importance: self.importance + importance,
            walk_minutes: self.walk_minutes + walk,
            visit_minutes: self.visit_minutes + visit,
            score: 0.0,
        }
    }

    /// Walk back to `entry` without visiting it again.
    pub(crate) fn close(&self, entry: &NodeKey, walk: f64) -> Self {
        self.extend(entry, walk, 0.0, 0.0)
    }

    /// Attach a strategy score.
    pub(crate) const fn scored(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub(crate) fn route(&self) -> &[NodeKey] {
        &self.route
    }

    /// Walking minutes of each hop, aligned with `route()[1..]`.
    pub(crate) fn hop_walks(&self) -> &[f64] {
        &self.hop_walks
    }

    /// Where the path currently stands.
    pub(crate) const fn last(&self) -> &NodeKey {
        &self.current
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.visited.contains(key)
    }

    pub(crate) const fn importance(&self) -> f64 {
        self.importance
    }

    pub(crate) const fn walk_minutes(&self) -> f64 {
        self.walk_minutes
    }

    pub(crate) const fn visit_minutes(&self) -> f64 {
        self.visit_minutes
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "total time is the sum of walking and visiting minutes"
    )]
    pub(crate) fn total_minutes(&self) -> f64 {
        self.walk_minutes + self.visit_minutes
    }

    pub(crate) const fn score(&self) -> f64 {
        self.score
    }
}

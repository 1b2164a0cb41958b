//! Dijkstra search over walking time.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use super::Adjacency;
use crate::NodeKey;

/// Quickest walk between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Locations along the walk, both endpoints included.
    pub path: Vec<NodeKey>,
    /// Sum of the walking minutes of every edge on the walk.
    pub total_minutes: f64,
}

/// Frontier entry ordered so the heap pops the cheapest, then smallest key.
#[derive(Debug)]
struct Frontier {
    minutes: f64,
    key: NodeKey,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .minutes
            .total_cmp(&self.minutes)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl Adjacency {
    /// Quickest walk from `from` to `to` avoiding edges harder than
    /// `max_difficulty`.
    ///
    /// Returns `None` when `to` cannot be reached; that is an ordinary
    /// outcome for callers to branch on. Equal-cost frontiers are expanded in
    /// key order, so the chosen walk is the same on every call.
    ///
    /// # Examples
    /// ```
    /// use fortwalk_core::{Adjacency, Edge};
    ///
    /// let edges = [
    ///     Edge::new("a", "b", 5.0, 2),
    ///     Edge::new("b", "c", 5.0, 2),
    ///     Edge::new("a", "c", 20.0, 2),
    /// ];
    /// let adjacency = Adjacency::from_edges(&edges);
    ///
    /// let walk = adjacency.shortest_path("a", "c", 10).unwrap();
    /// assert_eq!(walk.path, ["a", "b", "c"]);
    /// assert_eq!(walk.total_minutes, 10.0);
    /// assert!(adjacency.shortest_path("a", "z", 10).is_none());
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "walking times accumulate as floating-point minutes"
    )]
    pub fn shortest_path(&self, from: &str, to: &str, max_difficulty: u8) -> Option<ShortestPath> {
        let mut best: BTreeMap<NodeKey, f64> = BTreeMap::from([(NodeKey::from(from), 0.0)]);
        let mut previous: BTreeMap<NodeKey, NodeKey> = BTreeMap::new();
        let mut settled: BTreeSet<NodeKey> = BTreeSet::new();
        let mut frontier = BinaryHeap::from([Frontier {
            minutes: 0.0,
            key: NodeKey::from(from),
        }]);

        while let Some(Frontier { minutes, key }) = frontier.pop() {
            if key == to {
                return Some(ShortestPath {
                    path: trace_back(&previous, key),
                    total_minutes: minutes,
                });
            }
            if !settled.insert(key.clone()) {
                continue;
            }
            for neighbour in self.neighbours(key.as_str()) {
                if !neighbour.passable(max_difficulty) {
                    continue;
                }
                let candidate = minutes + neighbour.walking_minutes;
                let improves = best
                    .get(&neighbour.to)
                    .is_none_or(|&known| candidate < known);
                if improves {
                    best.insert(neighbour.to.clone(), candidate);
                    previous.insert(neighbour.to.clone(), key.clone());
                    frontier.push(Frontier {
                        minutes: candidate,
                        key: neighbour.to.clone(),
                    });
                }
            }
        }
        None
    }
}

fn trace_back(previous: &BTreeMap<NodeKey, NodeKey>, end: NodeKey) -> Vec<NodeKey> {
    let mut path = vec![end];
    while let Some(step) = path.last().and_then(|key| previous.get(key)) {
        path.push(step.clone());
    }
    path.reverse();
    path
}

//! Neighbour lists built from an undirected edge list.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::{Edge, NodeKey};

/// One directed half of an [`Edge`], as seen from its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour {
    /// Location at the far end of the edge.
    pub to: NodeKey,
    /// Time needed to walk the edge, in minutes.
    pub walking_minutes: f64,
    /// Strenuousness of the edge, `0..=10`.
    pub difficulty: u8,
}

impl Neighbour {
    /// Whether the edge may be walked under `max_difficulty`.
    #[must_use]
    pub const fn passable(&self, max_difficulty: u8) -> bool {
        self.difficulty <= max_difficulty
    }
}

/// Per-location neighbour lists for a walking graph.
///
/// Every edge contributes one [`Neighbour`] to each endpoint. Duplicate edges
/// are kept as they are; shortest-path queries simply take the cheaper one.
///
/// # Examples
/// ```
/// use fortwalk_core::{Adjacency, Edge};
///
/// let edges = [Edge::new("gate", "temple", 6.0, 2), Edge::new("temple", "tower", 4.0, 9)];
/// let adjacency = Adjacency::from_edges(&edges);
///
/// assert_eq!(adjacency.neighbours("temple").len(), 2);
/// let reachable = adjacency.reachable_from("gate", 6);
/// assert!(reachable.contains("temple"));
/// assert!(!reachable.contains("tower"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    neighbours: BTreeMap<NodeKey, Vec<Neighbour>>,
}

impl Adjacency {
    /// Expand undirected edges into neighbour lists.
    #[must_use]
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut neighbours: BTreeMap<NodeKey, Vec<Neighbour>> = BTreeMap::new();
        for edge in edges {
            neighbours.entry(edge.from.clone()).or_default().push(Neighbour {
                to: edge.to.clone(),
                walking_minutes: edge.walking_minutes,
                difficulty: edge.difficulty,
            });
            neighbours.entry(edge.to.clone()).or_default().push(Neighbour {
                to: edge.from.clone(),
                walking_minutes: edge.walking_minutes,
                difficulty: edge.difficulty,
            });
        }
        Self { neighbours }
    }

    /// Neighbours of `key`, in edge-list order. Unknown keys have none.
    #[must_use]
    pub fn neighbours(&self, key: &str) -> &[Neighbour] {
        self.neighbours.get(key).map_or(&[], Vec::as_slice)
    }

    /// Number of locations touched by at least one edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether the graph has no edges at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Every location reachable from `start` without crossing an edge harder
    /// than `max_difficulty`.
    ///
    /// The result always contains `start` itself, even when `start` has no
    /// edges.
    #[must_use]
    pub fn reachable_from(&self, start: &str, max_difficulty: u8) -> BTreeSet<NodeKey> {
        let mut reachable = BTreeSet::from([NodeKey::from(start)]);
        let mut queue = VecDeque::from([NodeKey::from(start)]);
        while let Some(current) = queue.pop_front() {
            for neighbour in self.neighbours(current.as_str()) {
                if neighbour.passable(max_difficulty) && reachable.insert(neighbour.to.clone()) {
                    queue.push_back(neighbour.to.clone());
                }
            }
        }
        reachable
    }
}

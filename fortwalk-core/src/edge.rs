//! Walking paths between locations.

use crate::NodeKey;

/// An undirected walking path joining two locations.
///
/// Both directions share the same walking time and difficulty.
///
/// # Examples
/// ```
/// use fortwalk_core::Edge;
///
/// let edge = Edge::new("gate", "temple", 6.0, 2);
/// assert!(edge.connects("temple"));
/// assert_eq!(edge.other_end("temple").map(|k| k.as_str()), Some("gate"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint.
    pub from: NodeKey,
    /// Second endpoint.
    pub to: NodeKey,
    /// Time needed to walk the path, in minutes.
    pub walking_minutes: f64,
    /// Strenuousness of the path, `0..=10`.
    pub difficulty: u8,
}

impl Edge {
    /// Construct an edge between two locations.
    #[must_use]
    pub fn new(
        from: impl Into<NodeKey>,
        to: impl Into<NodeKey>,
        walking_minutes: f64,
        difficulty: u8,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            walking_minutes,
            difficulty,
        }
    }

    /// Whether `key` is one of the endpoints.
    #[must_use]
    pub fn connects(&self, key: &str) -> bool {
        self.from == key || self.to == key
    }

    /// The endpoint opposite `key`, if `key` is an endpoint.
    #[must_use]
    pub fn other_end(&self, key: &str) -> Option<&NodeKey> {
        if self.from == key {
            Some(&self.to)
        } else if self.to == key {
            Some(&self.from)
        } else {
            None
        }
    }
}

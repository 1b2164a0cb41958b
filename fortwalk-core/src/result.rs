//! Planned routes and the metrics describing them.

use crate::{Location, NodeKey, Strategy};

/// Aggregate figures for a planned route.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    /// Minutes spent at locations.
    pub visit_minutes: f64,
    /// Minutes spent walking, the closing leg included.
    pub walk_minutes: f64,
    /// `visit_minutes + walk_minutes`.
    pub total_minutes: f64,
    /// Sum of the importance of every distinct stop.
    pub cultural_score: f64,
    /// Share of the budget used, `total_minutes / time_available`.
    pub time_utilisation: f64,
}

/// One hop of the final route and why it was taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionLogEntry {
    /// Zero-based position of the hop.
    pub step: usize,
    /// Stop the hop leaves.
    pub from: NodeKey,
    /// Stop the hop reaches.
    pub to: NodeKey,
    /// Walking minutes of the hop.
    pub walk_minutes: f64,
    /// Visit minutes at `to`; zero for the closing hop.
    pub visit_minutes: f64,
    /// Strategy score of the whole route.
    pub score: f64,
}

/// A planned walk.
///
/// `stops` begins at the entry point. Once at least one other stop is
/// visited it also ends there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// Strategy that produced the route.
    pub strategy: Strategy,
    /// Ordered stop keys.
    pub stops: Vec<NodeKey>,
    /// Location snapshots in stop order.
    pub locations: Vec<Location>,
    /// Aggregate figures.
    pub metrics: RouteMetrics,
    /// One entry per hop.
    pub decision_log: Vec<DecisionLogEntry>,
}

impl RouteResult {
    /// Ordered stop keys; an alias of [`RouteResult::stops`].
    #[must_use]
    pub fn route(&self) -> &[NodeKey] {
        &self.stops
    }

    /// Whether `key` appears anywhere on the route.
    #[must_use]
    pub fn visits(&self, key: &str) -> bool {
        self.stops.iter().any(|stop| stop == key)
    }

    /// Whether the route returns to where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Number of stops, the closing return included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

//! Route planning requests.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{EnergyLevel, FortGraph, NodeKey, Strategy};

/// Number of partial routes kept between expansion rounds by default.
pub const DEFAULT_BEAM_WIDTH: usize = 3;

/// Parameters for one planning call.
///
/// # Examples
/// ```
/// use fortwalk_core::{EnergyLevel, RouteRequest, Strategy};
///
/// let request = RouteRequest::new("gate", 90.0)
///     .with_energy_level(EnergyLevel::Low)
///     .with_strategy(Strategy::MinWalking)
///     .with_previous_visited(["temple"]);
///
/// let detour = request.clone().forcing("tower");
/// assert_eq!(detour.forced_node.as_ref().map(|k| k.as_str()), Some("tower"));
///
/// let restart = request.restarted_from("well");
/// assert_eq!(restart.entry_point, "well");
/// assert!(restart.previous_visited.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Where the walk starts and must finish.
    pub entry_point: NodeKey,
    /// Time budget in minutes, covering both walking and visiting.
    pub time_available_minutes: f64,
    /// Visitor energy, bounding edge difficulty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_level: EnergyLevel,
    /// Objective to optimise.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: Strategy,
    /// Locations seen earlier in the session; never offered as new stops.
    #[cfg_attr(feature = "serde", serde(default))]
    pub previous_visited: BTreeSet<NodeKey>,
    /// Location the route should include if any feasible route can.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub forced_node: Option<NodeKey>,
    /// Partial routes kept between expansion rounds.
    #[cfg_attr(feature = "serde", serde(default = "default_beam_width"))]
    pub beam_width: usize,
}

#[cfg(feature = "serde")]
const fn default_beam_width() -> usize {
    DEFAULT_BEAM_WIDTH
}

/// Reasons a [`RouteRequest`] cannot be planned against a fort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteRequestValidationError {
    /// The budget was zero, negative or not finite.
    #[error("time budget must be a positive number of minutes, got {minutes}")]
    NonPositiveBudget {
        /// Value that was supplied.
        minutes: f64,
    },
    /// A beam of width zero can hold no routes.
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,
    /// The entry point is not a location of the fort.
    #[error("entry point {key} is not a location of the fort")]
    UnknownEntryPoint {
        /// Key that was requested.
        key: NodeKey,
    },
    /// The budget does not even cover the visit at the entry point.
    #[error("time budget of {budget} minutes cannot cover the {visit} minute visit at {key}")]
    BudgetBelowEntryVisit {
        /// Entry point key.
        key: NodeKey,
        /// Visit time at the entry point.
        visit: f64,
        /// Requested budget.
        budget: f64,
    },
}

impl RouteRequest {
    /// Request a balanced, medium-energy walk from `entry_point`.
    #[must_use]
    pub fn new(entry_point: impl Into<NodeKey>, time_available_minutes: f64) -> Self {
        Self {
            entry_point: entry_point.into(),
            time_available_minutes,
            energy_level: EnergyLevel::default(),
            strategy: Strategy::default(),
            previous_visited: BTreeSet::new(),
            forced_node: None,
            beam_width: DEFAULT_BEAM_WIDTH,
        }
    }

    /// Set the visitor's energy level.
    #[must_use]
    pub const fn with_energy_level(mut self, energy_level: EnergyLevel) -> Self {
        self.energy_level = energy_level;
        self
    }

    /// Set the planning strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the set of locations already visited this session.
    #[must_use]
    pub fn with_previous_visited<I, K>(mut self, visited: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<NodeKey>,
    {
        self.previous_visited = visited.into_iter().map(Into::into).collect();
        self
    }

    /// Ask for `node` to be included when feasible.
    #[must_use]
    pub fn with_forced_node(mut self, node: impl Into<NodeKey>) -> Self {
        self.forced_node = Some(node.into());
        self
    }

    /// Set the beam width.
    #[must_use]
    pub const fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    /// The same request with `node` forced into the route.
    ///
    /// Entry point and session history are kept.
    #[must_use]
    pub fn forcing(self, node: impl Into<NodeKey>) -> Self {
        self.with_forced_node(node)
    }

    /// A fresh request starting at `node`.
    ///
    /// Session history and any forced node are discarded; budget, energy,
    /// strategy and beam width are kept.
    #[must_use]
    pub fn restarted_from(mut self, node: impl Into<NodeKey>) -> Self {
        self.entry_point = node.into();
        self.previous_visited.clear();
        self.forced_node = None;
        self
    }

    /// Check the request against `fort`.
    ///
    /// An unknown forced node is not an error; planners ignore it with a
    /// warning.
    ///
    /// # Errors
    /// Returns the first [`RouteRequestValidationError`] found.
    pub fn validate_for(&self, fort: &FortGraph) -> Result<(), RouteRequestValidationError> {
        let budget = self.time_available_minutes;
        if !budget.is_finite() || budget <= 0.0 {
            return Err(RouteRequestValidationError::NonPositiveBudget { minutes: budget });
        }
        if self.beam_width == 0 {
            return Err(RouteRequestValidationError::ZeroBeamWidth);
        }
        let Some(entry) = fort.location(self.entry_point.as_str()) else {
            return Err(RouteRequestValidationError::UnknownEntryPoint {
                key: self.entry_point.clone(),
            });
        };
        if entry.visit_minutes > budget {
            return Err(RouteRequestValidationError::BudgetBelowEntryVisit {
                key: self.entry_point.clone(),
                visit: entry.visit_minutes,
                budget,
            });
        }
        Ok(())
    }
}

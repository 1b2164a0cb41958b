//! Importance scoring for locations.
//!
//! Importance is the single value signal every planning strategy consumes.
//! The default composite weights historical significance slightly above the
//! spiritual and architectural sub-scores.

use crate::Location;

/// Compute the importance of a location.
///
/// Implementations must be thread-safe so one scorer can back concurrent
/// planning calls, and must return finite values for validated locations.
///
/// # Examples
/// ```
/// use fortwalk_core::{ImportanceScorer, Location};
///
/// struct Flat;
///
/// impl ImportanceScorer for Flat {
///     fn importance(&self, _location: &Location) -> f64 {
///         1.0
///     }
/// }
///
/// assert_eq!(Flat.importance(&Location::new("gate", "Gate")), 1.0);
/// ```
pub trait ImportanceScorer: Send + Sync {
    /// Return the importance of `location`.
    fn importance(&self, location: &Location) -> f64;
}

/// Weights applied to the three location sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceWeights {
    /// Multiplier for the historical score.
    pub historical: f64,
    /// Multiplier for the spiritual score.
    pub spiritual: f64,
    /// Multiplier for the architectural score.
    pub architectural: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            historical: 0.4,
            spiritual: 0.3,
            architectural: 0.3,
        }
    }
}

impl ImportanceWeights {
    /// Weighted sum of the sub-scores, rounded to two decimal places.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "importance is a weighted floating-point composite"
    )]
    pub fn apply(&self, location: &Location) -> f64 {
        let raw = location.historical_score * self.historical
            + location.spiritual_score * self.spiritual
            + location.architectural_score * self.architectural;
        (raw * 100.0).round() / 100.0
    }
}

/// Default [`ImportanceScorer`] backed by [`ImportanceWeights`].
///
/// # Examples
/// ```
/// use fortwalk_core::{ImportanceScorer, Location, WeightedImportance};
///
/// let gate = Location::new("gate", "Main Gate").with_scores(9.0, 3.0, 8.0);
/// assert_eq!(WeightedImportance::default().importance(&gate), 6.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedImportance {
    weights: ImportanceWeights,
}

impl WeightedImportance {
    /// Build a scorer from explicit weights.
    #[must_use]
    pub const fn new(weights: ImportanceWeights) -> Self {
        Self { weights }
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ImportanceWeights {
        self.weights
    }
}

impl ImportanceScorer for WeightedImportance {
    fn importance(&self, location: &Location) -> f64 {
        self.weights.apply(location)
    }
}

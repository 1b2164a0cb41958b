//! Points of interest inside a fort and the keys that identify them.

use std::borrow::Borrow;
use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Upper bound shared by every `0..=10` rating in the model.
pub const RATING_MAX: u8 = 10;

/// Stable identifier of a [`Location`], unique within one fort.
///
/// Keys order lexicographically. Planners rely on that order whenever they
/// need a reproducible choice between otherwise equal options.
///
/// # Examples
/// ```
/// use fortwalk_core::NodeKey;
///
/// let gate = NodeKey::from("gate");
/// assert_eq!(gate.as_str(), "gate");
/// assert!(NodeKey::from("bastion") < gate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeKey(String);

impl NodeKey {
    /// Wrap an owned string as a key.
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self(key)
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One point of interest inside a fort.
///
/// The three sub-scores feed the importance composite; `walking_effort`
/// rates how strenuous the location itself is to reach and explore.
/// `position` is a display coordinate only and never influences planning.
///
/// # Examples
/// ```
/// use fortwalk_core::Location;
///
/// let temple = Location::new("temple", "Hill Temple")
///     .with_scores(9.0, 10.0, 6.0)
///     .with_walking_effort(4)
///     .with_visit_minutes(10.0);
///
/// assert!(temple.validate().is_ok());
/// assert_eq!(temple.importance(), 8.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique key within the fort.
    pub id: NodeKey,
    /// Human-readable name.
    pub name: String,
    /// Historical significance, `0..=10`.
    pub historical_score: f64,
    /// Spiritual significance, `0..=10`.
    pub spiritual_score: f64,
    /// Architectural significance, `0..=10`.
    pub architectural_score: f64,
    /// Physical effort needed to reach and explore the location, `0..=10`.
    pub walking_effort: u8,
    /// Average time spent at the location, in minutes.
    pub visit_minutes: f64,
    /// Display position on the fort map.
    #[cfg_attr(feature = "serde", serde(default = "origin"))]
    pub position: Coord<f64>,
    /// Optional short description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

#[cfg(feature = "serde")]
const fn origin() -> Coord<f64> {
    Coord { x: 0.0, y: 0.0 }
}

/// Errors returned by [`Location::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// A sub-score was outside `0..=10` or not finite.
    #[error("{field} of location {key} must be within 0..=10, got {value}")]
    ScoreOutOfRange {
        /// Location carrying the bad score.
        key: NodeKey,
        /// Name of the offending sub-score.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
    },
    /// Walking effort exceeded the rating scale.
    #[error("walking effort of location {key} must be within 0..=10, got {effort}")]
    EffortOutOfRange {
        /// Location carrying the bad rating.
        key: NodeKey,
        /// Value that was supplied.
        effort: u8,
    },
    /// Visit duration was negative or not finite.
    #[error("visit time of location {key} must be a finite, non-negative number of minutes, got {minutes}")]
    InvalidVisitTime {
        /// Location carrying the bad duration.
        key: NodeKey,
        /// Value that was supplied.
        minutes: f64,
    },
}

impl Location {
    /// Construct a location with zeroed scores, effort and visit time.
    #[must_use]
    pub fn new(id: impl Into<NodeKey>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            historical_score: 0.0,
            spiritual_score: 0.0,
            architectural_score: 0.0,
            walking_effort: 0,
            visit_minutes: 0.0,
            position: Coord { x: 0.0, y: 0.0 },
            description: None,
        }
    }

    /// Set the historical, spiritual and architectural sub-scores.
    #[must_use]
    pub const fn with_scores(mut self, historical: f64, spiritual: f64, architectural: f64) -> Self {
        self.historical_score = historical;
        self.spiritual_score = spiritual;
        self.architectural_score = architectural;
        self
    }

    /// Set the walking-effort rating.
    #[must_use]
    pub const fn with_walking_effort(mut self, effort: u8) -> Self {
        self.walking_effort = effort;
        self
    }

    /// Set the average visit duration in minutes.
    #[must_use]
    pub const fn with_visit_minutes(mut self, minutes: f64) -> Self {
        self.visit_minutes = minutes;
        self
    }

    /// Set the display position.
    #[must_use]
    pub const fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Coord { x, y };
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Composite importance using the default weights.
    ///
    /// See [`WeightedImportance`](crate::WeightedImportance) for the formula.
    #[must_use]
    pub fn importance(&self) -> f64 {
        crate::importance::ImportanceWeights::default().apply(self)
    }

    /// Check every attribute against its documented range.
    ///
    /// # Errors
    /// Returns the first [`LocationError`] encountered.
    pub fn validate(&self) -> Result<(), LocationError> {
        for (field, value) in [
            ("historical score", self.historical_score),
            ("spiritual score", self.spiritual_score),
            ("architectural score", self.architectural_score),
        ] {
            if !(0.0..=f64::from(RATING_MAX)).contains(&value) {
                return Err(LocationError::ScoreOutOfRange {
                    key: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        if self.walking_effort > RATING_MAX {
            return Err(LocationError::EffortOutOfRange {
                key: self.id.clone(),
                effort: self.walking_effort,
            });
        }
        if !self.visit_minutes.is_finite() || self.visit_minutes < 0.0 {
            return Err(LocationError::InvalidVisitTime {
                key: self.id.clone(),
                minutes: self.visit_minutes,
            });
        }
        Ok(())
    }
}

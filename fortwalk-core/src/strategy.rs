//! Planning strategies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Objective the planner optimises for.
///
/// # Examples
/// ```
/// use fortwalk_core::Strategy;
///
/// let strategy: Strategy = "max_culture".parse().unwrap();
/// assert_eq!(strategy, Strategy::MaxCulture);
/// assert!("scenic".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Importance per minute spent.
    #[default]
    Balanced,
    /// Raw cultural value, lightly penalising walking.
    MaxCulture,
    /// Least walking, importance only breaking ties.
    MinWalking,
}

/// Raised when a strategy identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {raw:?}; expected balanced, max_culture or min_walking")]
pub struct UnknownStrategyError {
    /// Identifier that failed to parse.
    pub raw: String,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::MaxCulture, Self::MinWalking];

    /// Snake-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::MaxCulture => "max_culture",
            Self::MinWalking => "min_walking",
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownStrategyError {
                raw: raw.to_owned(),
            })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

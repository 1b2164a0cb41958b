//! Visitor energy levels and the difficulty ceilings they imply.

use std::fmt;

/// How much exertion the visitor is prepared for.
///
/// Each level maps to the hardest path difficulty the planner may use.
/// Parsing is deliberately lenient: any unrecognised label falls back to
/// [`EnergyLevel::Medium`].
///
/// # Examples
/// ```
/// use fortwalk_core::EnergyLevel;
///
/// assert_eq!(EnergyLevel::parse_lenient("HIGH"), EnergyLevel::High);
/// assert_eq!(EnergyLevel::parse_lenient("sprightly"), EnergyLevel::Medium);
/// assert_eq!(EnergyLevel::Low.max_difficulty(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum EnergyLevel {
    /// Gentle paths only; strenuous locations are skipped entirely.
    Low,
    /// Moderate paths.
    #[default]
    Medium,
    /// Any path.
    High,
}

/// Locations rated above this effort are excluded for low-energy visitors.
pub(crate) const LOW_ENERGY_MAX_EFFORT: u8 = 5;

impl EnergyLevel {
    /// Hardest edge difficulty the visitor can traverse.
    #[must_use]
    pub const fn max_difficulty(self) -> u8 {
        match self {
            Self::Low => 3,
            Self::Medium => 6,
            Self::High => 10,
        }
    }

    /// Whether a location with the given walking effort suits this level.
    #[must_use]
    pub const fn admits_effort(self, walking_effort: u8) -> bool {
        match self {
            Self::Low => walking_effort <= LOW_ENERGY_MAX_EFFORT,
            Self::Medium | Self::High => true,
        }
    }

    /// Lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a label case-insensitively, defaulting to `Medium`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => {
                log::warn!("unrecognised energy level {raw:?}; using medium");
                Self::Medium
            }
        }
    }
}

impl From<String> for EnergyLevel {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

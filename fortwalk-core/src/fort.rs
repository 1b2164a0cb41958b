//! Validated fort graphs.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Adjacency, Edge, Location, LocationError, NodeKey, RATING_MAX};

/// Errors raised while assembling a [`FortGraph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FortGraphError {
    /// Two locations share a key.
    #[error("location {key} is defined more than once")]
    DuplicateLocation {
        /// Repeated key.
        key: NodeKey,
    },
    /// An edge names a location that does not exist.
    #[error("edge {from} -> {to} references unknown location {missing}")]
    UnknownEdgeEndpoint {
        /// First endpoint of the edge.
        from: NodeKey,
        /// Second endpoint of the edge.
        to: NodeKey,
        /// The endpoint that could not be found.
        missing: NodeKey,
    },
    /// An edge has a negative or non-finite walking time.
    #[error("edge {from} -> {to} has invalid walking time {minutes}")]
    InvalidWalkingTime {
        /// First endpoint of the edge.
        from: NodeKey,
        /// Second endpoint of the edge.
        to: NodeKey,
        /// Value that was supplied.
        minutes: f64,
    },
    /// An edge difficulty exceeded the rating scale.
    #[error("edge {from} -> {to} has difficulty {difficulty}, above 10")]
    DifficultyOutOfRange {
        /// First endpoint of the edge.
        from: NodeKey,
        /// Second endpoint of the edge.
        to: NodeKey,
        /// Value that was supplied.
        difficulty: u8,
    },
    /// A location failed its own validation.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// The declared default entry point is not one of the locations.
    #[error("default entry point {key} is not a location of the fort")]
    UnknownDefaultEntry {
        /// Key that was declared.
        key: NodeKey,
    },
}

/// A fort: its locations and the walking paths between them.
///
/// Construction validates every location and edge, so planners may assume
/// keys resolve and ratings sit within range. Locations iterate in key order.
///
/// # Examples
/// ```
/// use fortwalk_core::{Edge, FortGraph, Location};
///
/// let fort = FortGraph::new(
///     "demo",
///     "Demo Fort",
///     vec![
///         Location::new("gate", "Gate").with_visit_minutes(5.0),
///         Location::new("temple", "Temple").with_visit_minutes(10.0),
///     ],
///     vec![Edge::new("gate", "temple", 6.0, 2)],
/// )?
/// .with_default_entry("gate")?;
///
/// assert_eq!(fort.locations().count(), 2);
/// assert_eq!(fort.default_entry().map(|k| k.as_str()), Some("gate"));
/// # Ok::<(), fortwalk_core::FortGraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FortGraphSpec", into = "FortGraphSpec")
)]
pub struct FortGraph {
    id: String,
    name: String,
    default_entry: Option<NodeKey>,
    locations: BTreeMap<NodeKey, Location>,
    edges: Vec<Edge>,
}

impl FortGraph {
    /// Validate and assemble a fort graph.
    ///
    /// # Errors
    /// Returns [`FortGraphError`] when a location is invalid or repeated, or
    /// when an edge is malformed or names an unknown location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        locations: Vec<Location>,
        edges: Vec<Edge>,
    ) -> Result<Self, FortGraphError> {
        let mut by_key = BTreeMap::new();
        for location in locations {
            location.validate()?;
            let key = location.id.clone();
            if by_key.insert(key.clone(), location).is_some() {
                return Err(FortGraphError::DuplicateLocation { key });
            }
        }
        for edge in &edges {
            validate_edge(edge, &by_key)?;
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            default_entry: None,
            locations: by_key,
            edges,
        })
    }

    /// Declare where visitors normally enter the fort.
    ///
    /// # Errors
    /// Returns [`FortGraphError::UnknownDefaultEntry`] when `entry` is not a
    /// location of this fort.
    pub fn with_default_entry(mut self, entry: impl Into<NodeKey>) -> Result<Self, FortGraphError> {
        let key = entry.into();
        if !self.locations.contains_key(&key) {
            return Err(FortGraphError::UnknownDefaultEntry { key });
        }
        self.default_entry = Some(key);
        Ok(self)
    }

    /// Fort identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable fort name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Usual entry point, when declared.
    #[must_use]
    pub const fn default_entry(&self) -> Option<&NodeKey> {
        self.default_entry.as_ref()
    }

    /// Look up a location by key.
    #[must_use]
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    /// Whether `key` names a location of this fort.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.locations.contains_key(key)
    }

    /// Locations in key order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Walking paths in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Build neighbour lists for this fort's edges.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_edges(&self.edges)
    }
}

fn validate_edge(edge: &Edge, locations: &BTreeMap<NodeKey, Location>) -> Result<(), FortGraphError> {
    for endpoint in [&edge.from, &edge.to] {
        if !locations.contains_key(endpoint) {
            return Err(FortGraphError::UnknownEdgeEndpoint {
                from: edge.from.clone(),
                to: edge.to.clone(),
                missing: endpoint.clone(),
            });
        }
    }
    if !edge.walking_minutes.is_finite() || edge.walking_minutes < 0.0 {
        return Err(FortGraphError::InvalidWalkingTime {
            from: edge.from.clone(),
            to: edge.to.clone(),
            minutes: edge.walking_minutes,
        });
    }
    if edge.difficulty > RATING_MAX {
        return Err(FortGraphError::DifficultyOutOfRange {
            from: edge.from.clone(),
            to: edge.to.clone(),
            difficulty: edge.difficulty,
        });
    }
    Ok(())
}

/// Document form of a [`FortGraph`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FortGraphSpec {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entry_point: Option<NodeKey>,
    locations: Vec<Location>,
    #[serde(default)]
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl TryFrom<FortGraphSpec> for FortGraph {
    type Error = FortGraphError;

    fn try_from(spec: FortGraphSpec) -> Result<Self, Self::Error> {
        let graph = Self::new(spec.id, spec.name, spec.locations, spec.edges)?;
        match spec.entry_point {
            Some(entry) => graph.with_default_entry(entry),
            None => Ok(graph),
        }
    }
}

#[cfg(feature = "serde")]
impl From<FortGraph> for FortGraphSpec {
    fn from(graph: FortGraph) -> Self {
        Self {
            id: graph.id,
            name: graph.name,
            entry_point: graph.default_entry,
            locations: graph.locations.into_values().collect(),
            edges: graph.edges,
        }
    }
}

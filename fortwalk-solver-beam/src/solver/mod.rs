//! `BeamSolver`: the [`RouteOptimizer`] front for beam search.

use fortwalk_core::{
    FortGraph, ImportanceScorer, OptimizeError, RouteOptimizer, RouteRequest,
    RouteRequestValidationError, RouteResult, WeightedImportance,
};

use crate::beam::BeamSearch;

/// Configuration for [`BeamSolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct BeamSolverConfig {
    /// Upper bound on expansion rounds. When reached, the search stops and
    /// selects from the beam it has.
    pub max_expansion_rounds: usize,
    /// Share of the time budget that min-walking routes may spend walking,
    /// the walk home excluded.
    pub min_walking_walk_share: f64,
}

impl Default for BeamSolverConfig {
    fn default() -> Self {
        Self {
            max_expansion_rounds: 256,
            min_walking_walk_share: 0.35,
        }
    }
}

/// Beam-search planner over one fort.
///
/// Each call keeps the best `beam_width` partial routes per round, extends
/// them one stop at a time while a walk home still fits the budget, then
/// closes the winner back at the entry point. All working state is local to
/// the call, so a solver can be shared freely between threads.
///
/// # Examples
/// ```
/// use fortwalk_core::{Edge, FortGraph, Location, RouteOptimizer, RouteRequest};
/// use fortwalk_solver_beam::BeamSolver;
///
/// let spot = |key: &str, score: f64| {
///     Location::new(key, key)
///         .with_scores(score, score, score)
///         .with_walking_effort(2)
///         .with_visit_minutes(10.0)
/// };
/// let fort = FortGraph::new(
///     "triangle",
///     "Triangle",
///     vec![spot("A", 5.0), spot("B", 8.0), spot("C", 3.0)],
///     vec![
///         Edge::new("A", "B", 5.0, 2),
///         Edge::new("B", "C", 5.0, 2),
///         Edge::new("A", "C", 20.0, 2),
///     ],
/// )?;
///
/// let result = BeamSolver::new(fort).optimize(&RouteRequest::new("A", 40.0))?;
/// assert_eq!(result.stops, ["A", "B", "A"]);
/// assert_eq!(result.metrics.total_minutes, 30.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BeamSolver<C = WeightedImportance>
where
    C: ImportanceScorer,
{
    fort: FortGraph,
    scorer: C,
    config: BeamSolverConfig,
}

impl BeamSolver {
    /// Construct a solver with the default importance weights and
    /// configuration.
    #[must_use]
    pub fn new(fort: FortGraph) -> Self {
        Self::with_scorer(fort, WeightedImportance::default())
    }
}

impl<C> BeamSolver<C>
where
    C: ImportanceScorer,
{
    /// Construct a solver using a custom importance scorer.
    #[must_use]
    pub fn with_scorer(fort: FortGraph, scorer: C) -> Self {
        Self::with_config(fort, scorer, BeamSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(fort: FortGraph, scorer: C, config: BeamSolverConfig) -> Self {
        Self {
            fort,
            scorer,
            config,
        }
    }

    /// Fort the solver plans over.
    #[must_use]
    pub const fn fort(&self) -> &FortGraph {
        &self.fort
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BeamSolverConfig {
        &self.config
    }
}

impl<C> RouteOptimizer for BeamSolver<C>
where
    C: ImportanceScorer,
{
    fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizeError> {
        plan(&self.fort, &self.scorer, &self.config, request)
    }
}

/// Plan a single route over `fort` with default weights and configuration.
///
/// Convenient for one-off calls that do not need a long-lived solver.
///
/// # Errors
/// Returns [`OptimizeError::InvalidRequest`] when `request` fails validation
/// against `fort`.
pub fn optimize_route(fort: &FortGraph, request: &RouteRequest) -> Result<RouteResult, OptimizeError> {
    plan(
        fort,
        &WeightedImportance::default(),
        &BeamSolverConfig::default(),
        request,
    )
}

fn plan<C>(
    fort: &FortGraph,
    scorer: &C,
    config: &BeamSolverConfig,
    request: &RouteRequest,
) -> Result<RouteResult, OptimizeError>
where
    C: ImportanceScorer + ?Sized,
{
    request.validate_for(fort)?;
    let entry = fort.location(request.entry_point.as_str()).ok_or_else(|| {
        RouteRequestValidationError::UnknownEntryPoint {
            key: request.entry_point.clone(),
        }
    })?;
    let adjacency = fort.adjacency();
    let mut search = BeamSearch::new(fort, scorer, config, request, &adjacency, entry);
    let best = search.run();
    Ok(search.finish(best))
}

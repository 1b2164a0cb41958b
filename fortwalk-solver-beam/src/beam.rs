//! State and steps of one beam-search planning call.
//!
//! A search owns everything scoped to a single request: the candidate pool,
//! the resolved forced node and the return-leg cache. Nothing here outlives
//! the call that created it.

use fortwalk_core::{
    Adjacency, DecisionLogEntry, FortGraph, ImportanceScorer, Location, NodeKey, RouteMetrics,
    RouteRequest, RouteResult, Strategy,
};

use crate::feasibility::ReturnLegs;
use crate::objective::{score, select_best};
use crate::path::SearchPath;
use crate::solver::BeamSolverConfig;

/// A location the search may add to a route.
struct Candidate<'a> {
    location: &'a Location,
    importance: f64,
}

/// The location every viable route must pass through, when one is set.
struct ForcedStop {
    key: NodeKey,
    visit_minutes: f64,
}

pub(crate) struct BeamSearch<'a> {
    fort: &'a FortGraph,
    request: &'a RouteRequest,
    config: &'a BeamSolverConfig,
    adjacency: &'a Adjacency,
    entry: &'a Location,
    entry_importance: f64,
    max_difficulty: u8,
    walk_cap: Option<f64>,
    candidates: Vec<Candidate<'a>>,
    forced: Option<ForcedStop>,
    legs: ReturnLegs<'a>,
}

impl<'a> BeamSearch<'a> {
    /// Prepare a search for an already validated request.
    #[expect(
        clippy::float_arithmetic,
        reason = "the min-walking cap is a floating-point share of the budget"
    )]
    pub(crate) fn new<C>(
        fort: &'a FortGraph,
        scorer: &C,
        config: &'a BeamSolverConfig,
        request: &'a RouteRequest,
        adjacency: &'a Adjacency,
        entry: &'a Location,
    ) -> Self
    where
        C: ImportanceScorer + ?Sized,
    {
        let max_difficulty = request.energy_level.max_difficulty();
        let reachable = adjacency.reachable_from(entry.id.as_str(), max_difficulty);
        let candidates: Vec<Candidate<'a>> = fort
            .locations()
            .filter(|location| {
                reachable.contains(&location.id)
                    && !request.previous_visited.contains(&location.id)
                    && location.id != entry.id
                    && request.energy_level.admits_effort(location.walking_effort)
            })
            .map(|location| Candidate {
                location,
                importance: scorer.importance(location),
            })
            .collect();

        let walk_cap = (request.strategy == Strategy::MinWalking)
            .then_some(request.time_available_minutes * config.min_walking_walk_share);
        let forced = resolve_forced(request, entry, &candidates);

        log::debug!(
            "planning {} route from {} within {} min at {} energy (difficulty <= {max_difficulty}), beam width {}, {} candidate stop(s)",
            request.strategy,
            entry.id,
            request.time_available_minutes,
            request.energy_level,
            request.beam_width,
            candidates.len(),
        );
        if let Some(cap) = walk_cap {
            log::debug!("walking capped at {cap:.1} min");
        }

        Self {
            fort,
            request,
            config,
            adjacency,
            entry,
            entry_importance: scorer.importance(entry),
            max_difficulty,
            walk_cap,
            candidates,
            forced,
            legs: ReturnLegs::new(adjacency, &entry.id, max_difficulty),
        }
    }

    /// Run expansion rounds until nothing can grow, then pick the winner.
    pub(crate) fn run(&mut self) -> SearchPath {
        let mut beam = vec![self.seed()];
        let mut round = 0_usize;
        loop {
            if round == self.config.max_expansion_rounds {
                log::warn!(
                    "stopped after {round} expansion rounds; using the best routes found so far"
                );
                break;
            }
            round += 1;

            let (expanded, stalled) = self.expand(&beam);
            if expanded.is_empty() {
                log::debug!("round {round}: no feasible expansion from {} route(s); stopping", beam.len());
                break;
            }
            let mut pool = expanded;
            pool.extend(stalled);
            beam = self.prune(round, pool);
        }
        self.select(beam)
    }

    /// Close `best` into a round trip and describe it.
    pub(crate) fn finish(&mut self, best: SearchPath) -> RouteResult {
        let closed = self.close(best);
        if closed.route().len() == 1 {
            log::warn!(
                "no stop fits within {} min; returning {} only",
                self.request.time_available_minutes,
                self.entry.id
            );
        }

        let strategy = self.request.strategy;
        let route_score = score(strategy, &closed);
        let metrics = self.metrics(&closed);
        log::info!(
            "{strategy} route [{}]: importance {:.1}, walk {:.1} min, visit {:.1} min, total {:.1} of {} min",
            join_keys(closed.route()),
            metrics.cultural_score,
            metrics.walk_minutes,
            metrics.visit_minutes,
            metrics.total_minutes,
            self.request.time_available_minutes,
        );

        RouteResult {
            strategy,
            stops: closed.route().to_vec(),
            locations: closed
                .route()
                .iter()
                .filter_map(|key| self.fort.location(key.as_str()).cloned())
                .collect(),
            metrics,
            decision_log: self.decision_log(&closed, route_score),
        }
    }

    fn seed(&self) -> SearchPath {
        SearchPath::seed(
            self.entry.id.clone(),
            self.entry_importance,
            self.entry.visit_minutes,
        )
    }

    /// Grow every beam member by one stop.
    ///
    /// Returns the expansions and, separately, the beam members that hold
    /// the forced stop but could not be extended.
    #[expect(
        clippy::float_arithmetic,
        reason = "forward time and walking caps are floating-point minute sums"
    )]
    fn expand(&mut self, beam: &[SearchPath]) -> (Vec<SearchPath>, Vec<SearchPath>) {
        let strategy = self.request.strategy;
        let budget = self.request.time_available_minutes;
        let mut expanded = Vec::new();
        let mut stalled = Vec::new();

        for path in beam {
            let before = expanded.len();
            for candidate in &self.candidates {
                let key = &candidate.location.id;
                if path.contains(key.as_str()) {
                    continue;
                }
                let Some(walk) =
                    self.adjacency
                        .shortest_path(path.last().as_str(), key.as_str(), self.max_difficulty)
                else {
                    continue;
                };
                let walk_minutes = walk.total_minutes;
                let visit_minutes = candidate.location.visit_minutes;
                let forward = path.total_minutes() + walk_minutes + visit_minutes;
                if !self.legs.allows(key, forward, budget) {
                    continue;
                }
                if self
                    .walk_cap
                    .is_some_and(|cap| path.walk_minutes() + walk_minutes > cap)
                {
                    log::trace!("{key}: walking cap exceeded");
                    continue;
                }
                let next = path.extend(key, walk_minutes, visit_minutes, candidate.importance);
                let next_score = score(strategy, &next);
                expanded.push(next.scored(next_score));
            }

            let holds_forced = self
                .forced
                .as_ref()
                .is_some_and(|forced| path.contains(forced.key.as_str()));
            if expanded.len() == before && holds_forced {
                stalled.push(path.clone());
            }
        }
        (expanded, stalled)
    }

    /// Rank the pool and keep the best `beam_width` routes.
    fn prune(&mut self, round: usize, mut pool: Vec<SearchPath>) -> Vec<SearchPath> {
        let generated = pool.len();
        if let Some(forced) = self.forced.as_ref().map(|forced| forced.key.clone()) {
            let mut viable = Vec::with_capacity(pool.len());
            for path in &pool {
                if path.contains(forced.as_str()) || self.can_still_include_forced(path) {
                    viable.push(path.clone());
                }
            }
            if viable.is_empty() {
                log::warn!(
                    "round {round}: no route can still include {forced}; keeping all {generated}"
                );
            } else {
                pool = viable;
            }
            pool.sort_by(|lhs, rhs| {
                rhs.contains(forced.as_str())
                    .cmp(&lhs.contains(forced.as_str()))
                    .then_with(|| rhs.score().total_cmp(&lhs.score()))
            });
        } else {
            pool.sort_by(|lhs, rhs| rhs.score().total_cmp(&lhs.score()));
        }

        pool.truncate(self.request.beam_width);
        log::debug!(
            "round {round}: {generated} route(s) generated, kept {}",
            pool.len()
        );
        for (rank, path) in pool.iter().enumerate() {
            log::debug!(
                "  #{rank} score {:.3} [{}]",
                path.score(),
                join_keys(path.route())
            );
        }
        pool
    }

    /// Whether `path` can still walk to the forced stop, visit it and get
    /// home in time.
    #[expect(
        clippy::float_arithmetic,
        reason = "forward time and walking caps are floating-point minute sums"
    )]
    fn can_still_include_forced(&mut self, path: &SearchPath) -> bool {
        let Some(forced) = self.forced.as_ref() else {
            return true;
        };
        let Some(walk) = self.adjacency.shortest_path(
            path.last().as_str(),
            forced.key.as_str(),
            self.max_difficulty,
        ) else {
            return false;
        };
        if self
            .walk_cap
            .is_some_and(|cap| path.walk_minutes() + walk.total_minutes > cap)
        {
            return false;
        }
        let forward = path.total_minutes() + walk.total_minutes + forced.visit_minutes;
        self.legs
            .allows(&forced.key, forward, self.request.time_available_minutes)
    }

    fn select(&self, beam: Vec<SearchPath>) -> SearchPath {
        let pool = match &self.forced {
            Some(forced) => {
                let holding: Vec<SearchPath> = beam
                    .iter()
                    .filter(|path| path.contains(forced.key.as_str()))
                    .cloned()
                    .collect();
                if holding.is_empty() {
                    log::warn!(
                        "no route includes {}; selecting from all {} route(s)",
                        forced.key,
                        beam.len()
                    );
                    beam
                } else {
                    log::debug!("{} route(s) include {}", holding.len(), forced.key);
                    holding
                }
            }
            None => beam,
        };
        select_best(self.request.strategy, &pool)
            .cloned()
            .unwrap_or_else(|| self.seed())
    }

    fn close(&mut self, best: SearchPath) -> SearchPath {
        let entry = &self.entry.id;
        if best.last() == entry {
            return best;
        }
        match self.legs.minutes(best.last()) {
            Some(back) => best.close(entry, back),
            None => {
                log::warn!("no walk from {} back to {entry}; route left open", best.last());
                best
            }
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "utilisation is a floating-point share of the budget"
    )]
    fn metrics(&self, path: &SearchPath) -> RouteMetrics {
        let total_minutes = path.total_minutes();
        RouteMetrics {
            visit_minutes: path.visit_minutes(),
            walk_minutes: path.walk_minutes(),
            total_minutes,
            cultural_score: path.importance(),
            time_utilisation: total_minutes / self.request.time_available_minutes,
        }
    }

    fn decision_log(&self, path: &SearchPath, route_score: f64) -> Vec<DecisionLogEntry> {
        let hops = path.hop_walks().len();
        path.route()
            .windows(2)
            .zip(path.hop_walks())
            .enumerate()
            .filter_map(|(step, (pair, walk))| {
                let [from, to] = pair else {
                    return None;
                };
                let closing = step + 1 == hops && to == &self.entry.id;
                let visit_minutes = if closing {
                    0.0
                } else {
                    self.fort
                        .location(to.as_str())
                        .map_or(0.0, |location| location.visit_minutes)
                };
                Some(DecisionLogEntry {
                    step,
                    from: from.clone(),
                    to: to.clone(),
                    walk_minutes: *walk,
                    visit_minutes,
                    score: route_score,
                })
            })
            .collect()
    }
}

/// Keep the forced stop only when the search can actually use it.
fn resolve_forced(
    request: &RouteRequest,
    entry: &Location,
    candidates: &[Candidate<'_>],
) -> Option<ForcedStop> {
    let key = request.forced_node.as_ref()?;
    if *key == entry.id {
        log::debug!("forced stop {key} is the entry point; nothing to enforce");
        return None;
    }
    let Some(candidate) = candidates.iter().find(|candidate| candidate.location.id == *key) else {
        log::warn!(
            "forced stop {key} is unknown, already visited or out of reach; planning without it"
        );
        return None;
    };
    log::debug!("route must include {key} when feasible");
    Some(ForcedStop {
        key: key.clone(),
        visit_minutes: candidate.location.visit_minutes,
    })
}

fn join_keys(keys: &[NodeKey]) -> String {
    keys.iter()
        .map(NodeKey::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

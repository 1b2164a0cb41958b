//! Strategy objectives: how partial routes are scored and how the winner is
//! picked.
//!
//! Scoring ranks expansions inside the beam. Selection picks the final route
//! and uses the plain objective each strategy names (efficiency, importance,
//! walking), which is not always the same ordering as the score.

use fortwalk_core::Strategy;

use crate::path::SearchPath;

/// Importance collected per minute spent; zero for an empty schedule.
#[expect(
    clippy::float_arithmetic,
    reason = "efficiency is a floating-point ratio"
)]
pub(crate) fn efficiency(path: &SearchPath) -> f64 {
    let total = path.total_minutes();
    if total > 0.0 {
        path.importance() / total
    } else {
        0.0
    }
}

/// Score `path` under `strategy`; higher is better.
#[expect(
    clippy::float_arithmetic,
    reason = "strategy scores blend floating-point importance and minutes"
)]
pub(crate) fn score(strategy: Strategy, path: &SearchPath) -> f64 {
    match strategy {
        Strategy::Balanced => efficiency(path),
        Strategy::MaxCulture => path.importance() * 1.5 - 0.2 * path.walk_minutes(),
        Strategy::MinWalking => -path.walk_minutes() * 1.5 + 0.3 * path.importance(),
    }
}

/// Pick the final route from `paths`.
///
/// Balanced takes the highest efficiency, max-culture the highest
/// importance and min-walking the least walking. The earliest path wins
/// ties.
pub(crate) fn select_best(strategy: Strategy, paths: &[SearchPath]) -> Option<&SearchPath> {
    paths.iter().reduce(|best, path| {
        let better = match strategy {
            Strategy::Balanced => efficiency(path) > efficiency(best),
            Strategy::MaxCulture => path.importance() > best.importance(),
            Strategy::MinWalking => path.walk_minutes() < best.walk_minutes(),
        };
        if better { path } else { best }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortwalk_core::NodeKey;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    fn key(raw: &str) -> NodeKey {
        NodeKey::from(raw)
    }

    /// A -> B: importance 13, walk 5, visit 20.
    #[fixture]
    fn near() -> SearchPath {
        SearchPath::seed(key("A"), 5.0, 10.0).extend(&key("B"), 5.0, 10.0, 8.0)
    }

    /// A -> C: importance 8, walk 20, visit 20.
    #[fixture]
    fn far() -> SearchPath {
        SearchPath::seed(key("A"), 5.0, 10.0).extend(&key("C"), 20.0, 10.0, 3.0)
    }

    #[rstest]
    #[case(Strategy::Balanced, 13.0 / 25.0)]
    #[case(Strategy::MaxCulture, 13.0 * 1.5 - 0.2 * 5.0)]
    #[case(Strategy::MinWalking, -5.0 * 1.5 + 0.3 * 13.0)]
    fn scores_follow_strategy_formulas(near: SearchPath, #[case] strategy: Strategy, #[case] expected: f64) {
        assert!((score(strategy, &near) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn efficiency_of_empty_schedule_is_zero() {
        let idle = SearchPath::seed(key("A"), 5.0, 0.0);
        assert!(efficiency(&idle).abs() < TOLERANCE);
        assert!(score(Strategy::Balanced, &idle).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(Strategy::Balanced, "B")]
    #[case(Strategy::MaxCulture, "E")]
    #[case(Strategy::MinWalking, "B")]
    fn selects_by_plain_objective(
        near: SearchPath,
        far: SearchPath,
        #[case] strategy: Strategy,
        #[case] winner: &str,
    ) {
        // A -> E: importance 25, walk 30, visit 20; efficiency just below A -> B.
        let rich = SearchPath::seed(key("A"), 5.0, 10.0).extend(&key("E"), 30.0, 10.0, 20.0);
        let paths = [far, rich, near];
        let best = select_best(strategy, &paths).expect("non-empty beam");
        assert_eq!(best.last(), winner);
    }

    #[rstest]
    fn selection_ignores_stored_score(near: SearchPath, far: SearchPath) {
        let paths = [near.scored(-100.0), far.scored(100.0)];
        let best = select_best(Strategy::Balanced, &paths).expect("non-empty beam");
        assert_eq!(best.last(), "B");
    }

    #[rstest]
    fn earliest_path_wins_ties(near: SearchPath) {
        let twin = SearchPath::seed(key("A"), 5.0, 10.0).extend(&key("D"), 5.0, 10.0, 8.0);
        let paths = [twin, near];
        let best = select_best(Strategy::MaxCulture, &paths).expect("non-empty beam");
        assert_eq!(best.last(), "D");
    }

    #[rstest]
    fn empty_beam_has_no_winner() {
        assert!(select_best(Strategy::Balanced, &[]).is_none());
    }
}

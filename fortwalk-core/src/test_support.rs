//! Fort fixtures shared by unit, behaviour and property tests.

use crate::{Edge, FortGraph, Location};

/// Three-location fort used for hand-checked scenarios.
///
/// `A` (importance 5) is the entry. `B` (importance 8) sits five minutes from
/// both `A` and `C`; `C` (importance 3) is twenty minutes from `A` directly.
/// Every location takes ten minutes to visit and every edge has difficulty 2.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture data is static and valid")]
pub fn triangle_fort() -> FortGraph {
    let location = |key: &str, score: f64| {
        Location::new(key, key)
            .with_scores(score, score, score)
            .with_walking_effort(2)
            .with_visit_minutes(10.0)
    };
    FortGraph::new(
        "triangle",
        "Triangle Fort",
        vec![location("A", 5.0), location("B", 8.0), location("C", 3.0)],
        vec![
            Edge::new("A", "B", 5.0, 2),
            Edge::new("B", "C", 5.0, 2),
            Edge::new("A", "C", 20.0, 2),
        ],
    )
    .and_then(|fort| fort.with_default_entry("A"))
    .expect("triangle fort is valid")
}

/// Shivneri Fort: eight locations joined by ten paths, entered at
/// `maha_darwaja`.
///
/// `kadelot_point` and `bastions` are strenuous (effort 7 and 8), and
/// `ammunition_storage` can only be reached through `bastions`.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture data is static and valid")]
pub fn shivneri_fort() -> FortGraph {
    let locations = vec![
        Location::new("maha_darwaja", "Maha Darwaja (Main Entrance)")
            .with_scores(9.0, 3.0, 8.0)
            .with_walking_effort(2)
            .with_visit_minutes(8.0)
            .with_position(200.0, 650.0)
            .with_description("The massive spike-studded main gate of Shivneri."),
        Location::new("shiv_janmasthan", "Shiv Janmasthan (Birthplace)")
            .with_scores(10.0, 10.0, 9.0)
            .with_walking_effort(3)
            .with_visit_minutes(15.0)
            .with_position(350.0, 450.0)
            .with_description("The building where Chhatrapati Shivaji Maharaj was born."),
        Location::new("badami_talav", "Badami Talav")
            .with_scores(6.0, 4.0, 7.0)
            .with_walking_effort(2)
            .with_visit_minutes(5.0)
            .with_position(500.0, 550.0)
            .with_description("Ancient water reservoir that kept the garrison supplied."),
        Location::new("ganga_jamuna_tanks", "Ganga-Jamuna Tanks")
            .with_scores(7.0, 6.0, 6.0)
            .with_walking_effort(4)
            .with_visit_minutes(7.0)
            .with_position(600.0, 400.0)
            .with_description("Rock-cut cisterns holding cool water year-round."),
        Location::new("shivai_devi_temple", "Shivai Devi Temple")
            .with_scores(9.0, 10.0, 6.0)
            .with_walking_effort(4)
            .with_visit_minutes(10.0)
            .with_position(450.0, 300.0)
            .with_description("Cave temple of the fort's guardian deity."),
        Location::new("kadelot_point", "Kadelot Point")
            .with_scores(8.0, 1.0, 4.0)
            .with_walking_effort(7)
            .with_visit_minutes(8.0)
            .with_position(350.0, 200.0)
            .with_description("Sheer cliff once used for punishment."),
        Location::new("bastions", "Fort Bastions")
            .with_scores(5.0, 1.0, 8.0)
            .with_walking_effort(8)
            .with_visit_minutes(10.0)
            .with_position(700.0, 250.0)
            .with_description("Defensive walls with panoramic views."),
        Location::new("ammunition_storage", "Amberkhana (Storage)")
            .with_scores(6.0, 1.0, 7.0)
            .with_walking_effort(3)
            .with_visit_minutes(8.0)
            .with_position(650.0, 150.0)
            .with_description("Granary and ammunition storehouse."),
    ];
    let edges = vec![
        Edge::new("maha_darwaja", "shiv_janmasthan", 6.0, 2),
        Edge::new("maha_darwaja", "badami_talav", 5.0, 2),
        Edge::new("shiv_janmasthan", "shivai_devi_temple", 5.0, 3),
        Edge::new("shiv_janmasthan", "badami_talav", 4.0, 2),
        Edge::new("badami_talav", "ganga_jamuna_tanks", 8.0, 4),
        Edge::new("ganga_jamuna_tanks", "shivai_devi_temple", 6.0, 3),
        Edge::new("ganga_jamuna_tanks", "bastions", 12.0, 6),
        Edge::new("shivai_devi_temple", "kadelot_point", 7.0, 5),
        Edge::new("kadelot_point", "bastions", 10.0, 7),
        Edge::new("bastions", "ammunition_storage", 8.0, 5),
    ];
    FortGraph::new("shivneri", "Shivneri Fort", locations, edges)
        .and_then(|fort| fort.with_default_entry("maha_darwaja"))
        .expect("Shivneri fixture is valid")
}

//! Random collaboration scenario generation
//!
//! Produces connected co-authorship inputs for tests and benchmarks: author
//! `i` always co-publishes with at least one lower-numbered author, so every
//! author has a finite Erdős number.

use rand::Rng;
use std::collections::BTreeSet;

/// A generated ranking scenario: author list, publications, edge count
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Every author name, root first
    pub authors: Vec<String>,

    /// Two-author publications, one per generated collaboration
    pub publications: Vec<Vec<String>>,

    /// Number of generated collaborations (~n²/4 for large n)
    pub edge_count: usize,
}

/// Generate a connected random collaboration graph over `n` authors
///
/// Author 0 is the root `"Erdos"`; the rest are named `"1"` through
/// `"n-1"`. Scanning from the highest-numbered author down, author `i`
/// collaborates with `max(i/2, 1)` distinct randomly chosen lower-numbered
/// authors, each collaboration a two-author publication.
///
/// The `authors` list covers every name in `publications`, so the scenario
/// feeds either load mode.
///
/// # Example
///
/// ```
/// use erdos_rank::{bfs_ranks, collaboration_scenario, CollabGraph};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let scenario = collaboration_scenario(50, &mut rng);
///
/// let mut graph = CollabGraph::new();
/// graph.load_from_publications(&scenario.publications);
///
/// // Connected by construction: everyone gets a finite rank
/// assert_eq!(bfs_ranks(&graph).unwrap().len(), 50);
/// ```
pub fn collaboration_scenario(n: usize, rng: &mut impl Rng) -> Scenario {
    let author_name = |id: usize| {
        if id == 0 {
            "Erdos".to_string()
        } else {
            id.to_string()
        }
    };

    let authors: Vec<String> = (0..n).map(author_name).collect();
    let mut publications = Vec::new();
    let mut edge_count = 0;

    for i in (1..n).rev() {
        let partner_count = (i / 2).max(1);

        let mut partners = BTreeSet::new();
        while partners.len() < partner_count {
            partners.insert(rng.gen_range(0..i));
        }

        for partner in partners {
            publications.push(vec![author_name(i), author_name(partner)]);
            edge_count += 1;
        }
    }

    Scenario {
        authors,
        publications,
        edge_count,
    }
}

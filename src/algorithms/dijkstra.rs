//! Dijkstra-style Erdős-number relaxation
//!
//! Priority-ordered relaxation over the unit-weight graph. Strictly more
//! expensive than the breadth-first labeler for unit weights; kept as an
//! independent implementation so the two can cross-check each other.

use super::ROOT_AUTHOR;
use crate::storage::{AuthorId, CollabGraph, GraphError};
use std::collections::BTreeSet;

/// Sentinel distance for authors not yet reached from the root
const UNREACHED: u32 = u32::MAX;

/// Compute every author's Erdős number by priority-ordered relaxation
///
/// Every author starts at an infinite tentative distance except the root at
/// 0. The working set is an ordered set of (distance, id) pairs, so minimum
/// extraction is deterministic: distance first, then arena id as tie-break.
/// Relaxing an edge removes the neighbor's stale entry, lowers its distance
/// by exactly one hop, and reinserts it.
///
/// # Returns
///
/// `(name, rank)` pairs for every author reachable from the root, in the
/// graph's insertion order. Authors still at the infinite sentinel when the
/// working set drains are omitted, matching [`bfs_ranks`].
///
/// # Errors
///
/// Returns [`GraphError::MissingRoot`] if the graph has no author named
/// `"Erdos"`.
///
/// # Complexity
///
/// O((V + E) log V) via the ordered working set, against the labeler's
/// O(V + E).
///
/// [`bfs_ranks`]: super::bfs_ranks
///
/// # Example
///
/// ```
/// use erdos_rank::{dijkstra_ranks, CollabGraph};
///
/// let mut graph = CollabGraph::new();
/// graph.load_from_publications(&[vec!["Erdos", "A"], vec!["A", "B"]]);
///
/// let ranks = dijkstra_ranks(&graph).unwrap();
/// assert_eq!(ranks, vec![
///     ("Erdos".to_string(), 0),
///     ("A".to_string(), 1),
///     ("B".to_string(), 2),
/// ]);
/// ```
pub fn dijkstra_ranks(graph: &CollabGraph) -> Result<Vec<(String, u32)>, GraphError> {
    let root = graph
        .author_id(ROOT_AUTHOR)
        .ok_or_else(|| GraphError::MissingRoot {
            root: ROOT_AUTHOR.to_string(),
        })?;

    let mut distances: Vec<u32> = vec![UNREACHED; graph.num_authors()];
    let mut active: BTreeSet<(u32, u32)> = BTreeSet::new();

    distances[root.0 as usize] = 0;
    active.insert((0, root.0));

    while let Some((distance, id)) = active.pop_first() {
        for neighbor in graph.neighbors(AuthorId(id)).into_iter().flatten() {
            let slot = neighbor.0 as usize;
            let relaxed = distance + 1;

            if distances[slot] > relaxed {
                if distances[slot] != UNREACHED {
                    active.remove(&(distances[slot], neighbor.0));
                }
                distances[slot] = relaxed;
                active.insert((relaxed, neighbor.0));
            }
        }
    }

    Ok(graph
        .iter()
        .filter(|(id, _)| distances[id.0 as usize] != UNREACHED)
        .map(|(id, name)| (name.to_string(), distances[id.0 as usize]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs_ranks;

    #[test]
    fn test_chain() {
        let mut graph = CollabGraph::new();
        graph
            .load_from_authors(&["Erdos", "A", "B"], &[vec!["Erdos", "A"], vec!["A", "B"]])
            .unwrap();

        let ranks = dijkstra_ranks(&graph).unwrap();
        assert_eq!(
            ranks,
            vec![
                ("Erdos".to_string(), 0),
                ("A".to_string(), 1),
                ("B".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_three_author_paper_is_one_hop() {
        let mut graph = CollabGraph::new();
        graph.load_from_publications(&[vec!["Erdos", "A", "B"]]);

        let ranks = dijkstra_ranks(&graph).unwrap();
        assert_eq!(
            ranks,
            vec![
                ("Erdos".to_string(), 0),
                ("A".to_string(), 1),
                ("B".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_unreachable_author_omitted() {
        let mut graph = CollabGraph::new();
        graph.load_from_publications(&[vec!["Erdos", "A"], vec!["X", "Y"]]);

        let ranks = dijkstra_ranks(&graph).unwrap();
        assert_eq!(
            ranks,
            vec![("Erdos".to_string(), 0), ("A".to_string(), 1)]
        );
    }

    #[test]
    fn test_missing_root() {
        let mut graph = CollabGraph::new();
        graph.load_from_publications(&[vec!["A", "B"]]);

        let err = dijkstra_ranks(&graph).unwrap_err();
        assert_eq!(
            err,
            GraphError::MissingRoot {
                root: "Erdos".to_string()
            }
        );
    }

    #[test]
    fn test_relaxation_lowers_stale_distance() {
        // Erdos-A-B-C chain plus a direct Erdos-C edge: the chain route
        // would put C at 3, the relaxation must settle it at 1
        let mut graph = CollabGraph::new();
        graph.load_from_publications(&[
            vec!["A", "B"],
            vec!["B", "C"],
            vec!["Erdos", "A"],
            vec!["Erdos", "C"],
        ]);

        let ranks = dijkstra_ranks(&graph).unwrap();
        let rank_of = |name: &str| {
            ranks
                .iter()
                .find(|(n, _)| n == name)
                .map(|&(_, r)| r)
                .unwrap()
        };
        assert_eq!(rank_of("Erdos"), 0);
        assert_eq!(rank_of("A"), 1);
        assert_eq!(rank_of("B"), 2);
        assert_eq!(rank_of("C"), 1);
    }

    #[test]
    fn test_agrees_with_bfs_on_small_clique_mesh() {
        let mut graph = CollabGraph::new();
        graph.load_from_publications(&[
            vec!["Erdos", "A", "B"],
            vec!["B", "C", "D"],
            vec!["D", "E"],
            vec!["A", "E"],
        ]);

        assert_eq!(dijkstra_ranks(&graph).unwrap(), bfs_ranks(&graph).unwrap());
    }
}

//! Breadth-first Erdős-number labeling
//!
//! Level-order traversal from the root: the first discovery of a node fixes
//! its rank at parent + 1, which equals its true graph distance since every
//! edge has unit weight.

use super::ROOT_AUTHOR;
use crate::storage::{AuthorId, CollabGraph, GraphError};
use std::collections::VecDeque;

/// Compute every author's Erdős number by breadth-first traversal
///
/// Assigns rank 0 to the root author and `parent + 1` to each neighbor on
/// first discovery, working outward through a FIFO frontier. The rank table
/// is owned by this call; the graph is never mutated and stays reusable
/// across ranking runs.
///
/// # Returns
///
/// `(name, rank)` pairs for every author reachable from the root, in the
/// graph's insertion order. Authors with no path to the root are omitted.
///
/// # Errors
///
/// Returns [`GraphError::MissingRoot`] if the graph has no author named
/// `"Erdos"`.
///
/// # Example
///
/// ```
/// use erdos_rank::{bfs_ranks, CollabGraph};
///
/// let mut graph = CollabGraph::new();
/// graph.load_from_publications(&[vec!["Erdos", "A"], vec!["A", "B"]]);
///
/// let ranks = bfs_ranks(&graph).unwrap();
/// assert_eq!(ranks, vec![
///     ("Erdos".to_string(), 0),
///     ("A".to_string(), 1),
///     ("B".to_string(), 2),
/// ]);
/// ```
pub fn bfs_ranks(graph: &CollabGraph) -> Result<Vec<(String, u32)>, GraphError> {
    let root = graph
        .author_id(ROOT_AUTHOR)
        .ok_or_else(|| GraphError::MissingRoot {
            root: ROOT_AUTHOR.to_string(),
        })?;

    let mut ranks: Vec<Option<u32>> = vec![None; graph.num_authors()];
    let mut frontier: VecDeque<(AuthorId, u32)> = VecDeque::new();

    ranks[root.0 as usize] = Some(0);
    frontier.push_back((root, 0));

    while let Some((current, rank)) = frontier.pop_front() {
        for neighbor in graph.neighbors(current).into_iter().flatten() {
            let slot = &mut ranks[neighbor.0 as usize];
            if slot.is_none() {
                *slot = Some(rank + 1);
                frontier.push_back((neighbor, rank + 1));
            }
        }
    }

    Ok(graph
        .iter()
        .filter_map(|(id, name)| ranks[id.0 as usize].map(|rank| (name.to_string(), rank)))
        .collect())
}

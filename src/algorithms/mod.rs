//! Ranking algorithms (BFS labeling, Dijkstra-style relaxation)
//!
//! Both rankers measure shortest unit-weight distances from the fixed root
//! author and must agree on every reachable node; the relaxation ranker is
//! kept as a cross-check with different complexity characteristics.

pub mod bfs;
pub mod dijkstra;

pub use bfs::bfs_ranks;
pub use dijkstra::dijkstra_ranks;

/// Name of the distinguished root author all distances are measured from
pub const ROOT_AUTHOR: &str = "Erdos";

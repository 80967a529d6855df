//! erdos-rank: embedded collaboration-graph engine for Erdős numbers
//!
//! # Overview
//!
//! erdos-rank builds an undirected co-authorship graph from publication
//! lists (each publication contributes a clique of edges between its
//! authors) and computes every author's Erdős number, the shortest-path
//! distance in edges to the root author `"Erdos"`.
//!
//! # Quick Start
//!
//! ```
//! use erdos_rank::{bfs_ranks, CollabGraph};
//!
//! // Build graph from publications; authors are discovered lazily
//! let mut graph = CollabGraph::new();
//! graph.load_from_publications(&[
//!     vec!["Erdos", "Renyi"],          // Renyi: Erdős number 1
//!     vec!["Renyi", "Szekeres"],       // Szekeres: Erdős number 2
//! ]);
//!
//! let ranks = bfs_ranks(&graph)?;
//! assert_eq!(ranks, vec![
//!     ("Erdos".to_string(), 0),
//!     ("Renyi".to_string(), 1),
//!     ("Szekeres".to_string(), 2),
//! ]);
//! # Ok::<(), erdos_rank::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: arena of authors with index-based adjacency sets (simple,
//!   symmetric, no dangling references)
//! - **Algorithms**: BFS labeling and a Dijkstra-style relaxation that must
//!   agree on every unit-weight graph
//! - **Generation**: connected random scenarios for tests and benchmarks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod generate;
pub mod storage;

// Re-export core types
pub use algorithms::{bfs_ranks, dijkstra_ranks, ROOT_AUTHOR};
pub use generate::{collaboration_scenario, Scenario};
pub use storage::{AuthorId, CollabGraph, GraphError};

// Error type
pub use anyhow::{Error, Result};

//! Example walkthrough of erdos-rank
//!
//! Run with: cargo run --example erdos_numbers

use erdos_rank::{bfs_ranks, collaboration_scenario, dijkstra_ranks, CollabGraph};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> erdos_rank::Result<()> {
    // 1. A small hand-written collaboration graph
    let mut graph = CollabGraph::new();
    graph.load_from_publications(&[
        vec!["Erdos", "Renyi", "Sos"],
        vec!["Renyi", "Szekeres"],
        vec!["Szekeres", "Turan"],
        vec!["Erdos", "Turan"],
    ]);

    println!(
        "Graph built: {} authors, {} edges",
        graph.num_authors(),
        graph.num_edges()
    );

    println!("\nErdős numbers (BFS):");
    for (name, rank) in bfs_ranks(&graph)? {
        println!("  {name}: {rank}");
    }

    // 2. The Dijkstra-style ranker must agree
    let same = bfs_ranks(&graph)? == dijkstra_ranks(&graph)?;
    println!("\nBFS and Dijkstra-style ranks agree: {same}");

    // 3. A larger generated scenario via the declared-authors load path
    let mut rng = StdRng::seed_from_u64(42);
    let scenario = collaboration_scenario(1000, &mut rng);

    let mut big = CollabGraph::new();
    big.load_from_authors(&scenario.authors, &scenario.publications)?;

    let ranks = bfs_ranks(&big)?;
    let max_rank = ranks.iter().map(|&(_, r)| r).max().unwrap_or(0);
    println!(
        "\nGenerated scenario: {} authors, {} collaborations, max Erdős number {}",
        big.num_authors(),
        scenario.edge_count,
        max_rank
    );

    Ok(())
}

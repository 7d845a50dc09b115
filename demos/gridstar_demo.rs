//! Text demo: builds an obstacle course, searches it, prints the result.
//!
//! Run: cargo run --bin gridstar-demo [seed]

use gridstar_demos::{DemoLayout, render};
use gridstar_paths::{AStar, SearchConfig};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let layout = DemoLayout::default();
    let grid = layout.build(seed);
    let (start, goal) = (layout.start, layout.goal);

    println!("A* path search, seed {seed}");
    println!("==========================");

    let mut astar = AStar::new(SearchConfig::default());
    match astar.search(&grid, start, goal) {
        Ok(path) => {
            let stats = astar.stats();
            println!(
                "Path found: {} steps, {} nodes expanded, open set peaked at {}",
                path.steps(),
                stats.expanded,
                stats.max_open
            );
            println!("Route: {path}");
            println!();
            println!("{}", render(&grid, &path.into_points(), start, goal));
        }
        Err(e) => {
            println!("{}", render(&grid, &[], start, goal));
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

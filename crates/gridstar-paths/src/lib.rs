//! A* shortest-path search on 4-connected obstacle grids.
//!
//! The search is split into small pieces that can be used on their own:
//!
//! - [`NodeArena`]: per-search node storage; parent links are [`NodeId`]s
//! - [`OpenSet`]: indexed binary min-heap with O(log n) decrease-key and
//!   O(1) lookup by position, generic over a [`NodeOrder`]
//! - [`ClosedSet`]: finalized positions
//! - [`AStar`]: the search loop, returning a [`Path`] or a [`PathError`]
//!
//! Most callers only need [`search`]:
//!
//! ```
//! use gridstar_core::{Grid, Point};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.add_obstacle(Point::new(1, 0));
//! grid.add_obstacle(Point::new(1, 1));
//!
//! let path = gridstar_paths::search(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.steps(), 4);
//! assert_eq!(path.start(), Point::new(0, 0));
//! assert_eq!(path.goal(), Point::new(2, 2));
//! ```
//!
//! Movement is 4-directional with unit step cost and the heuristic is the
//! Manhattan distance, so returned paths are always shortest.

mod astar;
mod closed_set;
mod config;
mod distance;
mod error;
mod node;
mod open_set;
mod path;
mod traits;

pub use astar::{AStar, STEP_COST, search};
pub use closed_set::ClosedSet;
pub use config::{SearchConfig, SearchStats};
pub use distance::{heuristic, manhattan};
pub use error::PathError;
pub use node::{Ancestors, Node, NodeArena, NodeId};
pub use open_set::{FCostOrder, LowerHOrder, NodeOrder, OpenSet};
pub use path::{EmptyPathError, Path, PathNode};
pub use traits::Pather;

//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a
//! 2D occupancy grid with 4-directional unit-cost movement. A search mutates
//! its [Grid] in place, annotating every cell with its costs and flags, and
//! can record per-expansion [Step] snapshots so the exploration can be
//! played back as an animation. All boundary types serialize with serde, so
//! the crate slots under a JSON transport layer without adapter types.
//!
//! ```
//! use grid_astar::{astar, Grid, Heuristic, Point};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.set_wall(Point::new(2, 1), true);
//! let result = astar(&mut grid, Heuristic::Manhattan, false);
//! assert!(result.success);
//! assert_eq!(result.path_length, 8.0);
//! ```
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod point;
pub mod search;

pub use crate::frontier::Frontier;
pub use crate::grid::{Cell, Grid};
pub use crate::heuristic::Heuristic;
pub use crate::point::Point;
pub use crate::search::{astar, SearchResult, Step};

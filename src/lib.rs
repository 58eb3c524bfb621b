//! Navigation modules in Rust
//!
//! A* and Dijkstra search over any graph implementing [`Graph`],
//! plus the grid types used to describe common 2D maps.
//!
//! ```
//! use navigate::{AStar, Grid, Point};
//!
//! let grid = Grid::new(3, 3);
//! let path = AStar::new(&grid).shortest_path(&Point::new(0, 0), &Point::new(2, 2));
//! assert_eq!(path.len(), 4);
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;

pub use collections::PriorityQueue;
pub use errors::PathPlannerError;
pub use geometry::{Direction, Grid, Point};
pub use graph_algos::a_star::{AStar, HeuristicAnchor, Path, PathOutcome, SearchConfig};
pub use graph_algos::{Cost, Graph};

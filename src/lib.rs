//! # greedy_pathfinding
//!
//! Pathfinding on a randomly obstructed grid using
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS).
//! Cells are 4-connected and the frontier is ordered purely by the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal, so routes
//! are found quickly but are not guaranteed to be shortest. Connected components of the free
//! cells are pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use greedy_pathfinding::{find_path, GridModel};
//! use grid_util::point::Point;
//!
//! let grid: GridModel = "...\n.#.\n...".parse().unwrap();
//! let path = find_path(Point::new(0, 0), Point::new(2, 2), &grid);
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```
pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinder;
pub mod render;
pub mod search;
pub mod session;

pub use config::GridConfig;
pub use error::{PathfindingError, Result};
pub use grid::GridModel;
pub use pathfinder::{find_path, manhattan_distance, PathFinder, NEUMANN_DELTAS};
pub use search::{greedy_best_first, SearchOutcome};
pub use session::{ClickOutcome, Session};

pub const DEFAULT_WIDTH: usize = 15;
pub const DEFAULT_HEIGHT: usize = 15;
pub const DEFAULT_OBSTACLE_FRACTION: f64 = 0.3;

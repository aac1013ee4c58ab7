use crate::error::{PathfindingError, Result};
use crate::grid::GridModel;
use crate::search::{greedy_best_first, SearchOutcome};
use grid_util::point::Point;
use log::{debug, info, warn};

/// Offsets `(dx, dy)` of the 4-neighbourhood in expansion order: up, left, down, right. The
/// order decides which of several equally promising cells enters the frontier first.
pub const NEUMANN_DELTAS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two points,
/// used as the sole search priority.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Greedy best-first search over the free cells of a [GridModel]. Holds nothing but a shared
/// reference to the grid: every search builds and drops its own frontier, so one [PathFinder]
/// (or many, on one grid) can serve any number of start and goal pairs.
///
/// The paths it returns are valid but generally not shortest, as cells are expanded purely by
/// their Manhattan distance to the goal.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'a> {
    grid: &'a GridModel,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a GridModel) -> PathFinder<'a> {
        PathFinder { grid }
    }

    pub fn grid(&self) -> &'a GridModel {
        self.grid
    }

    /// Free 4-neighbours of a point, in [NEUMANN_DELTAS] order.
    pub fn neighbours(&self, point: &Point) -> impl Iterator<Item = Point> + 'a {
        let grid = self.grid;
        let p = *point;
        NEUMANN_DELTAS
            .into_iter()
            .map(move |(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(move |n| grid.is_free(n))
    }

    /// Checks that both endpoints are in bounds and free.
    pub fn validate_endpoints(&self, start: &Point, goal: &Point) -> Result<()> {
        for point in [start, goal] {
            if !self.grid.in_bounds(point) {
                return Err(PathfindingError::InvalidInput {
                    point: *point,
                    reason: "out of bounds",
                });
            }
            if self.grid.is_blocked(point) {
                return Err(PathfindingError::InvalidInput {
                    point: *point,
                    reason: "blocked cell",
                });
            }
        }
        Ok(())
    }

    /// Runs the search and reports everything it did. Fails with
    /// [InvalidInput](PathfindingError::InvalidInput) if an endpoint is not a free cell.
    ///
    /// `path` is `Some(vec![])` when start equals goal and [None] when the goal cannot be reached.
    /// Goals on a different connected component are rejected before any cell is expanded.
    pub fn search(&self, start: Point, goal: Point) -> Result<SearchOutcome<Point>> {
        self.validate_endpoints(&start, &goal)?;
        if self.grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(SearchOutcome {
                path: None,
                expanded: Vec::new(),
                discovered: 0,
            });
        }
        let outcome = greedy_best_first(
            &start,
            |point| self.neighbours(point),
            |point| manhattan_distance(point, &goal),
            |point| *point == goal,
        );
        debug!(
            "Search from {} to {} expanded {} cells, path length {:?}",
            start,
            goal,
            outcome.expanded.len(),
            outcome.path.as_ref().map(Vec::len)
        );
        Ok(outcome)
    }

    /// Computes the route from `start` to `goal`, excluding `start` and ending at `goal`. An empty
    /// route means either that no route exists or that start equals goal. Invalid endpoints are
    /// logged and treated as unreachable.
    pub fn find_path(&self, start: Point, goal: Point) -> Vec<Point> {
        match self.search(start, goal) {
            Ok(outcome) => outcome.path.unwrap_or_default(),
            Err(e) => {
                warn!("No path searched: {}", e);
                Vec::new()
            }
        }
    }
}

/// Shorthand for [PathFinder::find_path].
pub fn find_path(start: Point, goal: Point, grid: &GridModel) -> Vec<Point> {
    PathFinder::new(grid).find_path(start, goal)
}

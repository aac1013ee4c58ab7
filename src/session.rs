use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::GridModel;
use crate::pathfinder::PathFinder;
use crate::render::render_grid;
use grid_util::point::Point;
use log::{debug, info};

/// What a [Session::click] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked cell became the start.
    StartPlaced(Point),
    /// The clicked cell became the goal and a route was computed, empty if there is none.
    GoalPlaced { goal: Point, path: Vec<Point> },
    /// The cell is blocked or lies outside the grid.
    Rejected(Point),
    /// Start and goal are both placed, nothing changes until [Session::reset].
    Ignored(Point),
}

/// Input state of the interactive demo, independent of any window system: the first click on a
/// free cell places the start, the second places the goal and triggers the search.
#[derive(Clone, Debug)]
pub struct Session {
    grid: GridModel,
    start: Option<Point>,
    goal: Option<Point>,
    path: Vec<Point>,
}

impl Session {
    pub fn new(grid: GridModel) -> Session {
        Session {
            grid,
            start: None,
            goal: None,
            path: Vec::new(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Result<Session> {
        Ok(Session::new(GridModel::from_config(config)?))
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if !self.grid.is_free(&point) {
            debug!("Rejected click on {}", point);
            return ClickOutcome::Rejected(point);
        }
        match (self.start, self.goal) {
            (None, _) => {
                self.start = Some(point);
                ClickOutcome::StartPlaced(point)
            }
            (Some(start), None) => {
                self.goal = Some(point);
                self.path = PathFinder::new(&self.grid).find_path(start, point);
                info!(
                    "Route from {} to {} has {} steps",
                    start,
                    point,
                    self.path.len()
                );
                ClickOutcome::GoalPlaced {
                    goal: point,
                    path: self.path.clone(),
                }
            }
            (Some(_), Some(_)) => ClickOutcome::Ignored(point),
        }
    }

    /// Clears start, goal and route while keeping the grid.
    pub fn reset(&mut self) {
        self.start = None;
        self.goal = None;
        self.path.clear();
    }

    /// Replaces the grid with a freshly generated one and clears all selections.
    pub fn regenerate(&mut self, config: &GridConfig) -> Result<()> {
        self.grid = GridModel::from_config(config)?;
        self.reset();
        Ok(())
    }

    pub fn render(&self) -> String {
        render_grid(&self.grid, self.start, self.goal, &self.path)
    }
}

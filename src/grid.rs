use crate::config::GridConfig;
use crate::error::{PathfindingError, Result};
use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

/// [GridModel] is a fixed-size occupancy grid in which every cell is either blocked ([true]) or
/// free ([false]). Cells are addressed by [Point] with `x` the column and `y` the row. In addition
/// to the raw cells it maintains the 4-connected components of the free cells in a [UnionFind]
/// structure so that unreachable goals can be rejected without a search.
///
/// Obstacles are only placed when the grid is constructed, a [GridModel] is read-only afterwards
/// and can be shared between any number of searches.
#[derive(Clone, Debug)]
pub struct GridModel {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    components: UnionFind<usize>,
}

impl GridModel {
    /// Creates a grid on which every cell is free.
    pub fn new(width: usize, height: usize) -> Result<GridModel> {
        GridModel::from_blocked(width, height, Vec::<Point>::new())
    }

    /// Creates a grid with exactly the given cells blocked.
    pub fn from_blocked<I>(width: usize, height: usize, blocked: I) -> Result<GridModel>
    where
        I: IntoIterator<Item = Point>,
    {
        GridConfig::new(width, height)
            .with_obstacle_fraction(0.0)
            .validate()?;
        let mut indices = Vec::new();
        for point in blocked {
            if !in_bounds(width, height, &point) {
                return Err(PathfindingError::InvalidConfiguration(format!(
                    "obstacle {} lies outside the {}x{} grid",
                    point, width, height
                )));
            }
            indices.push(point.y as usize * width + point.x as usize);
        }
        Ok(GridModel::with_obstacles(width, height, indices))
    }

    /// Generates a `width` by `height` grid on which `floor(width * height * obstacle_fraction)`
    /// distinct cells, drawn uniformly without replacement, are blocked. The layout only depends
    /// on the arguments, so equal seeds give equal grids.
    pub fn generate(
        width: usize,
        height: usize,
        obstacle_fraction: f64,
        rng_seed: u64,
    ) -> Result<GridModel> {
        GridModel::from_config(
            &GridConfig::new(width, height)
                .with_obstacle_fraction(obstacle_fraction)
                .with_seed(rng_seed),
        )
    }

    /// Generates a grid from a [GridConfig], seeding from entropy if it carries no seed.
    pub fn from_config(config: &GridConfig) -> Result<GridModel> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cell_count = config.width * config.height;
        let obstacles = rand::seq::index::sample(&mut rng, cell_count, config.obstacle_count());
        let grid = GridModel::with_obstacles(config.width, config.height, obstacles.into_iter());
        info!(
            "Generated {}x{} grid with {} obstacles",
            grid.width,
            grid.height,
            grid.obstacle_count()
        );
        Ok(grid)
    }

    fn with_obstacles<I>(width: usize, height: usize, obstacles: I) -> GridModel
    where
        I: IntoIterator<Item = usize>,
    {
        let mut blocked = vec![false; width * height];
        for ix in obstacles {
            blocked[ix] = true;
        }
        let mut grid = GridModel {
            width,
            height,
            blocked,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        in_bounds(self.width, self.height, point)
    }

    /// The only occupancy query a search needs: [false] for blocked and out-of-bounds cells.
    pub fn is_free(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.blocked[self.get_ix_point(point)]
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        !self.is_free(point)
    }

    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// All free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| !**b)
            .map(move |(ix, _)| self.get_point_ix(ix))
    }

    /// Retrieves the component id of a free cell.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.is_free(point)
            .then(|| self.components.find(self.get_ix_point(point)))
    }

    /// Checks if start and goal are free cells on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.is_free(start)
            && self.is_free(goal)
            && self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }
    fn get_point_ix(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }

    /// Links every free cell to its free right and lower neighbour, which covers all
    /// 4-connected adjacencies.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let ix = y * self.width + x;
                if self.blocked[ix] {
                    continue;
                }
                if x + 1 < self.width && !self.blocked[ix + 1] {
                    self.components.union(ix, ix + 1);
                }
                if y + 1 < self.height && !self.blocked[ix + self.width] {
                    self.components.union(ix, ix + self.width);
                }
            }
        }
    }
}

fn in_bounds(width: usize, height: usize, point: &Point) -> bool {
    point.x >= 0 && point.y >= 0 && (point.x as usize) < width && (point.y as usize) < height
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.blocked.chunks(self.width) {
            let line = row
                .iter()
                .map(|&b| if b { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses one row per line, `#` marking a blocked cell. `.` as well as the markers `S`, `G` and
/// `*` used by [render_grid](crate::render::render_grid) are free.
impl FromStr for GridModel {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<GridModel> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut obstacles = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(PathfindingError::InvalidConfiguration(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => obstacles.push(Point::new(x as i32, y as i32)),
                    '.' | 'S' | 'G' | '*' => {}
                    other => {
                        return Err(PathfindingError::InvalidConfiguration(format!(
                            "unexpected cell '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                }
            }
        }
        GridModel::from_blocked(width, height, obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_not_free() {
        let grid = GridModel::new(3, 2).unwrap();
        assert!(grid.is_free(&Point::new(2, 1)));
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(3, 0),
            Point::new(0, 2),
        ] {
            assert!(!grid.is_free(&p));
        }
    }

    #[test]
    fn generation_blocks_exact_count() {
        let grid = GridModel::generate(15, 15, 0.3, 7).unwrap();
        assert_eq!(grid.obstacle_count(), 67);
        assert_eq!(grid.free_cells().count(), 225 - 67);
        let grid = GridModel::generate(7, 3, 0.5, 7).unwrap();
        assert_eq!(grid.obstacle_count(), 10);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = GridModel::generate(20, 10, 0.3, 42).unwrap();
        let b = GridModel::generate(20, 10, 0.3, 42).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn non_square_generation_stays_in_bounds() {
        let grid = GridModel::generate(4, 9, 0.9, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.obstacle_count(), 32);
        assert_eq!(grid.to_string().lines().count(), 9);
    }

    #[test]
    fn generation_rejects_bad_fraction() {
        assert!(matches!(
            GridModel::generate(5, 5, 1.0, 0),
            Err(PathfindingError::InvalidConfiguration(_))
        ));
        assert!(GridModel::generate(5, 5, -0.5, 0).is_err());
    }

    #[test]
    fn obstacle_outside_grid_is_rejected() {
        assert!(GridModel::from_blocked(2, 2, [Point::new(2, 0)]).is_err());
    }

    #[test]
    fn parse_and_display_agree() {
        let text = "#..\n.#.\n..S\n";
        let grid: GridModel = text.parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_blocked(&Point::new(0, 0)));
        assert!(grid.is_blocked(&Point::new(1, 1)));
        assert!(grid.is_free(&Point::new(2, 2)));
        assert_eq!(grid.to_string(), "#..\n.#.\n...\n");
        assert!("..\n...".parse::<GridModel>().is_err());
        assert!(".x".parse::<GridModel>().is_err());
    }

    /// Tests whether cells are mapped to the right 4-connected components
    #[test]
    fn component_generation() {
        //  ___
        // |.#.|
        // |.#.|
        // |#..|
        //  ___
        let grid: GridModel = ".#.\n.#.\n#..".parse().unwrap();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(2, 0);
        let p4 = Point::new(1, 2);
        assert!(grid.reachable(&p1, &p2));
        assert!(grid.reachable(&p3, &p4));
        assert!(grid.unreachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &Point::new(1, 0)));
        assert_eq!(grid.component(&Point::new(1, 1)), None);
        assert_eq!(grid.component(&p3), grid.component(&p4));
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_connected() {
        let grid: GridModel = ".#\n#.".parse().unwrap();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }
}

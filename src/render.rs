use crate::grid::GridModel;
use grid_util::point::Point;
use itertools::Itertools;

/// Draws the grid one row per line: `#` for obstacles, `.` for free cells, `S` for the start,
/// `G` for the goal and `*` for path cells. The path is drawn last, so it covers the goal.
pub fn render_grid(
    grid: &GridModel,
    start: Option<Point>,
    goal: Option<Point>,
    path: &[Point],
) -> String {
    let cell = |x: usize, y: usize| {
        let p = Point::new(x as i32, y as i32);
        if path.contains(&p) {
            '*'
        } else if goal == Some(p) {
            'G'
        } else if start == Some(p) {
            'S'
        } else if grid.is_blocked(&p) {
            '#'
        } else {
            '.'
        }
    };
    let mut out = (0..grid.height())
        .map(|y| (0..grid.width()).map(|x| cell(x, y)).collect::<String>())
        .join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinder::find_path;

    #[test]
    fn draws_markers_over_cells() {
        let grid: GridModel = "...\n.#.\n...".parse().unwrap();
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let path = find_path(start, goal, &grid);
        assert_eq!(
            render_grid(&grid, Some(start), Some(goal), &path),
            "S..\n*#.\n***\n"
        );
        assert_eq!(
            render_grid(&grid, Some(start), Some(goal), &[]),
            "S..\n.#.\n..G\n"
        );
        assert_eq!(render_grid(&grid, None, None, &[]), grid.to_string());
    }
}

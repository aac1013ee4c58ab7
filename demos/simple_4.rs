use greedy_pathfinding::{render::render_grid, GridModel, PathFinder};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let grid: GridModel = "...\n.#.\n...".parse().unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = PathFinder::new(&grid).find_path(start, end);
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
    println!();
    print!("{}", render_grid(&grid, Some(start), Some(end), &path));
}

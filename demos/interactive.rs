use greedy_pathfinding::{ClickOutcome, GridConfig, Session};
use grid_util::point::Point;
use std::io::{self, BufRead, Write};

// Terminal version of the click-to-route demo. A random 15x15 grid is generated, the first
// entered cell becomes the start and the second the goal, after which the route is drawn.
//
// Commands:
// - `x y`   click the cell in column x, row y
// - `reset` clear start and goal
// - `new`   generate a new grid
// - `quit`
//
// Pass a number as first argument to fix the obstacle layout.

fn main() -> io::Result<()> {
    env_logger::init();
    let mut config = GridConfig::default();
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }
    let mut session = match Session::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };
    print!("{}", session.render());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" | "q" => break,
            "reset" => session.reset(),
            "new" => {
                // A fixed seed would only reproduce the current grid
                config.seed = None;
                if let Err(e) = session.regenerate(&config) {
                    eprintln!("{e}");
                }
            }
            input => {
                let coords = input
                    .split_whitespace()
                    .map(str::parse::<i32>)
                    .collect::<Result<Vec<_>, _>>();
                match coords.as_deref() {
                    Ok([x, y]) => match session.click(Point::new(*x, *y)) {
                        ClickOutcome::StartPlaced(p) => println!("Start: {p}"),
                        ClickOutcome::GoalPlaced { goal, path } if path.is_empty() => {
                            println!("Goal: {goal}, no route found")
                        }
                        ClickOutcome::GoalPlaced { goal, path } => {
                            println!("Goal: {goal}, route of {} steps", path.len())
                        }
                        ClickOutcome::Rejected(p) => println!("{p} is not a free cell"),
                        ClickOutcome::Ignored(_) => println!("Start and goal are set, try `reset`"),
                    },
                    _ => println!("Expected `x y`, `reset`, `new` or `quit`"),
                }
            }
        }
        print!("{}", session.render());
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

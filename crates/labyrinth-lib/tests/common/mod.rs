#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use labyrinth_lib::{parse_maze, Cell, Grid, Solution};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Three-row maze with a short final row.
pub const SMALL_MAZE: &str = "A  #\n## #\n #B";

/// Larger maze with dead ends and a single opening into the goal pocket.
pub const CORRIDOR_MAZE: [&str; 10] = [
    "########################################",
    "#A       ######  ######      ######    #",
    "#  ####  #               ##           ##",
    "#       #####  ######  #  #####  ###### ",
    "####  #        #       #  #             ",
    "#    ######  #####  #####  #####  ######",
    "#  #                #        #         #",
    "#  #####  ######  #####  ## #####  ### #",
    "#       #          #      #         # B#",
    "########################################",
];

/// Start and goal sealed into separate rooms.
pub const DISCONNECTED_MAZE: [&str; 4] = ["#######", "#A  # #", "#   #B#", "#######"];

/// Open room; every monotone path is shortest.
pub const OPEN_ROOM: [&str; 5] = ["A      ", "       ", "       ", "       ", "      B"];

/// Hall running away from the goal, which BFS explores and A* ignores.
pub const SIDE_HALL: [&str; 3] = ["     A     B", "  #######   ", "            "];

pub fn grid(text: &str) -> Grid {
    parse_maze(text).expect("fixture maze parses")
}

pub fn grid_from_rows(rows: &[&str]) -> Grid {
    grid(&rows.join("\n"))
}

/// Distances from start to every reachable cell, computed without the engine.
pub fn reference_distances(grid: &Grid) -> HashMap<Cell, usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(grid.start(), 0);
    queue.push_back(grid.start());

    while let Some(cell) = queue.pop_front() {
        let distance = distances[&cell];
        for (_, next) in grid.neighbors(cell) {
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Assert that a solution walks from start to goal over open, adjacent cells
/// without revisiting any cell.
pub fn assert_valid_simple_path(grid: &Grid, solution: &Solution) {
    let mut previous = grid.start();
    let mut seen = vec![grid.start()];
    for (action, cell) in solution.steps() {
        assert!(
            previous.is_adjacent(*cell),
            "{previous} -> {cell} ({action}) is not a single step"
        );
        assert!(!grid.is_blocked(*cell), "{cell} is blocked");
        assert!(!seen.contains(cell), "{cell} visited twice");
        seen.push(*cell);
        previous = *cell;
    }
    assert_eq!(previous, grid.goal(), "path must end at the goal");
}

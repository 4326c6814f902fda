//! Text maze loader.
//!
//! Maze sources are blocks of text lines: `A` marks the start, `B` the goal,
//! a space is passable, and any other character is a wall. Rows shorter than
//! the widest row are padded with passable cells.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};

/// Start marker character.
pub const START_MARKER: char = 'A';
/// Goal marker character.
pub const GOAL_MARKER: char = 'B';

/// Read and parse a maze file.
pub fn load_maze(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_maze(&contents)?;
    debug!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        open = grid.open_cells(),
        "loaded maze"
    );
    Ok(grid)
}

/// Parse maze text into a [`Grid`].
pub fn parse_maze(contents: &str) -> Result<Grid> {
    expect_single_marker(contents, START_MARKER, "start")?;
    expect_single_marker(contents, GOAL_MARKER, "goal")?;

    let lines: Vec<&str> = contents.lines().collect();
    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut walls = vec![false; height * width];
    let mut start = None;
    let mut goal = None;

    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                START_MARKER => start = Some(Cell::new(row, col)),
                GOAL_MARKER => goal = Some(Cell::new(row, col)),
                ' ' => {}
                _ => walls[row * width + col] = true,
            }
        }
    }

    // Both markers were counted above, so neither lookup can miss.
    let (Some(start), Some(goal)) = (start, goal) else {
        return Err(Error::malformed("maze is missing a start or goal marker"));
    };

    Grid::new(height, width, walls, start, goal)
}

fn expect_single_marker(contents: &str, marker: char, label: &str) -> Result<()> {
    let count = contents.chars().filter(|&ch| ch == marker).count();
    if count != 1 {
        return Err(Error::malformed(format!(
            "expected exactly one {label} marker '{marker}', found {count}"
        )));
    }
    Ok(())
}

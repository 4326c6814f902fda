use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Grid coordinate addressed as `(row, col)`, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Cell) -> u32 {
        let distance = self.row.abs_diff(other.row) + self.col.abs_diff(other.col);
        u32::try_from(distance).unwrap_or(u32::MAX)
    }

    /// Whether two cells share an edge.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }

    fn step(self, action: Action) -> Option<Cell> {
        let (row, col) = match action {
            Action::Up => (self.row.checked_sub(1)?, self.col),
            Action::Down => (self.row.checked_add(1)?, self.col),
            Action::Left => (self.row, self.col.checked_sub(1)?),
            Action::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

/// Direction taken to move between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Expansion order used by [`Grid::neighbors`].
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        f.pad(value)
    }
}

/// Immutable passability map with a single start and a single goal.
///
/// Walls are stored row-major. Once built, a grid is never mutated, so it can
/// be shared by reference across any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl Grid {
    /// Build a grid from a row-major wall vector.
    ///
    /// Fails with [`Error::MalformedMaze`] when the wall vector does not match
    /// the dimensions, or when start or goal are out of bounds, blocked, or the
    /// same cell.
    pub fn new(
        height: usize,
        width: usize,
        walls: Vec<bool>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::malformed("grid must have at least one row and column"));
        }
        let cell_count = height.checked_mul(width).ok_or_else(|| {
            Error::malformed(format!("{height}x{width} grid is too large to address"))
        })?;
        if walls.len() != cell_count {
            return Err(Error::malformed(format!(
                "expected {cell_count} cells for a {height}x{width} grid, got {}",
                walls.len()
            )));
        }

        let grid = Self {
            height,
            width,
            walls,
            start,
            goal,
        };

        for (label, cell) in [("start", start), ("goal", goal)] {
            if !grid.contains(cell) {
                return Err(Error::malformed(format!("{label} {cell} is out of bounds")));
            }
            if grid.is_blocked(cell) {
                return Err(Error::malformed(format!("{label} {cell} is blocked")));
            }
        }
        if start == goal {
            return Err(Error::malformed("start and goal must be different cells"));
        }

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `cell` lies within the grid bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Whether `cell` is a wall. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        if !self.contains(cell) {
            return true;
        }
        self.walls[cell.row * self.width + cell.col]
    }

    /// Passable neighbours of `cell` in up, down, left, right order.
    pub fn neighbors(&self, cell: Cell) -> Vec<(Action, Cell)> {
        Action::ALL
            .iter()
            .filter_map(|&action| cell.step(action).map(|next| (action, next)))
            .filter(|&(_, next)| !self.is_blocked(next))
            .collect()
    }

    /// Manhattan distance from `cell` to the goal.
    ///
    /// Admissible and consistent for unit-cost, four-way movement.
    pub fn heuristic(&self, cell: Cell) -> u32 {
        cell.manhattan(self.goal)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell { row, col }))
    }

    /// Number of passable cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|blocked| !**blocked).count()
    }
}

//! Text rendering of grids, with optional solution and explored overlays.

use crate::grid::{Cell, Grid};
use crate::search::SearchOutcome;

/// Characters used for each cell role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: char,
    pub start: char,
    pub goal: char,
    pub path: char,
    pub explored: char,
    pub empty: char,
}

impl Glyphs {
    /// Block walls, for terminals that can draw them.
    pub const fn unicode() -> Self {
        Self {
            wall: '█',
            start: 'A',
            goal: 'B',
            path: '*',
            explored: '.',
            empty: ' ',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            wall: '#',
            ..Self::unicode()
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

/// What a single cell should be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Wall,
    Start,
    Goal,
    Path,
    Explored,
    Empty,
}

/// Overlay switches shared by the text and raster renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_solution: bool,
    pub show_explored: bool,
    pub glyphs: Glyphs,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_solution: true,
            show_explored: false,
            glyphs: Glyphs::default(),
        }
    }
}

/// Classify `cell`. Precedence: wall, start, goal, path, explored, empty.
pub fn cell_role(
    grid: &Grid,
    outcome: Option<&SearchOutcome>,
    cell: Cell,
    show_solution: bool,
    show_explored: bool,
) -> CellRole {
    if grid.is_blocked(cell) {
        return CellRole::Wall;
    }
    if cell == grid.start() {
        return CellRole::Start;
    }
    if cell == grid.goal() {
        return CellRole::Goal;
    }
    if let Some(outcome) = outcome {
        if show_solution && outcome.solution.contains(cell) {
            return CellRole::Path;
        }
        if show_explored && outcome.explored.contains(&cell) {
            return CellRole::Explored;
        }
    }
    CellRole::Empty
}

/// Render the grid as one character per cell, one line per row.
pub fn render_text(grid: &Grid, outcome: Option<&SearchOutcome>, options: &RenderOptions) -> String {
    let glyphs = &options.glyphs;
    let mut buffer = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let role = cell_role(
                grid,
                outcome,
                Cell::new(row, col),
                options.show_solution,
                options.show_explored,
            );
            buffer.push(match role {
                CellRole::Wall => glyphs.wall,
                CellRole::Start => glyphs.start,
                CellRole::Goal => glyphs.goal,
                CellRole::Path => glyphs.path,
                CellRole::Explored => glyphs.explored,
                CellRole::Empty => glyphs.empty,
            });
        }
        buffer.push('\n');
    }
    buffer
}

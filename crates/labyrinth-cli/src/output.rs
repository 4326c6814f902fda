//! Output formatting for solved mazes.
//!
//! This module provides the text and JSON renderers used by the command
//! handlers. Text output colours each cell by role when the terminal allows.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use labyrinth_lib::render::{cell_role, CellRole};
use labyrinth_lib::{Cell, Grid, RenderOptions, SearchOutcome, SolveSummary, SummaryRenderMode};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable maze drawings and step list.
    #[default]
    Text,
    /// Summary header plus the moves on one line, without maze drawings.
    Compact,
    /// Pretty-printed JSON summary.
    Json,
}

/// Draw the grid one character per cell, wrapping each glyph in the colour
/// for its role.
pub fn render_grid(
    grid: &Grid,
    outcome: Option<&SearchOutcome>,
    options: &RenderOptions,
    palette: &ColorPalette,
) -> String {
    if palette.is_plain() {
        return labyrinth_lib::render_text(grid, outcome, options);
    }

    let glyphs = &options.glyphs;
    let mut buffer = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let role = cell_role(
                grid,
                outcome,
                Cell::new(row, col),
                options.show_solution,
                options.show_explored,
            );
            let (color, glyph) = match role {
                CellRole::Wall => (palette.wall, glyphs.wall),
                CellRole::Start => (palette.start, glyphs.start),
                CellRole::Goal => (palette.goal, glyphs.goal),
                CellRole::Path => (palette.path, glyphs.path),
                CellRole::Explored => (palette.explored, glyphs.explored),
                CellRole::Empty => ("", glyphs.empty),
            };
            if color.is_empty() {
                buffer.push(glyph);
            } else {
                buffer.push_str(color);
                buffer.push(glyph);
                buffer.push_str(palette.reset);
            }
        }
        buffer.push('\n');
    }
    buffer
}

/// Print the unsolved maze, the solved maze, and the step list.
pub fn render_text(
    grid: &Grid,
    outcome: &SearchOutcome,
    options: &RenderOptions,
    palette: &ColorPalette,
) {
    let heading = |label: &str| println!("{}{label}{}", palette.heading, palette.reset);

    heading("Maze:");
    print!("{}", render_grid(grid, None, options, palette));
    println!();
    heading("Solution:");
    print!("{}", render_grid(grid, Some(outcome), options, palette));
    println!();
    println!("States explored: {}", outcome.explored_count);
    print!(
        "{}",
        SolveSummary::from_outcome(grid, outcome).render(SummaryRenderMode::Plain)
    );
}

/// Serialise any summary value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

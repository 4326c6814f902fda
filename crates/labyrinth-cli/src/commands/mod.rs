// Module exports for CLI modes
//
// Each module handles one way of running the solver. main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod compare;
pub mod solve;

use labyrinth_lib::RenderOptions;

use crate::terminal::{maze_glyphs, ColorPalette};

/// Presentation switches shared by every mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// Force ASCII wall glyphs.
    pub ascii: bool,
    /// Disable ANSI colours regardless of terminal detection.
    pub no_color: bool,
    /// Overlay explored cells.
    pub show_explored: bool,
}

impl DisplayArgs {
    pub fn palette(&self) -> ColorPalette {
        if self.no_color {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_solution: true,
            show_explored: self.show_explored,
            glyphs: maze_glyphs(self.ascii),
        }
    }
}

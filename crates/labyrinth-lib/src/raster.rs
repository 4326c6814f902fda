//! PNG export of a grid, one filled square per cell.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};
use crate::render::{cell_role, CellRole};
use crate::search::SearchOutcome;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fill colour for a cell role.
pub fn role_color(role: CellRole) -> Rgba<u8> {
    match role {
        CellRole::Wall => Rgba([40, 40, 40, 255]),
        CellRole::Start => Rgba([255, 0, 0, 255]),
        CellRole::Goal => Rgba([0, 171, 28, 255]),
        CellRole::Path => Rgba([220, 235, 113, 255]),
        CellRole::Explored => Rgba([212, 97, 85, 255]),
        CellRole::Empty => Rgba([237, 240, 252, 255]),
    }
}

/// Raster layout and overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Side length of each cell in pixels.
    pub cell_size: u32,
    /// Black gap, in pixels, left around each cell's square.
    pub cell_border: u32,
    pub show_solution: bool,
    pub show_explored: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
        }
    }
}

impl ImageOptions {
    fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(Error::InvalidImageOptions {
                message: "cell size must be at least 1 pixel".to_string(),
            });
        }
        if self.cell_border >= self.cell_size.div_ceil(2) {
            return Err(Error::InvalidImageOptions {
                message: format!(
                    "cell border {} leaves no fill inside a {}px cell",
                    self.cell_border, self.cell_size
                ),
            });
        }
        Ok(())
    }
}

/// Draw the grid into an RGBA canvas.
pub fn render_image(
    grid: &Grid,
    outcome: Option<&SearchOutcome>,
    options: &ImageOptions,
) -> Result<RgbaImage> {
    options.validate()?;

    let dimension = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(options.cell_size))
            .ok_or_else(|| Error::InvalidImageOptions {
                message: format!("{cells} cells of {}px overflow the canvas", options.cell_size),
            })
    };
    let width = dimension(grid.width())?;
    let height = dimension(grid.height())?;

    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);
    let size = options.cell_size;
    let border = options.cell_border;

    for cell in grid.cells() {
        let role = cell_role(
            grid,
            outcome,
            cell,
            options.show_solution,
            options.show_explored,
        );
        let color = role_color(role);
        let (x0, y0) = cell_origin(cell, size);
        // Fill edges are inclusive, clamped so a zero border stays in the cell.
        let inset = border.max(1);
        for y in (y0 + border)..=(y0 + size - inset) {
            for x in (x0 + border)..=(x0 + size - inset) {
                canvas.put_pixel(x, y, color);
            }
        }
    }

    Ok(canvas)
}

/// Render and write the grid as a PNG file.
pub fn save_image(
    path: &Path,
    grid: &Grid,
    outcome: Option<&SearchOutcome>,
    options: &ImageOptions,
) -> Result<()> {
    let canvas = render_image(grid, outcome, options)?;
    canvas.save_with_format(path, image::ImageFormat::Png)?;
    debug!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote maze image"
    );
    Ok(())
}

// Dimensions were checked against u32 in render_image, so the casts hold.
fn cell_origin(cell: Cell, size: u32) -> (u32, u32) {
    (cell.col as u32 * size, cell.row as u32 * size)
}

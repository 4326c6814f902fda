//! Solve command handler: load a maze, search it, and report the result.

use std::path::PathBuf;

use anyhow::{Context, Result};

use labyrinth_lib::{
    load_maze, save_image, ImageOptions, SearchAlgorithm, SearchEngine, SolveSummary,
    SummaryRenderMode,
};

use crate::commands::DisplayArgs;
use crate::output::{self, OutputFormat};

/// Arguments for a single solve.
#[derive(Debug, Clone)]
pub struct SolveCommandArgs {
    /// Maze source file.
    pub maze: PathBuf,
    /// Search strategy.
    pub algorithm: SearchAlgorithm,
    /// Optional PNG output path.
    pub image: Option<PathBuf>,
    pub display: DisplayArgs,
}

impl SolveCommandArgs {
    fn image_options(&self) -> ImageOptions {
        ImageOptions {
            show_explored: self.display.show_explored,
            ..ImageOptions::default()
        }
    }
}

/// Handle a solve run.
///
/// # Errors
///
/// Returns an error when the maze cannot be loaded, has no solution, or the
/// image cannot be written.
pub fn handle_solve(args: &SolveCommandArgs, format: OutputFormat) -> Result<()> {
    let grid = load_maze(&args.maze)
        .with_context(|| format!("failed to load maze from {}", args.maze.display()))?;

    let mut engine = SearchEngine::new(&grid, args.algorithm);
    let outcome = engine.solve().with_context(|| {
        format!(
            "failed to solve {} with {}",
            args.maze.display(),
            args.algorithm
        )
    })?;

    if let Some(path) = &args.image {
        save_image(path, &grid, Some(&outcome), &args.image_options())
            .with_context(|| format!("failed to write image to {}", path.display()))?;
        tracing::info!(path = %path.display(), "maze image written");
    }

    match format {
        OutputFormat::Json => {
            let summary = SolveSummary::from_outcome(&grid, &outcome);
            output::render_json(&summary).context("failed to write JSON output")?;
        }
        OutputFormat::Compact => {
            let summary = SolveSummary::from_outcome(&grid, &outcome);
            print!("{}", summary.render(SummaryRenderMode::Compact));
        }
        OutputFormat::Text => {
            output::render_text(
                &grid,
                &outcome,
                &args.display.render_options(),
                &args.display.palette(),
            );
        }
    }

    Ok(())
}

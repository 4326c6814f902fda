//! Compare command handler: run every strategy on one maze and tabulate
//! explored-state counts and path lengths.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use labyrinth_lib::{compare, load_maze, Error as SearchError, SearchAlgorithm, SearchOutcome};

use crate::output::{self, OutputFormat};
use crate::terminal::ColorPalette;

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub algorithm: SearchAlgorithm,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    pub explored: usize,
    /// Whether the strategy guarantees a shortest path.
    pub optimal: bool,
}

impl ComparisonRow {
    fn from_result(
        algorithm: SearchAlgorithm,
        result: labyrinth_lib::Result<SearchOutcome>,
    ) -> Result<Self> {
        match result {
            Ok(outcome) => Ok(Self {
                algorithm,
                solved: true,
                steps: Some(outcome.solution.len()),
                explored: outcome.explored_count,
                optimal: algorithm.optimal(),
            }),
            Err(SearchError::NoSolution { explored }) => Ok(Self {
                algorithm,
                solved: false,
                steps: None,
                explored,
                optimal: algorithm.optimal(),
            }),
            Err(error) => Err(error).with_context(|| format!("{algorithm} search failed")),
        }
    }
}

/// Run every algorithm and collect one row each.
///
/// # Errors
///
/// Returns an error when the maze cannot be loaded or a search fails for any
/// reason other than an unreachable goal.
pub fn compare_maze(maze: &Path) -> Result<Vec<ComparisonRow>> {
    let grid = load_maze(maze)
        .with_context(|| format!("failed to load maze from {}", maze.display()))?;

    compare(&grid, &SearchAlgorithm::ALL)
        .into_iter()
        .map(|(algorithm, result)| ComparisonRow::from_result(algorithm, result))
        .collect()
}

/// Handle a comparison run.
///
/// # Errors
///
/// See [`compare_maze`]; also fails if JSON output cannot be written.
pub fn handle_compare(maze: &Path, format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    let rows = compare_maze(maze)?;
    match format {
        OutputFormat::Json => output::render_json(&rows).context("failed to write JSON output")?,
        OutputFormat::Text | OutputFormat::Compact => {
            print!("{}", render_table(&rows, palette));
        }
    }
    Ok(())
}

fn render_table(rows: &[ComparisonRow], palette: &ColorPalette) -> String {
    let mut buffer = format!(
        "{}{:<10} {:>8} {:>9} {:>8}{}\n",
        palette.heading, "Algorithm", "Steps", "Explored", "Optimal", palette.reset
    );
    for row in rows {
        let steps = row
            .steps
            .map(|steps| steps.to_string())
            .unwrap_or_else(|| "no path".to_string());
        buffer.push_str(&format!(
            "{:<10} {:>8} {:>9} {:>8}\n",
            row.algorithm.to_string(),
            steps,
            row.explored,
            if row.optimal { "yes" } else { "no" }
        ));
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_row() {
        let rows = vec![
            ComparisonRow {
                algorithm: SearchAlgorithm::Bfs,
                solved: true,
                steps: Some(4),
                explored: 5,
                optimal: true,
            },
            ComparisonRow {
                algorithm: SearchAlgorithm::Dfs,
                solved: false,
                steps: None,
                explored: 6,
                optimal: false,
            },
        ];
        let table = render_table(&rows, &ColorPalette::plain());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Algorithm     Steps  Explored  Optimal");
        assert_eq!(lines[1], "bfs               4         5      yes");
        assert_eq!(lines[2], "dfs         no path         6       no");
    }

    #[test]
    fn unreachable_goal_becomes_unsolved_row() {
        let row = ComparisonRow::from_result(
            SearchAlgorithm::AStar,
            Err(SearchError::NoSolution { explored: 3 }),
        )
        .unwrap();
        assert!(!row.solved);
        assert_eq!(row.explored, 3);
        assert!(row.optimal);
    }

    #[test]
    fn other_search_errors_propagate() {
        let result =
            ComparisonRow::from_result(SearchAlgorithm::Bfs, Err(SearchError::EmptyFrontier));
        assert!(result.is_err());
    }
}

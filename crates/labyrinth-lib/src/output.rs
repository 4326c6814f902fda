use std::fmt::Write;

use serde::Serialize;

use crate::grid::{Action, Cell, Grid};
use crate::search::SearchOutcome;
use crate::SearchAlgorithm;

/// Presentation style for turning a [`SolveSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRenderMode {
    /// Header plus one numbered line per move.
    Plain,
    /// Header plus the actions joined on a single line.
    Compact,
}

/// Endpoint of a solved maze.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Endpoint {
    pub row: usize,
    pub col: usize,
}

impl From<Cell> for Endpoint {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
        }
    }
}

/// Move taken while following a solution.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub action: Action,
    pub row: usize,
    pub col: usize,
}

/// Structured representation of a solved maze that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SolveSummary {
    pub algorithm: SearchAlgorithm,
    pub explored: usize,
    pub steps: usize,
    pub start: Endpoint,
    pub goal: Endpoint,
    pub path: Vec<PathStep>,
}

impl SolveSummary {
    /// Convert a [`SearchOutcome`] into a summary anchored on the grid's endpoints.
    pub fn from_outcome(grid: &Grid, outcome: &SearchOutcome) -> Self {
        let path = outcome
            .solution
            .steps()
            .iter()
            .enumerate()
            .map(|(index, (action, cell))| PathStep {
                index: index + 1,
                action: *action,
                row: cell.row,
                col: cell.col,
            })
            .collect::<Vec<_>>();

        Self {
            algorithm: outcome.algorithm,
            explored: outcome.explored_count,
            steps: path.len(),
            start: grid.start().into(),
            goal: grid.goal().into(),
            path,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: SummaryRenderMode) -> String {
        match mode {
            SummaryRenderMode::Plain => self.render_plain(),
            SummaryRenderMode::Compact => self.render_compact(),
        }
    }

    fn header(&self) -> String {
        format!(
            "Solved ({}, {}) -> ({}, {}) in {} steps (algorithm: {}, explored: {})",
            self.start.row,
            self.start.col,
            self.goal.row,
            self.goal.col,
            self.steps,
            self.algorithm,
            self.explored
        )
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        for step in &self.path {
            let _ = writeln!(
                buffer,
                "{:>3}: {:<5} -> ({}, {})",
                step.index, step.action, step.row, step.col
            );
        }
        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        let joined = self
            .path
            .iter()
            .map(|step| step.action.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(buffer, "{joined}");
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_maze;
    use crate::search::solve;

    fn summary() -> SolveSummary {
        let grid = parse_maze("A \n B").unwrap();
        let outcome = solve(&grid, SearchAlgorithm::Bfs).unwrap();
        SolveSummary::from_outcome(&grid, &outcome)
    }

    #[test]
    fn summary_counts_steps_and_numbers_from_one() {
        let summary = summary();
        assert_eq!(summary.steps, 2);
        assert_eq!(summary.path[0].index, 1);
        assert_eq!(summary.goal, Endpoint { row: 1, col: 1 });
    }

    #[test]
    fn plain_render_lists_each_move() {
        let text = summary().render(SummaryRenderMode::Plain);
        assert!(text.starts_with("Solved (0, 0) -> (1, 1) in 2 steps (algorithm: bfs"));
        assert!(text.contains("  1: down  -> (1, 0)"));
        assert!(text.contains("  2: right -> (1, 1)"));
    }

    #[test]
    fn compact_render_joins_actions() {
        let text = summary().render(SummaryRenderMode::Compact);
        assert!(text.ends_with("down right\n"));
    }

    #[test]
    fn summary_serialises_actions_in_snake_case() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["algorithm"], "bfs");
        assert_eq!(json["path"][0]["action"], "down");
        assert_eq!(json["steps"], 2);
    }
}

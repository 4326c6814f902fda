//! Strategy-parameterised search engine.
//!
//! One [`SearchEngine`] performs exactly one run over a borrowed [`Grid`]. The
//! loop is written once against the [`Frontier`] trait; BFS, DFS and A* differ
//! only in the frontier picked by [`StrategyFrontier::for_algorithm`] and in
//! whether nodes carry a heuristic estimate.
//!
//! # Example
//!
//! ```
//! use labyrinth_lib::{parse_maze, solve, SearchAlgorithm};
//!
//! let grid = parse_maze("A  #\n## #\n #B")?;
//! let outcome = solve(&grid, SearchAlgorithm::AStar)?;
//! assert_eq!(outcome.solution.len(), 4);
//! # Ok::<(), labyrinth_lib::Error>(())
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::algorithm::SearchAlgorithm;
use crate::error::{Error, Result};
use crate::frontier::{Frontier, QueuedNode, StrategyFrontier};
use crate::grid::{Action, Cell, Grid};
use crate::node::{NodeArena, SearchNode};

/// Lifecycle of a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Ready,
    Running,
    Solved,
    Failed,
}

impl EngineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EngineState::Solved | EngineState::Failed)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EngineState::Ready => "ready",
            EngineState::Running => "running",
            EngineState::Solved => "solved",
            EngineState::Failed => "failed",
        };
        f.write_str(value)
    }
}

/// Steps from the cell after start up to and including the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    steps: Vec<(Action, Cell)>,
}

impl Solution {
    pub fn new(steps: Vec<(Action, Cell)>) -> Self {
        Self { steps }
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[(Action, Cell)] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().map(|(action, _)| *action)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().map(|(_, cell)| *cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.steps.iter().any(|(_, step)| *step == cell)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    pub solution: Solution,
    /// Number of nodes popped from the frontier, including the goal.
    pub explored_count: usize,
    /// States expanded before the goal was popped.
    pub explored: HashSet<Cell>,
}

/// Single-use search over a shared, read-only grid.
#[derive(Debug)]
pub struct SearchEngine<'g> {
    grid: &'g Grid,
    algorithm: SearchAlgorithm,
    state: EngineState,
}

impl<'g> SearchEngine<'g> {
    pub fn new(grid: &'g Grid, algorithm: SearchAlgorithm) -> Self {
        Self {
            grid,
            algorithm,
            state: EngineState::Ready,
        }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run the search. Only the first call does any work; later calls fail
    /// with [`Error::EngineSpent`].
    pub fn solve(&mut self) -> Result<SearchOutcome> {
        if self.state != EngineState::Ready {
            warn!(algorithm = %self.algorithm, state = %self.state, "engine reused after run");
            return Err(Error::EngineSpent { state: self.state });
        }

        self.state = EngineState::Running;
        debug!(
            algorithm = %self.algorithm,
            start = %self.grid.start(),
            goal = %self.grid.goal(),
            "search started"
        );

        let result = self.run();
        self.state = if result.is_ok() {
            EngineState::Solved
        } else {
            EngineState::Failed
        };

        match &result {
            Ok(outcome) => debug!(
                algorithm = %self.algorithm,
                explored = outcome.explored_count,
                steps = outcome.solution.len(),
                "search solved"
            ),
            Err(error) => debug!(algorithm = %self.algorithm, %error, "search failed"),
        }

        result
    }

    fn heuristic(&self, cell: Cell) -> u32 {
        if self.algorithm.uses_heuristic() {
            self.grid.heuristic(cell)
        } else {
            0
        }
    }

    fn run(&self) -> Result<SearchOutcome> {
        let grid = self.grid;
        let goal = grid.goal();

        let mut arena = NodeArena::new();
        let mut frontier = StrategyFrontier::for_algorithm(self.algorithm);
        let mut explored: HashSet<Cell> = HashSet::new();
        let mut explored_count = 0usize;

        let root = SearchNode::root(grid.start(), self.heuristic(grid.start()));
        let root_id = arena.insert(root);
        frontier.push(QueuedNode::new(root_id, arena.get(root_id)));

        loop {
            if frontier.is_empty() {
                return Err(Error::NoSolution {
                    explored: explored_count,
                });
            }

            let queued = frontier.pop()?;
            explored_count += 1;
            trace!(state = %queued.state, estimate = queued.estimate, "expanding");

            if queued.state == goal {
                return Ok(SearchOutcome {
                    algorithm: self.algorithm,
                    solution: Solution::new(arena.path_to(queued.id)),
                    explored_count,
                    explored,
                });
            }

            explored.insert(queued.state);

            // A state already scheduled is never re-queued, even if this path
            // to it is cheaper.
            for (action, next) in grid.neighbors(queued.state) {
                if explored.contains(&next) || frontier.contains_state(next) {
                    continue;
                }
                let child = arena.insert_child(queued.id, action, next, self.heuristic(next));
                frontier.push(QueuedNode::new(child, arena.get(child)));
            }
        }
    }
}

/// Run one search with a freshly constructed engine.
pub fn solve(grid: &Grid, algorithm: SearchAlgorithm) -> Result<SearchOutcome> {
    SearchEngine::new(grid, algorithm).solve()
}

/// Run each algorithm on its own engine over the same grid.
pub fn compare(
    grid: &Grid,
    algorithms: &[SearchAlgorithm],
) -> Vec<(SearchAlgorithm, Result<SearchOutcome>)> {
    algorithms
        .iter()
        .map(|&algorithm| (algorithm, solve(grid, algorithm)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_maze;

    #[test]
    fn engine_transitions_to_solved_and_refuses_reuse() {
        let grid = parse_maze("AB").unwrap();
        let mut engine = SearchEngine::new(&grid, SearchAlgorithm::Bfs);
        assert_eq!(engine.state(), EngineState::Ready);

        let outcome = engine.solve().expect("adjacent goal");
        assert_eq!(engine.state(), EngineState::Solved);
        assert_eq!(outcome.solution.steps(), &[(Action::Right, Cell::new(0, 1))]);

        let error = engine.solve().unwrap_err();
        assert!(matches!(
            error,
            Error::EngineSpent {
                state: EngineState::Solved
            }
        ));
    }

    #[test]
    fn engine_transitions_to_failed_on_unreachable_goal() {
        let grid = parse_maze("A#B").unwrap();
        let mut engine = SearchEngine::new(&grid, SearchAlgorithm::Dfs);
        let error = engine.solve().unwrap_err();
        assert!(matches!(error, Error::NoSolution { explored: 1 }));
        assert_eq!(engine.state(), EngineState::Failed);
        assert!(engine.state().is_terminal());
    }

    #[test]
    fn explored_set_excludes_the_goal() {
        let grid = parse_maze("A B").unwrap();
        let outcome = solve(&grid, SearchAlgorithm::Bfs).unwrap();
        assert_eq!(outcome.explored_count, 3);
        assert_eq!(outcome.explored.len(), 2);
        assert!(!outcome.explored.contains(&grid.goal()));
    }

    #[test]
    fn dfs_follows_last_pushed_neighbour_first() {
        // From the start, DFS pushes down then right; right is popped first.
        let grid = parse_maze("A  \n   \n  B").unwrap();
        let outcome = solve(&grid, SearchAlgorithm::Dfs).unwrap();
        assert_eq!(outcome.solution.actions().next(), Some(Action::Right));
    }

    #[test]
    fn compare_runs_each_algorithm_independently() {
        let grid = parse_maze("A  #\n## #\n #B").unwrap();
        let results = compare(&grid, &SearchAlgorithm::ALL);
        assert_eq!(results.len(), 3);
        for (algorithm, result) in results {
            let outcome = result.expect("solvable maze");
            assert_eq!(outcome.algorithm, algorithm);
            assert_eq!(outcome.solution.len(), 4);
        }
    }
}

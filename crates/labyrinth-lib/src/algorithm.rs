use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search (FIFO frontier, shortest path).
    Bfs,
    /// Depth-first search (LIFO frontier, no optimality guarantee).
    Dfs,
    /// A* search guided by Manhattan distance.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl SearchAlgorithm {
    /// Every strategy, in the order they are reported by comparisons.
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::AStar,
    ];

    /// Whether nodes carry a heuristic estimate for this strategy.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, SearchAlgorithm::AStar)
    }

    /// Whether the strategy guarantees a shortest path on unit-cost grids.
    pub fn optimal(self) -> bool {
        matches!(self, SearchAlgorithm::Bfs | SearchAlgorithm::AStar)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search algorithm '{}'; expected one of: bfs, dfs, a-star",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for SearchAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(SearchAlgorithm::Bfs),
            "dfs" => Ok(SearchAlgorithm::Dfs),
            "a-star" | "astar" | "a*" | "a_star" => Ok(SearchAlgorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

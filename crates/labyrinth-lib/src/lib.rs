//! Labyrinth library entry points.
//!
//! This crate loads text mazes into an immutable [`Grid`], solves them with
//! breadth-first, depth-first, or A* search, and renders the result as text,
//! PNG, or a serialisable summary. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod algorithm;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod loader;
pub mod node;
pub mod output;
pub mod raster;
pub mod render;
pub mod search;

pub use algorithm::{SearchAlgorithm, UnknownAlgorithm};
pub use error::{Error, Result};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier, StrategyFrontier};
pub use grid::{Action, Cell, Grid};
pub use loader::{load_maze, parse_maze};
pub use node::{NodeArena, NodeId, SearchNode};
pub use output::{SolveSummary, SummaryRenderMode};
pub use raster::{render_image, save_image, ImageOptions};
pub use render::{render_text, Glyphs, RenderOptions};
pub use search::{compare, solve, EngineState, SearchEngine, SearchOutcome, Solution};

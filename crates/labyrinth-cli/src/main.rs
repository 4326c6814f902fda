use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use labyrinth_cli::commands::compare::handle_compare;
use labyrinth_cli::commands::solve::{handle_solve, SolveCommandArgs};
use labyrinth_cli::commands::DisplayArgs;
use labyrinth_cli::output::OutputFormat;
use labyrinth_lib::SearchAlgorithm;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solve text mazes with breadth-first, depth-first, or A* search"
)]
struct Cli {
    /// Maze file: 'A' marks the start, 'B' the goal, spaces are open, anything else is a wall.
    maze: PathBuf,

    /// Search algorithm (bfs, dfs, a-star).
    #[arg(long, short, default_value_t = SearchAlgorithm::AStar)]
    algorithm: SearchAlgorithm,

    /// Run every algorithm and report explored states and path lengths.
    #[arg(
        long,
        conflicts_with_all = ["algorithm", "image", "show_explored", "ascii"]
    )]
    compare: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Mark explored cells that are not on the solution path.
    #[arg(long)]
    show_explored: bool,

    /// Write a PNG rendering of the solved maze to this path.
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Draw walls with '#' instead of block characters.
    #[arg(long)]
    ascii: bool,

    /// Disable ANSI colours.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let display = DisplayArgs {
        ascii: cli.ascii,
        no_color: cli.no_color,
        show_explored: cli.show_explored,
    };

    if cli.compare {
        return handle_compare(&cli.maze, cli.format, &display.palette());
    }

    let args = SolveCommandArgs {
        maze: cli.maze,
        algorithm: cli.algorithm,
        image: cli.image,
        display,
    };
    handle_solve(&args, cli.format)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

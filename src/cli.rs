//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// edgeviz - graph algorithm visualizer
#[derive(Parser, Debug)]
#[command(name = "edgeviz")]
#[command(version)]
#[command(about = "Run classical graph algorithms on an edge list and draw the result")]
#[command(
    long_about = "edgeviz parses an edge list (one `u v [weight]` per line), runs BFS, DFS, Dijkstra, Kruskal or Prim on it, and draws the graph with the result highlighted, either headless as SVG or in a desktop window."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one algorithm on an edge file and write the plot as SVG
    Run(RunArgs),

    /// Open the desktop window
    Gui {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Edge list file, or `-` for stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Algorithm name (BFS, DFS, Dijkstra, Kruskal, Prim), case-insensitive
    #[arg(short, long)]
    pub algorithm: String,

    /// Source node label
    #[arg(short, long, default_value = "")]
    pub source: String,

    /// Target node label
    #[arg(short, long, default_value = "")]
    pub target: String,

    /// Where to write the SVG plot
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

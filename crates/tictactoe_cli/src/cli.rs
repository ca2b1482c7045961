//! Command-line interface for the tictactoe terminal front end.

use clap::Parser;

/// Play tic-tac-toe in the terminal, two players on one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (display marks and legend)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Print session snapshots as JSON instead of drawing the board
    #[arg(long)]
    pub json: bool,

    /// Play these squares (0-8) in order, print the result and exit
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<usize>>,
}

//! tictactoe - two players, one terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{App, AppConfig, Cli};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;
    info!(json = cli.json, scripted = cli.moves.is_some(), "Starting tictactoe");

    let mut app = App::new(config, cli.json);
    let mut stdout = std::io::stdout().lock();

    match cli.moves {
        Some(moves) => app.play_script(&moves, &mut stdout),
        None => app.run(std::io::stdin().lock(), &mut stdout),
    }
}

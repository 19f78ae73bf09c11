//! Gridmark - console game

use anyhow::Result;
use clap::Parser;
use gridmark_board::ClassicBoard;
use gridmark_console::cli::Cli;
use gridmark_console::{Console, ConsoleConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    info!(?config, "Starting gridmark");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout(), *config.clear_screen());
    let board = ClassicBoard::with_starting_player(*config.starting_player());
    let mut session = Session::new(board, console, config);

    let tally = session.run()?;
    info!(
        games = tally.games(),
        x_wins = tally.x_wins(),
        o_wins = tally.o_wins(),
        draws = tally.draws(),
        "Session ended"
    );
    Ok(())
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut config = ConsoleConfig::load_or_default(&cli.config)?;

    if let Some(mark) = cli.starting_player {
        config = config.with_starting_player(mark.into());
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }

    Ok(config)
}

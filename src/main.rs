use clap::Parser;
use tracing::error;

use duel_chess::console::console_top::run_stdio_loop;
use duel_chess::console::game_config::{Cli, GameConfig};
use duel_chess::utils::logging::setup_logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logger(cli.log_level.as_deref());

    let config = GameConfig::from(&cli);
    let game_state = config.new_game().map_err(|err| {
        error!(error = %err, "could not set up the starting position");
        err
    })?;

    run_stdio_loop(game_state, config)?;
    Ok(())
}

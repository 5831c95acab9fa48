//! Session configuration and its command-line surface.

use std::num::NonZeroUsize;

use clap::Parser;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::RuleMode;
use crate::game_state::game_state::GameState;
use crate::utils::render_game_state::RenderStyle;

/// Two-player terminal chess with undo.
#[derive(Debug, Parser)]
#[command(name = "duel_chess", version, about)]
pub struct Cli {
    /// Reject moves that leave the mover's own king in check.
    #[arg(long)]
    pub strict: bool,

    /// Draw the board without ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Keep at most N moves in the undo log; older moves cannot be taken back.
    #[arg(long, value_name = "N")]
    pub history_limit: Option<NonZeroUsize>,

    /// Start from this position instead of the standard one.
    #[arg(long, value_name = "FEN")]
    pub fen: Option<String>,

    /// Tracing filter, e.g. `debug`. Overrides RUST_LOG.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rule_mode: RuleMode,
    pub render_style: RenderStyle,
    pub history_limit: Option<usize>,
    pub start_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rule_mode: RuleMode::Simplified,
            render_style: RenderStyle::Ansi,
            history_limit: None,
            start_fen: None,
        }
    }
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            rule_mode: if cli.strict {
                RuleMode::Strict
            } else {
                RuleMode::Simplified
            },
            render_style: if cli.no_color {
                RenderStyle::Plain
            } else {
                RenderStyle::Ansi
            },
            history_limit: cli.history_limit.map(NonZeroUsize::get),
            start_fen: cli.fen.clone(),
        }
    }
}

impl GameConfig {
    /// Fresh game state for this configuration.
    pub fn new_game(&self) -> ChessResult<GameState> {
        let game_state = match &self.start_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };

        Ok(game_state
            .with_rule_mode(self.rule_mode)
            .with_history_limit(self.history_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Color;

    #[test]
    fn defaults_are_simplified_colored_and_unbounded() {
        let cli = Cli::try_parse_from(["duel_chess"]).expect("no flags should parse");
        assert_eq!(GameConfig::from(&cli), GameConfig::default());
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn flags_map_onto_the_config() {
        let cli = Cli::try_parse_from([
            "duel_chess",
            "--strict",
            "--no-color",
            "--history-limit",
            "5",
            "--fen",
            "4k3/8/8/8/8/8/8/4K3 b - - 0 1",
        ])
        .expect("flags should parse");
        let config = GameConfig::from(&cli);

        assert_eq!(config.rule_mode, RuleMode::Strict);
        assert_eq!(config.render_style, RenderStyle::Plain);
        assert_eq!(config.history_limit, Some(5));

        let game = config.new_game().expect("fixture FEN should parse");
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.rule_mode, RuleMode::Strict);
        assert_eq!(game.history_limit, Some(5));
    }

    #[test]
    fn bad_start_fen_is_reported() {
        let config = GameConfig {
            start_fen: Some("not a fen".to_owned()),
            ..GameConfig::default()
        };
        assert!(matches!(config.new_game(), Err(ChessErrors::InvalidFen(_))));
    }

    #[test]
    fn history_limit_must_be_a_positive_number() {
        assert!(Cli::try_parse_from(["duel_chess", "--history-limit", "lots"]).is_err());
        assert!(Cli::try_parse_from(["duel_chess", "--history-limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["duel_chess", "--history-limit", "1"]).expect("1 is a valid limit");
        assert_eq!(GameConfig::from(&cli).history_limit, Some(1));
    }
}

// main.rs - Terminal driver: reads commands from stdin and plays both seats
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use scrabble_board::game::{GameConfig, GameState, ScoringMode, RACK_SIZE};
use scrabble_board::logging::setup_logging;
use scrabble_board::services::command::{execute, parse_command, render, Command, HELP};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ScoringModeCli {
    FullBoardRecount,
    NewTilesOnly,
}

impl From<ScoringModeCli> for ScoringMode {
    fn from(cli: ScoringModeCli) -> Self {
        match cli {
            ScoringModeCli::FullBoardRecount => ScoringMode::FullBoardRecount,
            ScoringModeCli::NewTilesOnly => ScoringMode::NewTilesOnly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scrabble_board", version, about)]
struct Config {
    /// Seed for letter draws (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// How a submit counts the player's tiles
    #[arg(long, value_enum, default_value = "full-board-recount")]
    scoring_mode: ScoringModeCli,

    /// Rack size to top up to after each turn
    #[arg(long, default_value_t = RACK_SIZE)]
    rack_size: usize,

    /// Hand over the turn without waiting for `ack`
    #[arg(long, default_value_t = false)]
    no_ack: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files into this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl From<&Config> for GameConfig {
    fn from(config: &Config) -> Self {
        GameConfig {
            rack_size: config.rack_size,
            scoring_mode: config.scoring_mode.clone().into(),
            require_acknowledgment: !config.no_ack,
            seed: config.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let mut state = GameState::new(GameConfig::from(&config));
    log::info!(
        "New game {} ({:?}, rack size {})",
        state.session_id,
        state.config.scoring_mode,
        state.config.rack_size
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{}", HELP, render(&state))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut state, &command) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => {
                log::warn!("{:?} rejected: {}", command, e);
                writeln!(stdout, "{}", e)?;
            }
        }
        stdout.flush()?;
    }

    log::info!(
        "Game {} over after {} turn(s), scores {:?}",
        state.session_id,
        state.turns_played,
        state.scores
    );
    Ok(())
}

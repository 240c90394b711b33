//! Line commands for the terminal driver.

use crate::game::board::Position;
use crate::game::game_state::GameState;
use crate::game::player::Player;
use crate::game::tile::TileId;
use crate::services::drag_drop::{handle_drop, DragPayload};
use crate::services::game_manager::{acknowledge_turn, return_tile_to_rack, submit_turn};
use crate::services::snapshot::{scoreboard, snapshot_json};
use crate::{Result, ScrabbleError};

pub const HELP: &str = "\
commands:
  place <tile> <row> <col>   put a rack tile on the board
  move <tile> <row> <col>    move a tile you placed this turn
  return <tile>              take a tile you placed back to your rack
  submit                     score your tiles and pass the turn
  ack                        acknowledge the turn change
  show                       print board, rack and scores
  json                       print the game snapshot as JSON
  history                    list submitted turns
  help                       this text
  quit                       leave the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place { tile: TileId, row: usize, col: usize },
    Move { tile: TileId, row: usize, col: usize },
    Return { tile: TileId },
    Submit,
    Ack,
    Show,
    Json,
    History,
    Help,
    Quit,
}

fn parse_tile(arg: Option<&str>) -> Result<TileId> {
    let arg = arg.ok_or_else(|| ScrabbleError::Command("missing tile id".to_string()))?;
    arg.parse()
        .map_err(|_| ScrabbleError::Command(format!("invalid tile id '{}'", arg)))
}

fn parse_coord(arg: Option<&str>, name: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| ScrabbleError::Command(format!("missing {}", name)))?;
    arg.parse()
        .map_err(|_| ScrabbleError::Command(format!("invalid {} '{}'", name, arg)))
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or_else(|| ScrabbleError::Command("empty command".to_string()))?
        .to_ascii_lowercase();

    let command = match verb.as_str() {
        "place" | "p" => Command::Place {
            tile: parse_tile(words.next())?,
            row: parse_coord(words.next(), "row")?,
            col: parse_coord(words.next(), "col")?,
        },
        "move" | "m" => Command::Move {
            tile: parse_tile(words.next())?,
            row: parse_coord(words.next(), "row")?,
            col: parse_coord(words.next(), "col")?,
        },
        "return" | "r" => Command::Return {
            tile: parse_tile(words.next())?,
        },
        "submit" | "s" => Command::Submit,
        "ack" | "ok" => Command::Ack,
        "show" => Command::Show,
        "json" => Command::Json,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ScrabbleError::Command(format!("unknown command '{}'", other))),
    };

    if let Some(extra) = words.next() {
        return Err(ScrabbleError::Command(format!("unexpected argument '{}'", extra)));
    }
    Ok(command)
}

/// Board, active rack and scores as plain text.
pub fn render(state: &GameState) -> String {
    let player = state.active_player();
    let rack: Vec<String> = state
        .rack(player)
        .tiles()
        .iter()
        .map(|tile| format!("{}:{}", tile.id, tile.letter))
        .collect();
    format!(
        "{}\n{} rack: {}\n{}",
        state.board,
        player,
        rack.join(" "),
        scoreboard(state)
    )
}

fn render_history(state: &GameState) -> String {
    if state.history.turns.is_empty() {
        return "no turns submitted yet".to_string();
    }
    let mut lines: Vec<String> = state
        .history
        .turns
        .iter()
        .map(|turn| {
            let letters: String = turn.letters.iter().map(|l| l.letter).collect();
            format!(
                "#{} {}: +{} ({}) total {}",
                turn.turn, turn.player, turn.score_delta, letters, turn.total
            )
        })
        .collect();
    for player in Player::ALL {
        let turns = state.history.turns_of(player).count();
        let best = state.history.turns_of(player).map(|t| t.score_delta).max().unwrap_or(0);
        lines.push(format!("{}: {} turn(s), best +{}", player, turns, best));
    }
    lines.join("\n")
}

/// Runs one command and returns the text to show. `Quit` is left to the caller.
pub fn execute(state: &mut GameState, command: &Command) -> Result<String> {
    let output = match *command {
        Command::Place { tile, row, col } => {
            let destination = Position::checked(row, col)?;
            let letter = rack_letter(state, state.active_player(), tile).unwrap_or('?');
            let payload = DragPayload {
                tile_id: tile,
                letter,
                origin: None,
            };
            handle_drop(state, payload, destination)?;
            render(state)
        }
        Command::Move { tile, row, col } => {
            let destination = Position::checked(row, col)?;
            let origin = state.board.find(tile);
            let letter = origin
                .and_then(|position| state.board.get(position))
                .map(|placed| placed.letter())
                .unwrap_or('?');
            let payload = DragPayload {
                tile_id: tile,
                letter,
                origin: Some(origin.unwrap_or(destination)),
            };
            handle_drop(state, payload, destination)?;
            render(state)
        }
        Command::Return { tile } => {
            let returned = return_tile_to_rack(state, tile)?;
            format!("{} ({}) back in rack\n{}", returned.id, returned.letter, render(state))
        }
        Command::Submit => {
            let result = submit_turn(state)?;
            format!(
                "{} scored {} (total {})\n{}",
                result.player, result.score_delta, result.total, result.notification
            )
        }
        Command::Ack => {
            acknowledge_turn(state)?;
            render(state)
        }
        Command::Show => render(state),
        Command::Json => snapshot_json(state)?,
        Command::History => render_history(state),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output)
}

fn rack_letter(state: &GameState, player: Player, tile: TileId) -> Option<char> {
    state
        .rack(player)
        .tiles()
        .iter()
        .find(|t| t.id == tile)
        .map(|t| t.letter)
}

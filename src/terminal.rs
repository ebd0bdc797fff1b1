//! Line-driven terminal session.
//!
//! Reads one command per line and redraws the board after every change.
//! The solver replies on its own turns without prompting.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{Difficulty, Game, GameMode, MoveSource, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the cell at (row, col).
    Mark {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Switch between vs-human and vs-AI.
    ToggleMode,
    /// Change the solver's strategy.
    SetDifficulty(Difficulty),
    /// End the session.
    Quit,
}

/// Input that is not a recognized command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{input}': enter 'row col', r, m, 0, 1 or q")]
pub struct CommandParseError {
    /// The offending line, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let invalid = || CommandParseError {
            input: line.to_string(),
        };

        match line {
            "r" | "R" => return Ok(Self::Reset),
            "m" | "M" => return Ok(Self::ToggleMode),
            "0" => return Ok(Self::SetDifficulty(Difficulty::Easy)),
            "1" => return Ok(Self::SetDifficulty(Difficulty::Hard)),
            "q" | "Q" => return Ok(Self::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::Mark { row, col })
    }
}

/// Runs a session until `q` or end of input.
///
/// # Errors
///
/// Returns I/O errors from `input` or `output`. Rejected moves are
/// reported to the player and do not end the session.
#[instrument(skip_all, fields(mode = %game.mode(), difficulty = %game.difficulty()))]
pub fn run_terminal<S, R, W>(game: &mut Game<S>, input: R, mut output: W) -> anyhow::Result<()>
where
    S: MoveSource,
    R: BufRead,
    W: Write,
{
    info!("Starting terminal session");
    let mut lines = input.lines();

    loop {
        while game.is_ai_turn() {
            let mov = game.play_ai_turn()?;
            writeln!(output, "{} plays {}", mov.player.symbol(), mov.position)?;
        }

        render(game, &mut output)?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("Input closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                game.reset();
                writeln!(output, "New game")?;
            }
            Command::ToggleMode => {
                let mode = game.toggle_mode();
                writeln!(output, "Mode: {}", mode_label(mode))?;
            }
            Command::SetDifficulty(difficulty) => {
                game.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}", difficulty)?;
            }
            Command::Mark { row, col } => {
                if let Err(e) = game.play_at(row, col) {
                    warn!(row, col, error = %e, "Move rejected");
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }

    info!(outcome = %game.outcome(), "Terminal session ended");
    Ok(())
}

fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::PlayerVsPlayer => "player vs player",
        GameMode::PlayerVsAi => "player vs AI",
    }
}

/// Draws the grid with coordinates and a status line.
fn render<S: MoveSource, W: Write>(game: &Game<S>, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "   0 1 2")?;
    for row in 0..3 {
        write!(output, "{row} ")?;
        for col in 0..3 {
            let symbol = Position::new(row, col)
                .map(|pos| game.board().get(pos).symbol())
                .unwrap_or(' ');
            write!(output, " {symbol}")?;
        }
        writeln!(output)?;
    }

    match game.outcome() {
        Outcome::NoResult => writeln!(
            output,
            "{} to move ({}, {})",
            game.to_move().symbol(),
            mode_label(game.mode()),
            game.difficulty()
        ),
        outcome => {
            match game.winning_line() {
                Some(line) => writeln!(
                    output,
                    "{} wins along {} to {}",
                    line.player().symbol(),
                    line.start(),
                    line.end()
                )?,
                None => writeln!(output, "{}", outcome)?,
            }
            writeln!(output, "r to play again, q to quit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1 2".parse(), Ok(Command::Mark { row: 1, col: 2 }));
        assert_eq!(" 0,0 ".parse(), Ok(Command::Mark { row: 0, col: 0 }));
    }

    #[test]
    fn test_parse_single_key_commands() {
        assert_eq!("r".parse(), Ok(Command::Reset));
        assert_eq!("m".parse(), Ok(Command::ToggleMode));
        assert_eq!("0".parse(), Ok(Command::SetDifficulty(Difficulty::Easy)));
        assert_eq!("1".parse(), Ok(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1 2 3".parse::<Command>().is_err());
        assert!("x y".parse::<Command>().is_err());
        assert!("2".parse::<Command>().is_err());
    }
}

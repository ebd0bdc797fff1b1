//! One-shot position analysis.

use derive_getters::Getters;
use tictactoe_engine::{Board, Difficulty, MoveError, Player, Position, ScriptedSource, Solver};
use tracing::instrument;

/// The hard solver's verdict on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Suggestion {
    /// Side to move.
    player: Player,
    /// Best move for that side.
    position: Position,
    /// Minimax value with player one positive.
    score: i8,
    /// Positions the search visited.
    nodes: u64,
}

impl Suggestion {
    /// Expected result for the side to move under perfect play.
    pub fn verdict(&self) -> &'static str {
        let own = match self.player {
            Player::One => self.score,
            Player::Two => -self.score,
        };
        match own.signum() {
            1 => "win",
            -1 => "loss",
            _ => "draw",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} should play {}: {} with best play ({} positions searched)",
            self.player.symbol(),
            self.position,
            self.verdict(),
            self.nodes
        )
    }
}

/// Whose turn it is, assuming player one moved first.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::One) > board.count(Player::Two) {
        Player::Two
    } else {
        Player::One
    }
}

/// Runs the full search for `player` on `board`.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the position is already decided.
/// - [`MoveError::NoLegalMoves`] if the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest(board: &Board, player: Player) -> Result<Suggestion, MoveError> {
    if board.winning_line().is_some() {
        return Err(MoveError::GameOver);
    }

    let solver = Solver::new(Difficulty::Hard, player, ScriptedSource::new([]));
    let result = solver.analyze(board)?;
    let position = result.best_move().ok_or(MoveError::NoLegalMoves)?;

    Ok(Suggestion {
        player,
        position,
        score: result.score(),
        nodes: result.nodes(),
    })
}

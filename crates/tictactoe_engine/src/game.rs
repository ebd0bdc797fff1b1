//! Turn-taking driver for a single game session.
//!
//! The driver owns the board, the solver and the configuration the
//! presentation layer hands it. It alternates turns, applies human and
//! solver moves, and reports the outcome. It never draws anything.

use super::invariants::assert_game_invariants;
use super::solver::{MoveSource, Solver};
use super::{
    Board, Difficulty, GameConfig, GameMode, Move, MoveError, Outcome, Player, Position,
    WinningLine,
};
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// A game in progress or finished, plus its configuration.
///
/// Player one always moves first. `reset` starts a fresh board and keeps
/// the mode, difficulty and solver side.
#[derive(Debug, Clone)]
pub struct Game<S = StdRng> {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    mode: GameMode,
    solver: Solver<S>,
}

impl Game<StdRng> {
    /// Creates a game whose solver draws easy-mode picks from a seeded RNG.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_solver(
            config.mode,
            Solver::seeded(config.difficulty, config.ai_player, seed),
        )
    }

    /// Creates a game whose solver is seeded from the operating system.
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_solver(
            config.mode,
            Solver::from_entropy(config.difficulty, config.ai_player),
        )
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

impl<S: MoveSource> Game<S> {
    /// Creates a game around an already configured solver.
    #[instrument(
        skip(solver),
        fields(ai_player = %solver.player(), difficulty = %solver.difficulty())
    )]
    pub fn with_solver(mode: GameMode, solver: Solver<S>) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::One,
            mode,
            solver,
        }
    }

    /// Marks `position` for the player to move.
    ///
    /// Returns the outcome after the mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.apply(position)
    }

    /// Marks the cell at (`row`, `col`) for the player to move.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus [`MoveError::OutOfBounds`] for coordinates
    /// off the grid.
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        self.play(Position::new(row, col)?)
    }

    /// Lets the solver take its turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::NotAiTurn`] outside vs-AI mode or on the human's turn.
    #[instrument(
        skip(self),
        fields(player = %self.to_move, difficulty = %self.solver.difficulty())
    )]
    pub fn play_ai_turn(&mut self) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(MoveError::NotAiTurn);
        }

        let position = self.solver.choose_move(&self.board)?;
        let mov = Move::new(self.to_move, position);
        self.apply(position)?;
        info!(%mov, "AI marked square");
        Ok(mov)
    }

    fn apply(&mut self, position: Position) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.mark(position, player)?;
        self.history.push(Move::new(player, position));
        self.to_move = player.opponent();

        assert_game_invariants(self);

        let outcome = self.board.evaluate();
        debug!(%position, %player, %outcome, "Square marked");
        Ok(outcome)
    }

    /// True when the game is vs-AI, still running, and the solver is to move.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsAi
            && self.to_move == self.solver.player()
            && !self.is_over()
    }

    /// True once a line is complete or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Current evaluation of the board.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    /// Legal moves in row-major order; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Starts a fresh board with player one to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.to_move = Player::One;
        info!(mode = %self.mode, "Game reset");
    }

    /// Switches between human-vs-human and human-vs-AI.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn toggle_mode(&mut self) -> GameMode {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "Game mode changed");
        self.mode
    }

    /// Changes the solver's strategy for its next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.solver.set_difficulty(difficulty);
        info!(%difficulty, "Difficulty changed");
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Solver strategy.
    pub fn difficulty(&self) -> Difficulty {
        self.solver.difficulty()
    }

    /// Side the solver plays.
    pub fn ai_player(&self) -> Player {
        self.solver.player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    fn pvp() -> Game {
        Game::seeded(
            GameConfig {
                mode: GameMode::PlayerVsPlayer,
                ..GameConfig::default()
            },
            0,
        )
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = pvp();
        assert_eq!(game.to_move(), Player::One);
        game.play(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.board().get(Position::Center).player(), Some(Player::One));
    }

    #[test]
    fn test_occupied_square_keeps_turn() {
        let mut game = pvp();
        game.play(Position::Center).unwrap();
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = pvp();
        assert_eq!(
            game.play_at(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert!(game.board().is_empty_board());
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = pvp();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            assert_eq!(game.play(pos).unwrap(), Outcome::NoResult);
        }
        assert_eq!(game.play(Position::TopRight).unwrap(), Outcome::PlayerOneWins);
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_ai_turn_only_in_ai_mode() {
        let mut game = pvp();
        game.play(Position::Center).unwrap();
        assert_eq!(game.play_ai_turn(), Err(MoveError::NotAiTurn));

        game.toggle_mode();
        assert!(game.is_ai_turn());
        let mov = game.play_ai_turn().unwrap();
        assert_eq!(mov.player, Player::Two);
    }

    #[test]
    fn test_ai_waits_for_human() {
        let mut game = Game::seeded(GameConfig::default(), 0);
        assert!(!game.is_ai_turn());
        assert_eq!(game.play_ai_turn(), Err(MoveError::NotAiTurn));
    }

    #[test]
    fn test_easy_ai_uses_injected_source() {
        let solver = Solver::new(Difficulty::Easy, Player::Two, ScriptedSource::new([0]));
        let mut game = Game::with_solver(GameMode::PlayerVsAi, solver);
        game.play(Position::TopLeft).unwrap();
        let mov = game.play_ai_turn().unwrap();
        assert_eq!(mov.position, Position::TopCenter);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut game = pvp();
        game.set_difficulty(Difficulty::Easy);
        game.play(Position::Center).unwrap();

        game.reset();

        assert!(game.board().is_empty_board());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.mode(), GameMode::PlayerVsPlayer);
        assert_eq!(game.difficulty(), Difficulty::Easy);
    }
}

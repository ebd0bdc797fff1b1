//! Solver-versus-solver matches.

use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use tictactoe_engine::{Board, Difficulty, MoveError, MoveSource, Outcome, Player, Solver};
use tracing::{debug, info, instrument};

/// Tally of a batch of solver-versus-solver games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Display)]
#[display(
    "{games} games ({player_one} X vs {player_two} O): \
     X won {one_wins}, O won {two_wins}, {draws} drawn"
)]
pub struct SelfPlayReport {
    /// Games played.
    games: u32,
    /// Strategy for player one.
    player_one: Difficulty,
    /// Strategy for player two.
    player_two: Difficulty,
    /// Games won by player one.
    one_wins: u32,
    /// Games won by player two.
    two_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl SelfPlayReport {
    fn new(player_one: Difficulty, player_two: Difficulty) -> Self {
        Self {
            games: 0,
            player_one,
            player_two,
            one_wins: 0,
            two_wins: 0,
            draws: 0,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Player::One) => self.one_wins += 1,
            Some(Player::Two) => self.two_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays `games` games between two solvers and tallies the results.
///
/// With a seed, both sides draw easy-mode picks from RNGs derived from it
/// and the whole batch is reproducible.
///
/// # Errors
///
/// Propagates any [`MoveError`] from the solvers, which indicates a bug.
#[instrument]
pub fn run_selfplay(
    games: u32,
    one: Difficulty,
    two: Difficulty,
    seed: Option<u64>,
) -> Result<SelfPlayReport, MoveError> {
    let (mut first, mut second) = match seed {
        Some(seed) => (
            Solver::seeded(one, Player::One, seed),
            Solver::seeded(two, Player::Two, seed.wrapping_add(1)),
        ),
        None => (
            Solver::from_entropy(one, Player::One),
            Solver::from_entropy(two, Player::Two),
        ),
    };

    let mut report = SelfPlayReport::new(one, two);
    for game in 0..games {
        let outcome = play_game(&mut first, &mut second)?;
        debug!(game, %outcome, "Game finished");
        report.record(outcome);
    }

    info!(%report, "Self-play complete");
    Ok(report)
}

/// Plays a single game from an empty board to its end.
///
/// # Errors
///
/// Propagates any [`MoveError`] from the solvers.
pub fn play_game<A: MoveSource, B: MoveSource>(
    one: &mut Solver<A>,
    two: &mut Solver<B>,
) -> Result<Outcome, MoveError> {
    let mut board = Board::new();
    let mut to_move = Player::One;

    loop {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return Ok(outcome);
        }

        let position = match to_move {
            Player::One => one.choose_move(&board)?,
            Player::Two => two.choose_move(&board)?,
        };
        board.mark(position, to_move)?;
        to_move = to_move.opponent();
    }
}

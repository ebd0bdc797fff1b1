//! Randomness sources for easy-mode move picks.

use std::collections::VecDeque;

/// Picks an index into the list of legal moves.
///
/// Every `rand::Rng` is a source. Tests and replays can substitute a
/// [`ScriptedSource`] to get a fixed sequence.
pub trait MoveSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> MoveSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed sequence of picks.
///
/// Each pick is reduced modulo the number of legal moves. Once the
/// script runs out it keeps picking the first legal move.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that yields `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl MoveSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new([2, 0, 7]);
        assert_eq!(source.pick_index(5), 2);
        assert_eq!(source.pick_index(5), 0);
        assert_eq!(source.pick_index(5), 2);
        // Exhausted: falls back to the first legal move.
        assert_eq!(source.pick_index(5), 0);
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }
}

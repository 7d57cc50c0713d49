//! Capability seams between the engine and its collaborators.
//!
//! Each collaborator is a single-method capability: a decision source that
//! picks actions, a shuffler that permutes the deck, and an optional event
//! sink observing each state mutation. The engine holds them by reference
//! and keeps no state about them across hands.

use holdem_shared::{Action, Card, HandEvent, SeatId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::GameState;

/// Supplies the action for the seat currently to act.
///
/// The returned action's kind must appear in `legal`, and its amount must
/// satisfy the per-kind constraints of the rule engine. The engine itself
/// binds the action to `seat` when recording, so a source cannot act on
/// another seat's behalf. A source is free to block (human input, network);
/// the engine tolerates arbitrary latency here and nowhere else.
pub trait DecisionSource {
    fn decide(&mut self, seat: SeatId, state: &GameState, legal: &[Action]) -> Action;
}

/// Permutes cards in place. Identical seeds must yield identical
/// permutations; that is the whole determinism contract of the engine.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Fire-and-forget observer. `emit` is called after each state mutation of
/// interest with the live state; observers must deep-copy anything they want
/// to keep past the call.
pub trait EventSink {
    fn emit(&mut self, event: &HandEvent, state: &GameState);
}

/// Shuffler backed by the thread-local RNG. Not reproducible across runs.
#[derive(Debug, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut rand::rng());
    }
}

/// Deterministic shuffler seeded from a u64. Two instances with the same
/// seed produce the same sequence of permutations.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        SeededShuffler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

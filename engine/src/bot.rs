//! Stock decision sources for tests, demos and soak runs.
//!
//! These are reference implementations of [`DecisionSource`], not a strategy
//! layer: they only ever pick from the legal set handed to them.

use holdem_shared::{Action, SeatId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;
use crate::sources::DecisionSource;

/// Prefers Check, then Call, then the first listed action (Fold). Never
/// bets, never raises. Useful as the passive baseline in determinism tests.
#[derive(Debug, Default)]
pub struct CallingStation;

impl DecisionSource for CallingStation {
    fn decide(&mut self, _seat: SeatId, _state: &GameState, legal: &[Action]) -> Action {
        legal
            .iter()
            .find(|a| matches!(a, Action::Check))
            .or_else(|| legal.iter().find(|a| matches!(a, Action::Call(_))))
            .or_else(|| {
                legal
                    .iter()
                    .find(|a| matches!(a, Action::AllIn(_)))
            })
            .copied()
            .unwrap_or_else(|| legal[0])
    }
}

/// A seeded probabilistic source. With nothing to pay it mostly checks and
/// occasionally opens; facing a bet it folds more often the larger the bet
/// is relative to its stack, and raises a small fraction of the time.
/// Identical seeds yield identical decisions for identical inputs.
#[derive(Debug)]
pub struct SimpleBot {
    rng: StdRng,
    base_fold_chance: f64,
}

impl SimpleBot {
    pub fn seeded(seed: u64) -> Self {
        SimpleBot {
            rng: StdRng::seed_from_u64(seed),
            base_fold_chance: 0.10,
        }
    }

    fn pick(&mut self, legal: &[Action], want: impl Fn(&Action) -> bool) -> Option<Action> {
        legal.iter().find(|&a| want(a)).copied()
    }
}

impl DecisionSource for SimpleBot {
    fn decide(&mut self, _seat: SeatId, state: &GameState, legal: &[Action]) -> Action {
        let can_check = legal.iter().any(|a| matches!(a, Action::Check));

        if can_check {
            // Mostly check; open the minimum bet now and then.
            if self.rng.random::<f64>() < 0.7 {
                return Action::Check;
            }
            return self
                .pick(legal, |a| matches!(a, Action::Bet(_)))
                .or_else(|| self.pick(legal, |a| matches!(a, Action::AllIn(_))))
                .unwrap_or(Action::Check);
        }

        let owed = legal
            .iter()
            .find_map(|a| match a {
                Action::Call(c) => Some(*c),
                Action::AllIn(c) => Some(*c),
                _ => None,
            })
            .unwrap_or(0);
        let stack = state.seats[state.to_act].stack.max(1);
        let pressure = owed as f64 / stack as f64;
        let fold_chance = (self.base_fold_chance + pressure * 0.5).min(0.9);

        if self.rng.random::<f64>() < fold_chance {
            return Action::Fold;
        }
        if self.rng.random::<f64>() < 0.15 {
            if let Some(raise) = self.pick(legal, |a| matches!(a, Action::Raise(_))) {
                return raise;
            }
        }
        self.pick(legal, |a| matches!(a, Action::Call(_)))
            .or_else(|| self.pick(legal, |a| matches!(a, Action::AllIn(_))))
            .unwrap_or(Action::Fold)
    }
}

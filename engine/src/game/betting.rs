//! The betting-round driver: turn rotation, re-open semantics and the
//! round-completion test.

use holdem_shared::{Action, HandEvent, SeatEventKind, SeatId};

use crate::error::EngineError;
use crate::game::{GameState, HandEngine};
use crate::rules;

impl HandEngine {
    /// Conduct exactly one street of betting.
    ///
    /// Maintains `pending`, the seats that still owe an action, as a vector
    /// in table order so every traversal is reproducible. Each turn polls
    /// the decision source with the legal set, validates the response
    /// (coercing an illegal one to Fold), applies chip movement, and
    /// re-opens action when the bet level rises. The round ends when
    /// `pending` drains or the hand can no longer be contested.
    pub(crate) fn run_betting_round(
        &mut self,
        state: &mut GameState,
        hand_total: u32,
    ) -> Result<(), EngineError> {
        if state.active_count() <= 1 {
            return Ok(());
        }

        let n = state.seats.len();
        let first = state.first_to_act();
        let mut pending: Vec<usize> = table_order(first, n)
            .filter(|&i| state.seats[i].can_act())
            .collect();

        while let Some(&current) = pending.first() {
            if !state.seats[current].can_act() {
                pending.remove(0);
                continue;
            }
            state.to_act = current;

            let legal = rules::legal_actions(state, current);
            if legal.is_empty() {
                pending.remove(0);
                continue;
            }

            // The one suspension point in the engine: the decision source
            // may block as long as it likes.
            let decision = self.decisions.decide(SeatId(current), state, &legal);
            let action = match rules::validate(state, current, &decision) {
                Ok(()) => decision,
                Err(err) => {
                    tracing::warn!(
                        seat = %state.seats[current].name,
                        action = ?decision,
                        %err,
                        "illegal action coerced to fold"
                    );
                    Action::Fold
                }
            };

            let reopen = self.apply_action(state, current, action);

            if state.total_chips() != hand_total {
                return Err(EngineError::StateInvariant(format!(
                    "chips not conserved after action by seat {}: expected {}, found {}",
                    current,
                    hand_total,
                    state.total_chips()
                )));
            }

            if reopen {
                // Everyone else still able to act owes another action,
                // starting with the seat to the actor's left.
                pending = table_order((current + 1) % n, n)
                    .filter(|&i| i != current && state.seats[i].can_act())
                    .collect();
            } else {
                pending.remove(0);
            }

            if state.in_hand_count() <= 1 {
                return Ok(());
            }
        }
        Ok(())
    }

    /// Apply one validated action: chip movement, flag changes and history.
    /// Returns whether the action re-opens the betting.
    fn apply_action(&mut self, state: &mut GameState, seat: usize, action: Action) -> bool {
        let prev_level = state.current_bet;
        let seat_id = SeatId(seat);
        match action {
            Action::Fold => {
                state.seats[seat].folded = true;
                self.record(state, HandEvent::seat(seat_id, SeatEventKind::Fold));
                false
            }
            Action::Check => {
                self.record(state, HandEvent::seat(seat_id, SeatEventKind::Check));
                false
            }
            Action::Call(amount) => {
                let paid = state.seats[seat].place_chips(amount);
                state.pot.add(seat_id, paid);
                self.record(state, HandEvent::seat(seat_id, SeatEventKind::Call(paid)));
                false
            }
            Action::Bet(amount) | Action::Raise(amount) => {
                let paid = state.seats[seat].place_chips(amount);
                state.pot.add(seat_id, paid);
                let level = state.seats[seat].street_bet;
                state.last_raise = level - prev_level;
                state.current_bet = level;
                let event = if matches!(action, Action::Bet(_)) {
                    SeatEventKind::Bet(paid)
                } else {
                    SeatEventKind::Raise {
                        to: level,
                        by: level - prev_level,
                    }
                };
                self.record(state, HandEvent::seat(seat_id, event));
                true
            }
            Action::AllIn(amount) => {
                let paid = state.seats[seat].place_chips(amount);
                state.pot.add(seat_id, paid);
                let level = state.seats[seat].street_bet;
                if level > prev_level {
                    // Only a full raise moves the minimum for the next one;
                    // an under-raise shove raises the level to call but not
                    // the increment.
                    let by = level - prev_level;
                    if by >= state.last_raise {
                        state.last_raise = by;
                    }
                    state.current_bet = level;
                }
                self.record(state, HandEvent::seat(seat_id, SeatEventKind::AllIn { to: level }));
                // A short all-in below the standing level is an incomplete
                // raise that calls short: already-acted seats stay satisfied.
                level >= prev_level
            }
        }
    }
}

/// Seat indices once around the table starting at `start`.
fn table_order(start: usize, n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(move |i| (start + i) % n)
}

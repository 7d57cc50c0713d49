//! Stateless legal-action and raise-sizing calculator.
//!
//! Every function takes a state snapshot and a seat index and derives the
//! answer from the seats alone; nothing here mutates. The betting driver and
//! any front-end building an action menu both go through this module.

use holdem_shared::{Action, SeatId};

use crate::error::EngineError;
use crate::game::GameState;

/// Chips the seat must add to match the current bet, capped at its stack.
pub fn call_amount(state: &GameState, seat: usize) -> u32 {
    let owed = state
        .max_street_bet()
        .saturating_sub(state.seats[seat].street_bet);
    owed.min(state.seats[seat].stack)
}

/// Lowest legal raise target: the current bet level plus the most recent
/// completed raise increment (the big blind when no full raise has been made
/// this street). Not clipped to the seat's stack; `legal_actions` turns a
/// short minimum into an all-in.
pub fn min_raise_total(state: &GameState) -> u32 {
    state.max_street_bet() + state.last_raise
}

/// Highest reachable bet level for the seat: its current commitment plus its
/// whole stack.
pub fn max_raise_total(state: &GameState, seat: usize) -> u32 {
    state.seats[seat].street_bet + state.seats[seat].stack
}

/// The exact set of lawful moves for `seat`, empty when the seat is folded
/// or already all-in.
///
/// Fold is always present. With nothing owed the seat may check, open for at
/// least the big blind, or move all-in. Facing a bet the seat may call,
/// raise by at least the last completed increment, or move all-in; when the
/// stack cannot cover the call or the minimum raise, only the all-in form of
/// that move is offered.
pub fn legal_actions(state: &GameState, seat: usize) -> Vec<Action> {
    let s = &state.seats[seat];
    if !s.can_act() {
        return Vec::new();
    }

    let mut actions = vec![Action::Fold];
    let owed = state.max_street_bet().saturating_sub(s.street_bet);

    if owed == 0 {
        actions.push(Action::Check);
        if s.stack > 0 {
            let min_bet = state.big_blind.min(s.stack);
            if s.stack <= min_bet {
                actions.push(Action::AllIn(s.stack));
            } else {
                actions.push(Action::Bet(min_bet));
                if s.stack > min_bet {
                    actions.push(Action::AllIn(s.stack));
                }
            }
        }
    } else if owed >= s.stack {
        // Calling (or less) already commits everything.
        actions.push(Action::AllIn(s.stack));
    } else {
        actions.push(Action::Call(owed));
        let to_add = min_raise_total(state).saturating_sub(s.street_bet);
        if to_add >= s.stack {
            // The legal minimum is out of reach; raising all-in below it is
            // still allowed.
            actions.push(Action::AllIn(s.stack));
        } else {
            actions.push(Action::Raise(to_add));
            if s.stack > to_add {
                actions.push(Action::AllIn(s.stack));
            }
        }
    }

    actions
}

/// Accept a submitted action iff its kind appears in the legal set and its
/// amount matches: exact equality for Fold/Check/Call/AllIn, the range
/// `[minimum, stack)` for Bet and Raise (committing the whole stack must be
/// submitted as AllIn).
pub fn validate(state: &GameState, seat: usize, action: &Action) -> Result<(), EngineError> {
    let legal = legal_actions(state, seat);
    let stack = state.seats[seat].stack;
    for candidate in &legal {
        if !candidate.same_kind(action) {
            continue;
        }
        let ok = match (candidate, action) {
            (Action::Fold, _) | (Action::Check, _) => true,
            (Action::Call(expected), Action::Call(got)) => got == expected,
            (Action::AllIn(expected), Action::AllIn(got)) => got == expected,
            (Action::Bet(min), Action::Bet(got)) | (Action::Raise(min), Action::Raise(got)) => {
                got >= min && *got < stack
            }
            _ => false,
        };
        if ok {
            return Ok(());
        }
    }
    Err(EngineError::IllegalAction {
        seat: SeatId(seat),
        action: *action,
    })
}

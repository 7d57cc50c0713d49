//! Betting-round driver behavior: re-opening, short all-ins, the big-blind
//! option and illegal-action handling.

mod common;

use anyhow::Result;
use common::{table, ScriptedSource};
use holdem_shared::{Action, HandEvent, SeatEventKind, Street, TableEventKind};
use holdem_engine::game::HandEngine;
use holdem_engine::sources::SeededShuffler;

/// Seat events recorded before the flop marker, in order.
fn preflop_seat_events(history: &[HandEvent]) -> Vec<(usize, SeatEventKind)> {
    history
        .iter()
        .take_while(|e| {
            !matches!(
                e,
                HandEvent::Table(TableEventKind::StreetStarted(Street::Flop))
            )
        })
        .filter_map(|e| match e {
            HandEvent::Seat { seat, kind } => Some((seat.0, kind.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn a_raise_reopens_action_for_earlier_callers() -> Result<()> {
    // Three-handed: the under-the-gun seat calls, the small blind completes,
    // and the big blind uses its option to push the level up. Both earlier
    // actors owe again and call the increase.
    let mut state = table(&[1000, 1000, 1000]);
    let source = ScriptedSource::new(vec![
        Action::Call(10), // seat 0 (utg)
        Action::Call(5),  // seat 1 (sb)
        Action::Bet(10),  // seat 2 (bb option, level to 20)
        Action::Call(10), // seat 0 again
        Action::Call(10), // seat 1 again
    ]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(5)));
    engine.play_hand(&mut state)?;

    let preflop = preflop_seat_events(&state.history);
    let calls_by_seat_0 = preflop
        .iter()
        .filter(|(s, k)| *s == 0 && matches!(k, SeatEventKind::Call(_)))
        .count();
    assert_eq!(calls_by_seat_0, 2, "seat 0 must act again after the re-open");
    assert_eq!(state.pot.total(), 60);
    Ok(())
}

#[test]
fn short_all_in_below_the_level_does_not_reopen() -> Result<()> {
    // Seat 0 raises to 30, seat 1 calls, and the 25-chip big blind shoves
    // for 25 total, below the standing level. That incomplete raise must not
    // hand seats 0 and 1 another turn this street.
    let mut state = table(&[1000, 1000, 25]);
    let source = ScriptedSource::new(vec![
        Action::Raise(30), // seat 0 to 30
        Action::Call(25),  // seat 1
        Action::AllIn(15), // seat 2: 10 posted + 15 = 25 total, short
    ]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(8)));
    engine.play_hand(&mut state)?;

    let preflop = preflop_seat_events(&state.history);
    let seat_0_actions: Vec<_> = preflop
        .iter()
        .filter(|(s, k)| *s == 0 && !matches!(k, SeatEventKind::PostBlind { .. }))
        .collect();
    assert_eq!(
        seat_0_actions.len(),
        1,
        "seat 0 acted once preflop; a short shove re-opened the action"
    );
    assert!(preflop
        .iter()
        .any(|(s, k)| *s == 2 && matches!(k, SeatEventKind::AllIn { to: 25 })));
    Ok(())
}

#[test]
fn full_all_in_raise_reopens_action() -> Result<()> {
    // Seat 2's shove to 40 is a complete raise over the 10 big blind, so
    // the earlier caller owes another action.
    let mut state = table(&[1000, 1000, 40]);
    let source = ScriptedSource::new(vec![
        Action::Call(10), // seat 0
        Action::Call(5),  // seat 1
        Action::AllIn(30), // seat 2: 10 posted + 30 = 40 total
        Action::Call(30), // seat 0 again
        Action::Call(30), // seat 1 again
    ]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(8)));
    engine.play_hand(&mut state)?;

    let preflop = preflop_seat_events(&state.history);
    let calls_by_seat_0 = preflop
        .iter()
        .filter(|(s, k)| *s == 0 && matches!(k, SeatEventKind::Call(_)))
        .count();
    assert_eq!(calls_by_seat_0, 2);
    assert_eq!(state.pot.total(), 120);
    Ok(())
}

#[test]
fn illegal_action_is_coerced_to_fold() -> Result<()> {
    // The small blind tries to raise below the minimum; the driver refuses
    // and folds the seat instead of applying the bogus amount.
    let mut state = table(&[1000, 1000]);
    let source = ScriptedSource::new(vec![Action::Raise(7)]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(2)));
    engine.play_hand(&mut state)?;

    assert!(state
        .history
        .iter()
        .any(|e| matches!(e, HandEvent::Seat { seat, kind: SeatEventKind::Fold } if seat.0 == 0)));
    assert_eq!(state.seats[0].stack, 995);
    assert_eq!(state.seats[1].stack, 1005);
    Ok(())
}

#[test]
fn big_blind_gets_the_option_after_flat_calls() -> Result<()> {
    // Everyone limps; the big blind still gets a turn and may check it down.
    let mut state = table(&[500, 500, 500]);
    let source = ScriptedSource::new(vec![
        Action::Call(10),
        Action::Call(5),
        Action::Check, // big blind option
    ]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(4)));
    engine.play_hand(&mut state)?;

    let preflop = preflop_seat_events(&state.history);
    assert!(preflop
        .iter()
        .any(|(s, k)| *s == 2 && matches!(k, SeatEventKind::Check)));
    assert_eq!(state.pot.total(), 30);
    Ok(())
}

#[test]
fn walkaway_skips_the_board_and_the_evaluator() -> Result<()> {
    let mut state = table(&[1000, 1000, 1000]);
    let source = ScriptedSource::new(vec![Action::Fold, Action::Fold]);
    let mut engine = HandEngine::new(Box::new(source), Box::new(SeededShuffler::new(6)));
    engine.play_hand(&mut state)?;

    // Seats 0 and 1 folded; the big blind wins the blinds without a board.
    assert!(state.community.is_empty());
    assert_eq!(state.seats[2].stack, 1005);
    assert!(state
        .history
        .iter()
        .any(|e| matches!(e, HandEvent::Table(TableEventKind::Walkaway { seat }) if seat.0 == 2)));
    Ok(())
}

//! Showdown resolution and pot awarding.

use std::collections::HashSet;

use holdem_shared::{HandEvent, HandRank, HandResult, SeatId, Street, TableEventKind};

use crate::error::EngineError;
use crate::game::{GameState, HandEngine};
use crate::poker::evaluation::{evaluate_best_hand, pick_best_five};

impl HandEngine {
    /// Deal out any board cards an early all-in skipped, then settle.
    pub(crate) fn showdown(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        if state.in_hand_count() > 1 {
            while state.community.len() < 5 {
                self.deal_board(state, 1)?;
            }
        }
        self.record(
            state,
            HandEvent::table(TableEventKind::StreetStarted(Street::Showdown)),
        );
        self.settle(state)
    }

    /// Distribute the ledger. A lone surviving seat takes everything without
    /// evaluation; otherwise each slice goes to the best eligible hand(s),
    /// split equally with remainder chips awarded one at a time starting
    /// left of the dealer.
    fn settle(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        let pot_total = state.pot.total();

        if state.in_hand_count() == 1 {
            let winner = state
                .seats
                .iter()
                .position(|s| s.in_hand())
                .ok_or_else(|| EngineError::StateInvariant("no seat left in hand".into()))?;
            state.seats[winner].award_chips(pot_total);
            tracing::info!(seat = %state.seats[winner].name, amount = pot_total, "hand won uncontested");
            self.record(
                state,
                HandEvent::table(TableEventKind::Walkaway {
                    seat: SeatId(winner),
                }),
            );
            self.record(
                state,
                HandEvent::table(TableEventKind::PotAwarded {
                    winners: vec![SeatId(winner)],
                    amount: pot_total,
                }),
            );
            return Ok(());
        }

        // Evaluate every surviving hand once and report the lot.
        let mut results: Vec<HandResult> = Vec::new();
        for (idx, seat) in state.seats.iter().enumerate() {
            if !seat.in_hand() {
                continue;
            }
            let hole = [seat.hole[0], seat.hole[1]];
            let rank = evaluate_best_hand(hole, &state.community)?;
            let best_five = pick_best_five(hole, &state.community)?;
            results.push(HandResult {
                seat: SeatId(idx),
                rank,
                best_five,
            });
        }
        self.record(
            state,
            HandEvent::table(TableEventKind::ShowdownResults(results.clone())),
        );

        let folded: HashSet<SeatId> = state
            .seats
            .iter()
            .filter(|s| s.folded)
            .map(|s| s.id)
            .collect();
        let rank_of = |seat: SeatId| -> Option<&HandRank> {
            results.iter().find(|r| r.seat == seat).map(|r| &r.rank)
        };

        for slice in state.pot.side_pots(&folded) {
            let best = slice
                .eligible
                .iter()
                .filter_map(|&s| rank_of(s))
                .max()
                .cloned()
                .ok_or_else(|| {
                    EngineError::StateInvariant("pot slice with no evaluated hand".into())
                })?;
            let mut winners: Vec<SeatId> = slice
                .eligible
                .iter()
                .copied()
                .filter(|&s| rank_of(s) == Some(&best))
                .collect();
            // Deterministic remainder handling: order winners by distance
            // from the dealer's left.
            let n = state.seats.len();
            let dealer = state.dealer;
            winners.sort_by_key(|s| (s.0 + n - dealer - 1) % n);

            let share = slice.amount / winners.len() as u32;
            let remainder = slice.amount % winners.len() as u32;
            for (i, &winner) in winners.iter().enumerate() {
                let award = share + if (i as u32) < remainder { 1 } else { 0 };
                state.seats[winner.0].award_chips(award);
            }
            tracing::info!(
                amount = slice.amount,
                winners = ?winners.iter().map(|w| state.seats[w.0].name.clone()).collect::<Vec<_>>(),
                "pot awarded"
            );
            self.record(
                state,
                HandEvent::table(TableEventKind::PotAwarded {
                    winners,
                    amount: slice.amount,
                }),
            );
        }
        Ok(())
    }
}

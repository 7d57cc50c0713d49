//! Blind posting and card distribution.

use holdem_shared::{BlindKind, HandEvent, SeatEventKind, SeatId, TableEventKind};

use crate::error::EngineError;
use crate::game::{GameState, HandEngine};

impl HandEngine {
    /// Post small blind then big blind. A blind is a forced bet clipped to
    /// the stack; a short blind is recorded at its partial amount and leaves
    /// the seat all-in. Preflop betting state is seeded from the actual
    /// posted amounts.
    pub(crate) fn post_blinds(&mut self, state: &mut GameState) {
        let sb = state.small_blind_position();
        let bb = state.big_blind_position();

        for (idx, kind, amount) in [
            (sb, BlindKind::Small, state.small_blind),
            (bb, BlindKind::Big, state.big_blind),
        ] {
            let paid = state.seats[idx].place_chips(amount);
            state.pot.add(SeatId(idx), paid);
            tracing::info!(
                seat = %state.seats[idx].name,
                kind = ?kind,
                amount = paid,
                stack = state.seats[idx].stack,
                "posted blind"
            );
            self.record(
                state,
                HandEvent::seat(SeatId(idx), SeatEventKind::PostBlind { kind, amount: paid }),
            );
        }

        state.current_bet = state.max_street_bet();
        state.last_raise = state.big_blind;
        state.to_act = state.first_to_act();
    }

    /// Deal two hole cards per seat in two passes starting left of the
    /// dealer.
    pub(crate) fn deal_hole_cards(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        let n = state.seats.len();
        for _pass in 0..2 {
            for i in 0..n {
                let idx = (state.dealer + 1 + i) % n;
                let card = self
                    .deck
                    .deal()
                    .ok_or_else(|| EngineError::StateInvariant("deck underflow dealing hole cards".into()))?;
                state.seats[idx].deal_card(card)?;
            }
        }
        for idx in 0..n {
            tracing::debug!(
                seat = %state.seats[idx].name,
                cards = %format!("{} {}", state.seats[idx].hole[0], state.seats[idx].hole[1]),
                "dealt hole cards"
            );
            self.record(
                state,
                HandEvent::table(TableEventKind::HoleDealt { seat: SeatId(idx) }),
            );
        }
        Ok(())
    }

    /// Burn one card, then deal `count` cards to the board.
    pub(crate) fn deal_board(&mut self, state: &mut GameState, count: usize) -> Result<(), EngineError> {
        self.deck
            .deal()
            .ok_or_else(|| EngineError::StateInvariant("deck underflow burning".into()))?;
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self
                .deck
                .deal()
                .ok_or_else(|| EngineError::StateInvariant("deck underflow dealing board".into()))?;
            state.community.push(card);
            dealt.push(card);
        }
        tracing::info!(
            street = state.street.to_str(),
            board = %state
                .community
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            "dealt board"
        );
        self.record(
            state,
            HandEvent::table(TableEventKind::BoardDealt {
                street: state.street,
                cards: dealt,
            }),
        );
        Ok(())
    }
}

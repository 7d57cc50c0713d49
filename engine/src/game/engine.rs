//! The hand engine: lifecycle controller for one complete hand.

use holdem_shared::{HandEvent, Street, TableEventKind};

use crate::deck::Deck;
use crate::error::EngineError;
use crate::game::GameState;
use crate::sources::{DecisionSource, EventSink, Shuffler};

/// Drives one hand at a time: shuffle, blinds, hole cards, four streets of
/// betting, showdown, settlement. Holds the three injected capabilities and
/// the deck; all table state lives in the [`GameState`] passed to
/// [`HandEngine::play_hand`].
pub struct HandEngine {
    pub(crate) decisions: Box<dyn DecisionSource>,
    pub(crate) shuffler: Box<dyn Shuffler>,
    pub(crate) sink: Option<Box<dyn EventSink>>,
    pub(crate) deck: Deck,
}

impl HandEngine {
    pub fn new(decisions: Box<dyn DecisionSource>, shuffler: Box<dyn Shuffler>) -> Self {
        HandEngine {
            decisions,
            shuffler,
            sink: None,
            deck: Deck::new(),
        }
    }

    /// Attach an observer for hand events. Replaces any previous sink.
    pub fn set_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Append to history, then notify the sink with the state as mutated.
    /// History always precedes emission.
    pub(crate) fn record(&mut self, state: &mut GameState, event: HandEvent) {
        state.record(event.clone());
        if let Some(sink) = &mut self.sink {
            sink.emit(&event, state);
        }
    }

    /// Play one complete hand, mutating `state` in place.
    ///
    /// Rotating the dealer between hands is the caller's responsibility. On
    /// error the state may be partially mutated; callers replaying must
    /// reset it.
    pub fn play_hand(&mut self, state: &mut GameState) -> Result<(), EngineError> {
        state.reset_for_new_hand();
        self.deck.reset();
        self.deck.shuffle(self.shuffler.as_mut());

        let hand_total: u32 = state.seats.iter().map(|s| s.stack).sum();
        self.record(state, HandEvent::table(TableEventKind::HandStart));

        self.post_blinds(state);
        self.deal_hole_cards(state)?;

        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            state.street = street;
            match street {
                Street::Preflop => {}
                Street::Flop => self.deal_board(state, 3)?,
                Street::Turn | Street::River => self.deal_board(state, 1)?,
                Street::Showdown => unreachable!(),
            }
            self.record(state, HandEvent::table(TableEventKind::StreetStarted(street)));

            if street != Street::Preflop {
                for seat in &mut state.seats {
                    seat.street_bet = 0;
                }
                state.current_bet = 0;
                state.last_raise = state.big_blind;
            }

            self.run_betting_round(state, hand_total)?;

            if hand_over(state) {
                break;
            }
        }

        state.street = Street::Showdown;
        self.showdown(state)?;

        let settled: u32 = state.seats.iter().map(|s| s.stack).sum();
        if settled != hand_total {
            return Err(EngineError::StateInvariant(format!(
                "chips not conserved across hand: started with {}, settled {}",
                hand_total, settled
            )));
        }
        Ok(())
    }
}

/// The streets stop early when the pot can no longer be contested (one seat
/// left) or nobody can act at all (every contestant is all-in; the board
/// still gets dealt out at showdown).
fn hand_over(state: &GameState) -> bool {
    state.in_hand_count() <= 1 || state.active_count() == 0
}

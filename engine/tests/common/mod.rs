//! Shared helpers for integration tests: rigged decks, scripted decision
//! sources and a recording event sink.
#![allow(dead_code)] // each test binary uses its own subset

use std::collections::VecDeque;

use holdem_shared::{Action, Card, CardRank, CardSuit, HandEvent, SeatConfig, SeatId};

use holdem_engine::game::GameState;
use holdem_engine::sources::{DecisionSource, EventSink, Shuffler};

/// Build a card from a rank value (2..=14) and a suit.
pub fn card(rank: u8, suit: CardSuit) -> Card {
    Card::new(CardRank::from_u8(rank).unwrap(), suit)
}

/// A shuffler that arranges the deck so the given cards are dealt first, in
/// order, with every unnamed card following in canonical order.
pub struct RiggedShuffler {
    order: Vec<Card>,
}

impl RiggedShuffler {
    pub fn new(order: Vec<Card>) -> Self {
        RiggedShuffler { order }
    }
}

impl Shuffler for RiggedShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        let mut arranged = self.order.clone();
        for raw in 0..52u8 {
            let c = Card::from_index(raw).unwrap();
            if !self.order.contains(&c) {
                arranged.push(c);
            }
        }
        assert_eq!(arranged.len(), cards.len(), "rigged deck must stay 52 cards");
        cards.copy_from_slice(&arranged);
    }
}

/// Plays back a fixed script of actions, then falls back to check/call.
/// Records the legal set offered at every turn.
pub struct ScriptedSource {
    script: VecDeque<Action>,
    pub seen_legal: Vec<Vec<Action>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Action>) -> Self {
        ScriptedSource {
            script: script.into(),
            seen_legal: Vec::new(),
        }
    }
}

impl DecisionSource for ScriptedSource {
    fn decide(&mut self, _seat: SeatId, _state: &GameState, legal: &[Action]) -> Action {
        self.seen_legal.push(legal.to_vec());
        if let Some(action) = self.script.pop_front() {
            return action;
        }
        legal
            .iter()
            .find(|a| matches!(a, Action::Check))
            .or_else(|| legal.iter().find(|a| matches!(a, Action::Call(_))))
            .copied()
            .unwrap_or(legal[0])
    }
}

/// Collects every emitted event.
#[derive(Default)]
pub struct RecordingSink {
    pub events: std::rc::Rc<std::cell::RefCell<Vec<HandEvent>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Vec<HandEvent>>>) {
        let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (
            RecordingSink {
                events: events.clone(),
            },
            events,
        )
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &HandEvent, _state: &GameState) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// A table with the given stacks, blinds 5/10, dealer at seat 0.
pub fn table(stacks: &[u32]) -> GameState {
    let seats = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| SeatConfig::new(format!("Seat {}", i), s))
        .collect();
    GameState::new(seats, 5, 10, 0).expect("valid table")
}

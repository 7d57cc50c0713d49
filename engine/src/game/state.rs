//! Seat records and the game-state aggregate.

use holdem_shared::{Card, HandEvent, SeatConfig, SeatId, Street};

use crate::error::EngineError;
use crate::game::pot::Pot;

/// One seated player. Owned by [`GameState`]; all mutation goes through the
/// owner or the hand engine.
#[derive(Clone, Debug)]
pub struct Seat {
    pub id: SeatId,
    pub name: String,
    pub stack: u32,
    pub hole: Vec<Card>,
    pub folded: bool,
    pub all_in: bool,
    /// Chips committed on the current street.
    pub street_bet: u32,
}

impl Seat {
    pub fn new(id: SeatId, name: impl Into<String>, stack: u32) -> Self {
        Seat {
            id,
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            folded: false,
            all_in: false,
            street_bet: 0,
        }
    }

    /// Still contesting the pot.
    pub fn in_hand(&self) -> bool {
        !self.folded
    }

    /// Can still voluntarily act this hand.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub(crate) fn deal_card(&mut self, card: Card) -> Result<(), EngineError> {
        if self.hole.len() >= 2 {
            return Err(EngineError::StateInvariant(format!(
                "seat {} dealt a third hole card",
                self.id
            )));
        }
        self.hole.push(card);
        Ok(())
    }

    /// Move up to `amount` chips from the stack to the table, clipping at the
    /// stack and marking all-in when the stack empties. Returns the amount
    /// actually moved.
    pub(crate) fn place_chips(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.stack);
        self.stack -= actual;
        self.street_bet += actual;
        if self.stack == 0 {
            self.all_in = true;
        }
        actual
    }

    pub(crate) fn award_chips(&mut self, amount: u32) {
        self.stack += amount;
    }

    pub(crate) fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.folded = false;
        self.all_in = false;
        self.street_bet = 0;
    }
}

/// Snapshot aggregate for one table: seats, board, ledger, street and
/// history. The state is the sole owner of the pot and the seats.
#[derive(Clone, Debug)]
pub struct GameState {
    pub seats: Vec<Seat>,
    pub community: Vec<Card>,
    pub pot: Pot,
    pub street: Street,
    pub dealer: usize,
    pub to_act: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Highest per-seat commitment on the current street.
    pub current_bet: u32,
    /// Increment of the most recent completed raise this street; lower bound
    /// on the next raise. Defaults to the big blind each street.
    pub last_raise: u32,
    /// Append-only record of everything that happened this hand.
    pub history: Vec<HandEvent>,
}

impl GameState {
    /// Seat a table. Requires at least two seats and a positive big blind.
    pub fn new(
        seats: Vec<SeatConfig>,
        small_blind: u32,
        big_blind: u32,
        dealer: usize,
    ) -> Result<Self, EngineError> {
        if seats.len() < 2 {
            return Err(EngineError::InvalidConstruction(format!(
                "a table needs at least 2 seats, got {}",
                seats.len()
            )));
        }
        if big_blind == 0 {
            return Err(EngineError::InvalidConstruction(
                "big blind must be positive".into(),
            ));
        }
        if dealer >= seats.len() {
            return Err(EngineError::InvalidConstruction(format!(
                "dealer position {} out of range for {} seats",
                dealer,
                seats.len()
            )));
        }
        let seats = seats
            .into_iter()
            .enumerate()
            .map(|(i, cfg)| Seat::new(SeatId(i), cfg.name, cfg.stack))
            .collect();
        Ok(GameState {
            seats,
            community: Vec::with_capacity(5),
            pot: Pot::new(),
            street: Street::Preflop,
            dealer,
            to_act: 0,
            small_blind,
            big_blind,
            current_bet: 0,
            last_raise: big_blind,
            history: Vec::new(),
        })
    }

    /// Heads-up the dealer posts the small blind; otherwise it is the seat
    /// to the dealer's left.
    pub fn small_blind_position(&self) -> usize {
        if self.seats.len() == 2 {
            self.dealer
        } else {
            (self.dealer + 1) % self.seats.len()
        }
    }

    pub fn big_blind_position(&self) -> usize {
        if self.seats.len() == 2 {
            (self.dealer + 1) % self.seats.len()
        } else {
            (self.dealer + 2) % self.seats.len()
        }
    }

    /// First seat to act on the current street, skipping folded and all-in
    /// seats. Preflop action starts left of the big blind (which in heads-up
    /// play is the dealer); postflop it starts left of the dealer.
    pub fn first_to_act(&self) -> usize {
        let n = self.seats.len();
        let start = match self.street {
            Street::Preflop => (self.big_blind_position() + 1) % n,
            _ => (self.dealer + 1) % n,
        };
        for i in 0..n {
            let idx = (start + i) % n;
            if self.seats[idx].can_act() {
                return idx;
            }
        }
        start
    }

    /// Seats that can still voluntarily act.
    pub fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }

    /// Seats still contesting the pot.
    pub fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.in_hand()).count()
    }

    /// Highest current-street commitment across seats. The rule engine
    /// recomputes this rather than trusting `current_bet`.
    pub fn max_street_bet(&self) -> u32 {
        self.seats.iter().map(|s| s.street_bet).max().unwrap_or(0)
    }

    /// Stacks plus the ledger; constant for the duration of a hand.
    pub fn total_chips(&self) -> u32 {
        self.seats.iter().map(|s| s.stack).sum::<u32>() + self.pot.total()
    }

    /// Clear per-hand state. Names, ids, stacks, blinds and the dealer
    /// position survive; everything else resets.
    pub(crate) fn reset_for_new_hand(&mut self) {
        self.community.clear();
        self.history.clear();
        self.pot.reset();
        self.street = Street::Preflop;
        self.current_bet = 0;
        self.last_raise = self.big_blind;
        for seat in &mut self.seats {
            seat.reset_for_new_hand();
        }
    }

    pub(crate) fn record(&mut self, event: HandEvent) {
        self.history.push(event);
    }
}

//! Streets, actions and the typed event vocabulary.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandResult;
use crate::player::SeatId;

/// The current street of a hand. Linear progression only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn to_str(&self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }
}

/// An action a decision source can take.
///
/// Amount semantics: the payload is always the chips the seat adds with this
/// action, never a target bet level.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    /// Give up the hand. Legal even when facing no bet.
    Fold,
    /// Pass without committing chips. Only legal when nothing is owed.
    Check,
    /// Match the outstanding bet; the amount is exactly what is owed.
    Call(u32),
    /// Open the betting; the amount is the chips added, at least the
    /// big blind and strictly less than the stack.
    Bet(u32),
    /// Increase the bet level; the amount is the chips added, at least the
    /// minimum raise and strictly less than the stack.
    Raise(u32),
    /// Commit the entire remaining stack; the amount is exactly the stack.
    AllIn(u32),
}

impl Action {
    /// The chips this action adds to the table.
    pub fn amount(&self) -> u32 {
        match self {
            Action::Fold | Action::Check => 0,
            Action::Call(a) | Action::Bet(a) | Action::Raise(a) | Action::AllIn(a) => *a,
        }
    }

    /// True when the two actions are the same variant, ignoring amounts.
    pub fn same_kind(&self, other: &Action) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Types of blinds that can be posted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
}

/// Seat-side event kinds recorded in history (richer than `Action`: bets and
/// raises keep their resulting level for replay).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeatEventKind {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise { to: u32, by: u32 },
    AllIn { to: u32 },
    PostBlind { kind: BlindKind, amount: u32 },
}

/// Table-side events: dealer milestones and settlement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TableEventKind {
    HandStart,
    HoleDealt { seat: SeatId },
    StreetStarted(Street),
    BoardDealt { street: Street, cards: Vec<Card> },
    ShowdownResults(Vec<HandResult>),
    PotAwarded { winners: Vec<SeatId>, amount: u32 },
    Walkaway { seat: SeatId },
}

/// A single recorded event in a hand. This is the canonical, typed
/// source-of-truth for history, the event sink and any renderer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum HandEvent {
    Seat { seat: SeatId, kind: SeatEventKind },
    Table(TableEventKind),
}

impl HandEvent {
    /// Helper to create a seat event.
    pub fn seat(seat: SeatId, kind: SeatEventKind) -> Self {
        HandEvent::Seat { seat, kind }
    }

    /// Helper to create a table event.
    pub fn table(kind: TableEventKind) -> Self {
        HandEvent::Table(kind)
    }
}

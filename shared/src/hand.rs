//! Hand ranking types produced by the evaluator.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::SeatId;

/// Categories of poker hands, ordered from weakest to strongest.
///
/// A royal flush is a straight flush whose high card is the ace; it is kept
/// as a category of its own, and since every royal flush carries the same
/// kicker tuple, any two of them compare equal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRankCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
    RoyalFlush,
}

impl HandRankCategory {
    pub fn to_str(&self) -> &'static str {
        match self {
            HandRankCategory::HighCard => "High Card",
            HandRankCategory::Pair => "Pair",
            HandRankCategory::TwoPair => "Two Pair",
            HandRankCategory::ThreeKind => "Three of a Kind",
            HandRankCategory::Straight => "Straight",
            HandRankCategory::Flush => "Flush",
            HandRankCategory::FullHouse => "Full House",
            HandRankCategory::FourKind => "Four of a Kind",
            HandRankCategory::StraightFlush => "Straight Flush",
            HandRankCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// Complete hand ranking: category plus a five-wide kicker tuple.
///
/// The kickers are laid out per category (e.g. four of a kind is
/// `[quad, side, 0, 0, 0]`, two pair is `[high pair, low pair, side, 0, 0]`)
/// so the derived lexicographic order breaks ties correctly. The derived
/// `Ord` compares category first, then kickers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank {
    pub category: HandRankCategory,
    pub kickers: [u8; 5],
}

impl HandRank {
    pub fn new(category: HandRankCategory, kickers: [u8; 5]) -> Self {
        HandRank { category, kickers }
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category.to_str())
    }
}

/// Result of hand evaluation for one seat at showdown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandResult {
    pub seat: SeatId,
    pub rank: HandRank,
    pub best_five: [Card; 5],
}

//! Card types for the holdem engine.

use serde::{Deserialize, Serialize};

/// Card rank values. Aces are always high (14); the evaluator handles the
/// one place an ace plays low (the wheel straight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardRank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl CardRank {
    /// Every rank, ascending.
    pub const ALL: [CardRank; 13] = [
        CardRank::Two,
        CardRank::Three,
        CardRank::Four,
        CardRank::Five,
        CardRank::Six,
        CardRank::Seven,
        CardRank::Eight,
        CardRank::Nine,
        CardRank::Ten,
        CardRank::Jack,
        CardRank::Queen,
        CardRank::King,
        CardRank::Ace,
    ];

    /// Convert from u8 to CardRank. `None` outside 2..=14.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            2 => Some(CardRank::Two),
            3 => Some(CardRank::Three),
            4 => Some(CardRank::Four),
            5 => Some(CardRank::Five),
            6 => Some(CardRank::Six),
            7 => Some(CardRank::Seven),
            8 => Some(CardRank::Eight),
            9 => Some(CardRank::Nine),
            10 => Some(CardRank::Ten),
            11 => Some(CardRank::Jack),
            12 => Some(CardRank::Queen),
            13 => Some(CardRank::King),
            14 => Some(CardRank::Ace),
            _ => None,
        }
    }

    /// Numeric value used by the evaluator (2..=14, Ace high).
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Card suit values (0=Clubs, 1=Diamonds, 2=Hearts, 3=Spades)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSuit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl CardSuit {
    /// Every suit, in encoding order.
    pub const ALL: [CardSuit; 4] = [
        CardSuit::Clubs,
        CardSuit::Diamonds,
        CardSuit::Hearts,
        CardSuit::Spades,
    ];

    /// Convert from u8 to CardSuit. `None` above 3.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CardSuit::Clubs),
            1 => Some(CardSuit::Diamonds),
            2 => Some(CardSuit::Hearts),
            3 => Some(CardSuit::Spades),
            _ => None,
        }
    }
}

/// A playing card represented as a compact index in 0..52.
///
/// The index is private: every constructor (including deserialization)
/// validates it, so `rank()` and `suit()` always decode. Equality compares
/// both rank and suit. Cards are not `Ord`: the engine orders cards by rank
/// only, and does so explicitly where it matters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a new card from rank and suit.
    pub fn new(rank: CardRank, suit: CardSuit) -> Self {
        Card((suit as u8) * 13 + (rank as u8 - 2))
    }

    /// Create a card from its compact index. `None` at 52 and above.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 52).then_some(Card(index))
    }

    /// The compact index in 0..52.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Get the rank of this card.
    pub fn rank(self) -> CardRank {
        CardRank::from_u8(self.0 % 13 + 2).expect("card index stays below 52")
    }

    /// Get the suit of this card.
    pub fn suit(self) -> CardSuit {
        CardSuit::from_u8(self.0 / 13).expect("card index stays below 52")
    }

    /// Get the rank as a string (2, 3, ..., T, J, Q, K, A).
    pub fn rank_str(self) -> &'static str {
        match self.rank() {
            CardRank::Two => "2",
            CardRank::Three => "3",
            CardRank::Four => "4",
            CardRank::Five => "5",
            CardRank::Six => "6",
            CardRank::Seven => "7",
            CardRank::Eight => "8",
            CardRank::Nine => "9",
            CardRank::Ten => "T",
            CardRank::Jack => "J",
            CardRank::Queen => "Q",
            CardRank::King => "K",
            CardRank::Ace => "A",
        }
    }

    /// Get the suit as a character (♣, ♦, ♥, ♠).
    pub fn suit_char(self) -> char {
        match self.suit() {
            CardSuit::Clubs => '♣',
            CardSuit::Diamonds => '♦',
            CardSuit::Hearts => '♥',
            CardSuit::Spades => '♠',
        }
    }

    /// Check if this is a red suit (hearts or diamonds).
    pub fn is_red(self) -> bool {
        matches!(self.suit(), CardSuit::Hearts | CardSuit::Diamonds)
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::from_index(value).ok_or_else(|| format!("card index out of range: {}", value))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_str(), self.suit_char())
    }
}

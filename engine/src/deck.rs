//! The 52-card deck with a monotonically advancing deal cursor.

use holdem_shared::{Card, CardRank, CardSuit};

use crate::sources::Shuffler;

/// An ordered deck plus a cursor. Every card appears exactly once; the
/// number of dealt cards always equals the cursor position.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// A fresh deck in canonical order with the cursor at the top.
    pub fn new() -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            next: 0,
        };
        deck.reset();
        deck
    }

    /// Restore canonical order and rewind the cursor.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in CardSuit::ALL {
            for rank in CardRank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.next = 0;
    }

    /// Permute the remaining full deck and rewind the cursor.
    pub fn shuffle(&mut self, shuffler: &mut dyn Shuffler) {
        self.next = 0;
        shuffler.shuffle(&mut self.cards);
    }

    /// Deal the next card, or `None` once all 52 are out.
    pub fn deal(&mut self) -> Option<Card> {
        if self.next >= self.cards.len() {
            return None;
        }
        let card = self.cards[self.next];
        self.next += 1;
        Some(card)
    }

    /// Cards not yet dealt.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SeededShuffler;
    use std::collections::HashSet;

    #[test]
    fn deals_52_distinct_cards_then_fails() {
        let mut deck = Deck::new();
        let mut seen = HashSet::new();
        for _ in 0..52 {
            let card = deck.deal().expect("deck should hold 52 cards");
            assert!(seen.insert(card), "card dealt twice: {}", card);
        }
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal().is_none());
    }

    #[test]
    fn reset_restores_the_full_deck() {
        let mut deck = Deck::new();
        for _ in 0..10 {
            deck.deal();
        }
        deck.reset();
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn shuffle_rewinds_and_keeps_all_cards() {
        let mut deck = Deck::new();
        for _ in 0..20 {
            deck.deal();
        }
        let mut shuffler = SeededShuffler::new(7);
        deck.shuffle(&mut shuffler);
        assert_eq!(deck.remaining(), 52);
        let mut seen = HashSet::new();
        while let Some(card) = deck.deal() {
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);
    }
}

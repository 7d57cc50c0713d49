//! Best-5-of-7 hand evaluation.
//!
//! Five cards classify directly; six or seven enumerate every 5-card subset
//! and keep the maximum under [`HandRank`] ordering. Kicker tuples are laid
//! out per category so the derived lexicographic order is the correct
//! tiebreak.

use std::cmp::Ordering;
use std::collections::HashSet;

use holdem_shared::{Card, HandRank, HandRankCategory};

use crate::error::EngineError;

/// Evaluate 5 to 7 distinct cards and return the best 5-card ranking.
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() < 5 || cards.len() > 7 {
        return Err(EngineError::InvalidInput(format!(
            "hand evaluation requires 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let distinct: HashSet<Card> = cards.iter().copied().collect();
    if distinct.len() != cards.len() {
        return Err(EngineError::InvalidInput(
            "hand evaluation requires distinct cards".into(),
        ));
    }

    if cards.len() == 5 {
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        return Ok(evaluate_five(&five));
    }

    let mut best: Option<HandRank> = None;
    for_each_five(cards, |five| {
        let rank = evaluate_five(five);
        if best.as_ref().is_none_or(|b| rank > *b) {
            best = Some(rank);
        }
    });
    Ok(best.expect("at least one 5-card subset"))
}

/// Evaluate a seat's best hand from its hole cards plus the board.
pub fn evaluate_best_hand(hole: [Card; 2], community: &[Card]) -> Result<HandRank, EngineError> {
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(community);
    evaluate(&cards)
}

/// The exact best 5-card selection, for showdown reports.
pub fn pick_best_five(hole: [Card; 2], community: &[Card]) -> Result<[Card; 5], EngineError> {
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(community);
    if cards.len() < 5 {
        return Err(EngineError::InvalidInput(format!(
            "best-five selection requires at least 5 cards, got {}",
            cards.len()
        )));
    }

    let mut best: Option<(HandRank, [Card; 5])> = None;
    for_each_five(&cards, |five| {
        let rank = evaluate_five(five);
        if best.as_ref().is_none_or(|(b, _)| rank > *b) {
            best = Some((rank, *five));
        }
    });
    Ok(best.expect("at least one 5-card subset").1)
}

/// Compare two complete hands. Greater means `a` wins.
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EngineError> {
    Ok(evaluate(a)?.cmp(&evaluate(b)?))
}

fn for_each_five(cards: &[Card], mut f: impl FnMut(&[Card; 5])) {
    let n = cards.len();
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        f(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
}

/// Classify exactly five cards.
fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut ranks: [u8; 5] = [0; 5];
    for (i, card) in cards.iter().enumerate() {
        ranks[i] = card.rank().value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = straight_high_card(&ranks);

    let counts = rank_frequencies(&ranks);

    if let Some(high) = straight_high {
        if flush {
            return if high == 14 {
                HandRank::new(HandRankCategory::RoyalFlush, [14, 0, 0, 0, 0])
            } else {
                HandRank::new(HandRankCategory::StraightFlush, [high, 0, 0, 0, 0])
            };
        }
    }

    if let Some(quad) = rank_with_count(&counts, 4) {
        let side = highest_excluding(&ranks, &[quad]);
        return HandRank::new(HandRankCategory::FourKind, [quad, side, 0, 0, 0]);
    }

    let trips = rank_with_count(&counts, 3);
    let top_pair = rank_with_count(&counts, 2);
    if let (Some(t), Some(p)) = (trips, top_pair) {
        return HandRank::new(HandRankCategory::FullHouse, [t, p, 0, 0, 0]);
    }

    if flush {
        return HandRank::new(HandRankCategory::Flush, ranks);
    }

    if let Some(high) = straight_high {
        return HandRank::new(HandRankCategory::Straight, [high, 0, 0, 0, 0]);
    }

    if let Some(t) = trips {
        let mut kickers = [t, 0, 0, 0, 0];
        fill_kickers(&mut kickers, 1, &ranks, &[t]);
        return HandRank::new(HandRankCategory::ThreeKind, kickers);
    }

    if let Some(high_pair) = top_pair {
        if let Some(low_pair) = second_rank_with_count(&counts, 2, high_pair) {
            let side = highest_excluding(&ranks, &[high_pair, low_pair]);
            return HandRank::new(
                HandRankCategory::TwoPair,
                [high_pair, low_pair, side, 0, 0],
            );
        }
        let mut kickers = [high_pair, 0, 0, 0, 0];
        fill_kickers(&mut kickers, 1, &ranks, &[high_pair]);
        return HandRank::new(HandRankCategory::Pair, kickers);
    }

    HandRank::new(HandRankCategory::HighCard, ranks)
}

/// High card of a straight, if any. `ranks` must be sorted descending.
/// The wheel A-5-4-3-2 counts as a 5-high straight.
fn straight_high_card(ranks: &[u8; 5]) -> Option<u8> {
    let consecutive = ranks.windows(2).all(|w| w[0] == w[1] + 1);
    if consecutive {
        return Some(ranks[0]);
    }
    if *ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn rank_frequencies(ranks: &[u8; 5]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for &r in ranks {
        counts[r as usize] += 1;
    }
    counts
}

/// Highest rank appearing exactly `n` times.
fn rank_with_count(counts: &[u8; 15], n: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| counts[r as usize] == n)
}

/// Highest rank below `above` appearing exactly `n` times.
fn second_rank_with_count(counts: &[u8; 15], n: u8, above: u8) -> Option<u8> {
    (2..above).rev().find(|&r| counts[r as usize] == n)
}

fn highest_excluding(ranks: &[u8; 5], excluded: &[u8]) -> u8 {
    ranks
        .iter()
        .copied()
        .find(|r| !excluded.contains(r))
        .unwrap_or(0)
}

fn fill_kickers(kickers: &mut [u8; 5], mut at: usize, ranks: &[u8; 5], excluded: &[u8]) {
    for &r in ranks {
        if !excluded.contains(&r) && at < 5 {
            kickers[at] = r;
            at += 1;
        }
    }
}

//! Per-player contribution ledger and side-pot partition.

use std::collections::HashSet;

use holdem_shared::SeatId;

/// One slice of the pot: an amount plus the seats eligible to win it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PotSlice {
    pub amount: u32,
    /// Eligible seats in ledger (insertion) order.
    pub eligible: Vec<SeatId>,
}

/// Total contributions per hand, indexed by seat, insertion-ordered.
/// Contributions only grow during a hand; the ledger total equals the chips
/// the stacks have lost since the hand started.
#[derive(Clone, Debug, Default)]
pub struct Pot {
    contributions: Vec<(SeatId, u32)>,
}

impl Pot {
    pub fn new() -> Self {
        Pot::default()
    }

    pub fn add(&mut self, seat: SeatId, amount: u32) {
        for (pid, contrib) in &mut self.contributions {
            if *pid == seat {
                *contrib += amount;
                return;
            }
        }
        self.contributions.push((seat, amount));
    }

    pub fn total(&self) -> u32 {
        self.contributions.iter().map(|(_, c)| c).sum()
    }

    pub fn contribution(&self, seat: SeatId) -> u32 {
        self.contributions
            .iter()
            .find(|(pid, _)| *pid == seat)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.contributions.clear();
    }

    /// Partition the ledger at each distinct contribution level into slices.
    ///
    /// Each slice collects `level - prev` from every seat that reached the
    /// level, plus the partial remainder of any seat that fell between the
    /// two levels. A seat is eligible for a slice iff it reached the level
    /// and has not folded. A slice whose contributors all folded (dead money
    /// only) is merged into the nearest lower slice with a nonempty eligible
    /// set, or the next higher one when no lower exists, so no chips are
    /// stranded. Slice amounts always sum to the ledger total.
    pub fn side_pots(&self, folded: &HashSet<SeatId>) -> Vec<PotSlice> {
        let mut levels: Vec<u32> = self
            .contributions
            .iter()
            .filter(|(_, c)| *c > 0)
            .map(|(_, c)| *c)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut slices: Vec<PotSlice> = Vec::new();
        let mut prev = 0u32;

        for level in levels {
            let width = level - prev;
            let mut amount = 0u32;
            let mut eligible = Vec::new();
            for (pid, contrib) in &self.contributions {
                if *contrib >= level {
                    amount += width;
                    if !folded.contains(pid) {
                        eligible.push(*pid);
                    }
                } else if *contrib > prev {
                    // Short contribution that died inside this slice.
                    amount += contrib - prev;
                }
            }
            if amount > 0 {
                slices.push(PotSlice { amount, eligible });
            }
            prev = level;
        }

        merge_dead_slices(slices)
    }
}

/// Fold empty-eligible slices into their neighbors.
fn merge_dead_slices(slices: Vec<PotSlice>) -> Vec<PotSlice> {
    let mut merged: Vec<PotSlice> = Vec::with_capacity(slices.len());
    let mut orphaned = 0u32;
    for slice in slices {
        if slice.eligible.is_empty() {
            match merged.last_mut() {
                Some(prev) => prev.amount += slice.amount,
                None => orphaned += slice.amount,
            }
        } else {
            let mut slice = slice;
            slice.amount += orphaned;
            orphaned = 0;
            merged.push(slice);
        }
    }
    // Everyone folded out of every level: nothing to merge into. The caller
    // handles the walkaway case before partitioning, so this stays empty.
    if orphaned > 0 {
        if let Some(last) = merged.last_mut() {
            last.amount += orphaned;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded(ids: &[usize]) -> HashSet<SeatId> {
        ids.iter().map(|&i| SeatId(i)).collect()
    }

    #[test]
    fn single_level_single_pot() {
        let mut pot = Pot::new();
        pot.add(SeatId(0), 50);
        pot.add(SeatId(1), 50);
        let slices = pot.side_pots(&folded(&[]));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].amount, 100);
        assert_eq!(slices[0].eligible, vec![SeatId(0), SeatId(1)]);
    }

    #[test]
    fn three_way_all_in_partitions() {
        let mut pot = Pot::new();
        pot.add(SeatId(0), 30);
        pot.add(SeatId(1), 60);
        pot.add(SeatId(2), 100);
        let slices = pot.side_pots(&folded(&[]));
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].amount, 90);
        assert_eq!(slices[0].eligible.len(), 3);
        assert_eq!(slices[1].amount, 60);
        assert_eq!(slices[1].eligible, vec![SeatId(1), SeatId(2)]);
        assert_eq!(slices[2].amount, 40);
        assert_eq!(slices[2].eligible, vec![SeatId(2)]);
        assert_eq!(slices.iter().map(|s| s.amount).sum::<u32>(), pot.total());
    }

    #[test]
    fn folded_seats_contribute_but_cannot_win() {
        let mut pot = Pot::new();
        pot.add(SeatId(0), 40);
        pot.add(SeatId(1), 40);
        pot.add(SeatId(2), 15); // folded short stack
        let slices = pot.side_pots(&folded(&[2]));
        // 15 dead chips land in the first slice; seat 2 is never eligible.
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].amount, 45);
        assert_eq!(slices[0].eligible, vec![SeatId(0), SeatId(1)]);
        assert_eq!(slices[1].amount, 50);
        assert_eq!(slices.iter().map(|s| s.amount).sum::<u32>(), pot.total());
    }

    #[test]
    fn dead_top_slice_merges_downward() {
        // Seat 2 contributed the most and then folded: its top level has no
        // eligible winner and must flow into the slice below.
        let mut pot = Pot::new();
        pot.add(SeatId(0), 50);
        pot.add(SeatId(1), 50);
        pot.add(SeatId(2), 80);
        let slices = pot.side_pots(&folded(&[2]));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].amount, 180);
        assert_eq!(slices[0].eligible, vec![SeatId(0), SeatId(1)]);
    }

    #[test]
    fn bottom_slice_stays_live_when_short_folder_matched_it() {
        // The shortest contributor folded at exactly the bottom level; the
        // level still carries the others' money and their eligibility.
        let mut pot = Pot::new();
        pot.add(SeatId(0), 10);
        pot.add(SeatId(1), 60);
        pot.add(SeatId(2), 60);
        let slices = pot.side_pots(&folded(&[0]));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].amount, 30);
        assert_eq!(slices[0].eligible, vec![SeatId(1), SeatId(2)]);
        assert_eq!(slices[1].amount, 100);
    }

    #[test]
    fn contributions_accumulate_per_seat() {
        let mut pot = Pot::new();
        pot.add(SeatId(0), 5);
        pot.add(SeatId(0), 20);
        assert_eq!(pot.contribution(SeatId(0)), 25);
        assert_eq!(pot.total(), 25);
    }
}

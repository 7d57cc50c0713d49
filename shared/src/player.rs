//! Seat identifiers and setup records.

use serde::{Deserialize, Serialize};

/// Dense seat identifier, 0..N-1, stable within a hand.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId(pub usize);

impl From<usize> for SeatId {
    fn from(v: usize) -> Self {
        SeatId(v)
    }
}

impl From<SeatId> for usize {
    fn from(seat: SeatId) -> Self {
        seat.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for seating a player at a new table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub stack: u32,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        SeatConfig {
            name: name.into(),
            stack,
        }
    }
}

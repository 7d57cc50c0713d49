//! Game state and the hand lifecycle. Implementation split across files:
//! `state` owns the aggregate, `pot` the contribution ledger, and the
//! `engine`/`dealing`/`betting`/`showdown` siblings drive one hand through
//! blinds, streets and settlement.

mod betting;
mod dealing;
mod engine;
mod pot;
mod showdown;
mod state;

pub use engine::HandEngine;
pub use pot::{Pot, PotSlice};
pub use state::{GameState, Seat};

//! Engine error taxonomy.

use holdem_shared::{Action, SeatId};
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// `StateInvariant` indicates a bug rather than bad input; a hand that
/// returns it leaves the state partially mutated and the caller must reset
/// before replaying.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("state invariant violated: {0}")]
    StateInvariant(String),

    #[error("seat {seat} submitted illegal action {action:?}")]
    IllegalAction { seat: SeatId, action: Action },
}

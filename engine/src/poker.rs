//! Hand evaluation.

pub mod evaluation;

pub use evaluation::{compare, evaluate, evaluate_best_hand, pick_best_five};

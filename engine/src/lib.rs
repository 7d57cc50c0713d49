//! Headless engine for driving a complete hand of No-Limit Texas Hold'em.
//!
//! The engine is deterministic given an injected decision source and an
//! injected shuffler: it shuffles, posts blinds, deals, conducts the four
//! betting rounds, resolves the showdown with main/side-pot distribution and
//! mutates a single [`game::GameState`] in place. Front-ends plug in through
//! the capability traits in [`sources`].

pub mod bot;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod poker;
pub mod pretty;
pub mod rules;
pub mod sources;

pub use error::EngineError;
pub use game::{GameState, HandEngine, Seat};
pub use sources::{DecisionSource, EventSink, Shuffler};

//! questlog-core — goal variants, scoring ledger, and persistence.
//!
//! This crate is the engine behind the `questlog` CLI: a registry of
//! trackable goals, a points/level/achievement ledger, and a JSON save
//! format. It is fully synchronous and does no I/O beyond save/load.

pub mod codec;
pub mod engine;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod registry;

pub use engine::{EventSummary, LoadOutcome, QuestEngine, ScoreSnapshot};
pub use error::EngineError;
pub use goal::{Goal, GoalKind};
pub use ledger::ProgressLedger;
pub use registry::GoalRegistry;

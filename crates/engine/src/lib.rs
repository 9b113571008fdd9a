//! Dicer engine library.
//!
//! Orchestration around the `dicer-domain` rules: expression parsing,
//! dice simulation through an injectable random source, outcome
//! evaluation/formatting, and the quick-roll and repeat-check command
//! forms.
//!
//! ## Structure
//!
//! - `ports` - `RandomPort` abstraction plus a deterministic test source
//! - `adapters` - production `RandomPort` implementation over `rand`
//! - `simulator` - per-die draws and totals
//! - `parser` - full check-expression grammar
//! - `evaluator` - threshold/critical resolution and result formatting
//! - `commands` - `.r`/`.d`/`.t`/`.m` orchestration and line dispatch

pub mod adapters;
pub mod commands;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod ports;
pub mod simulator;


pub use adapters::ThreadRngAdapter;
pub use commands::DiceEngine;
pub use error::EngineError;
pub use ports::{FixedRandomPort, RandomPort};

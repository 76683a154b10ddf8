//! Falling-block rules engine (workspace facade crate).
//!
//! Re-exports `tetris_rules::{core,types}` while the implementation lives in dedicated
//! crates under `crates/`.

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;

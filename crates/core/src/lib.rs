//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the current and
//! next piece, collision, rotation, locking, line clears, scoring and levels. It has
//! **no** dependencies on rendering, input devices, audio, timers or storage:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Synchronous**: Every command runs to completion on the caller's thread
//! - **Copy-out queries**: Renderers read values and snapshots, never live grid handles
//!
//! # Module Structure
//!
//! - [`shapes`]: Canonical tetromino offsets and quarter-turn rotation
//! - [`piece`]: A shape with orientation and position, transformed by value
//! - [`grid`]: 10x20 locked cells with collision checks and line clearing
//! - [`board`]: The game state machine driven by commands and ticks
//! - [`scoring`]: Line-clear points, levels, drop delay and the [`Rules`] table
//! - [`rng`]: Seeded uniform or 7-bag next-piece selection
//! - [`snapshot`]: Render-facing copy of the board
//! - [`record`]: Final result handed to score storage
//!
//! # Game Rules
//!
//! - **Coordinates**: `y` grows upward; row 0 is the floor, row 19 the top
//! - **Rotation**: In place, rejected outright when blocked (no wall kicks)
//! - **Lock**: A piece that cannot move down locks immediately
//! - **Scoring**: 40/100/300/1200 × level (before the clear) for 1/2/3/4 lines;
//!   +2 per hard-drop row, nothing for single-row steps
//! - **Levels**: Start at 1, one more every 10 lines
//! - **Gravity**: `max(100, 400 - (level - 1) * 30)` ms between ticks
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::Board;
//! use tetris_rules_types::Command;
//!
//! let mut board = Board::new(12345);
//! board.start();
//!
//! board.apply(Command::MoveRight);
//! board.apply(Command::RotateRight);
//! board.apply(Command::DropDown);
//!
//! assert!(board.score() > 0); // Hard drop awards points
//! assert_eq!(board.level(), 1);
//! ```
//!
//! # Timing
//!
//! The board never runs a timer. A driver asks [`Board::delay_for_level`] how long to
//! wait, calls [`Board::tick`] when it expires, and asks again after every lock.

pub mod board;
pub mod grid;
pub mod piece;
pub mod record;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_rules_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockEvent};
pub use grid::{ClearedRows, Grid};
pub use piece::Piece;
pub use record::GameRecord;
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use scoring::{delay_for_level, Rules};
pub use shapes::offsets;
pub use snapshot::BoardSnapshot;

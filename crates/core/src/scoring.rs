//! Scoring module - line-clear points, levels, and gravity delay
//!
//! Rules in force (see [`Rules::default`]):
//! - Line clears use the classic table `[0, 40, 100, 300, 1200]`, multiplied by the level.
//! - The level starts at 1 and goes up by one every 10 lines: `level = lines / 10 + 1`.
//! - A single-row step down earns nothing, whether the player or gravity made it; a hard
//!   drop earns 2 points per row fallen.
//! - Gravity delay is `max(100, 400 - (level - 1) * 30)` milliseconds.

use std::time::Duration;

use crate::rng::Randomizer;
use crate::types::{
    DELAY_STEP_MS, HARD_DROP_POINTS_PER_CELL, INITIAL_DELAY_MS, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DELAY_MS, SOFT_DROP_POINTS, STARTING_LEVEL,
};

/// Tunable rule constants for one board
///
/// Every number that decides score, level or speed lives here so a driver can pin it
/// down explicitly and tests can exercise alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Base points for clearing 0..=4 rows at once
    pub line_scores: [u32; 5],
    /// Lines needed per level step (must be non-zero)
    pub lines_per_level: u32,
    /// Points for a single-row step down (soft drop or gravity) that moved the piece
    pub soft_drop_points: u32,
    /// Points per row fallen during a hard drop
    pub hard_drop_points_per_cell: u32,
    pub initial_delay_ms: u32,
    pub delay_step_ms: u32,
    pub min_delay_ms: u32,
    /// How the next piece is chosen
    pub randomizer: Randomizer,
    /// Seed for the piece randomizer
    pub seed: u32,
}

impl Rules {
    /// Classic rules with a caller-chosen seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// The documented constants (same as [`Rules::default`])
    pub fn classic() -> Self {
        Self::default()
    }

    /// Same rules without any drop bonus
    pub fn without_drop_points(self) -> Self {
        Self {
            soft_drop_points: 0,
            hard_drop_points_per_cell: 0,
            ..self
        }
    }

    pub fn line_clear_score(&self, lines: usize, level: u32) -> u32 {
        line_clear_score(lines, level, &self.line_scores)
    }

    pub fn level_for_lines(&self, lines: u32) -> u32 {
        level_for_lines(lines, self.lines_per_level)
    }

    pub fn delay_ms_for_level(&self, level: u32) -> u32 {
        delay_ms(
            level,
            self.initial_delay_ms,
            self.delay_step_ms,
            self.min_delay_ms,
        )
    }

    pub fn delay_for_level(&self, level: u32) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms_for_level(level)))
    }

    /// Points for a drop of `cells` rows
    pub fn drop_score(&self, cells: u32, is_hard_drop: bool) -> u32 {
        if is_hard_drop {
            cells.saturating_mul(self.hard_drop_points_per_cell)
        } else {
            cells.saturating_mul(self.soft_drop_points)
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES,
            lines_per_level: LINES_PER_LEVEL,
            soft_drop_points: SOFT_DROP_POINTS,
            hard_drop_points_per_cell: HARD_DROP_POINTS_PER_CELL,
            initial_delay_ms: INITIAL_DELAY_MS,
            delay_step_ms: DELAY_STEP_MS,
            min_delay_ms: MIN_DELAY_MS,
            randomizer: Randomizer::Uniform,
            seed: 1,
        }
    }
}

/// Calculate line clear score
/// lines: number of lines cleared (0-4)
/// level: current level (1-based)
pub fn line_clear_score(lines: usize, level: u32, table: &[u32; 5]) -> u32 {
    match table.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level management
/// Level starts at 1 and increases every `lines_per_level` lines cleared
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    assert!(lines_per_level > 0, "lines_per_level must be non-zero");
    STARTING_LEVEL + total_lines / lines_per_level
}

/// Gravity delay for a level, in milliseconds, clamped at `min`
pub fn delay_ms(level: u32, initial: u32, step: u32, min: u32) -> u32 {
    let reduction = level.saturating_sub(STARTING_LEVEL).saturating_mul(step);
    initial.saturating_sub(reduction).max(min)
}

/// Gravity delay for a level under the classic constants
pub fn delay_for_level(level: u32) -> Duration {
    Rules::default().delay_for_level(level)
}

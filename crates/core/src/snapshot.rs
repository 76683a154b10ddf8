use crate::grid::Row;
use crate::piece::Piece;
use crate::types::{
    Cell, GameStatus, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DELAY_MS, STARTING_LEVEL,
};

/// Read-only copy of everything a renderer needs
///
/// `rows[0]` is the bottom row. Before the first start every cell is empty and no piece is
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub rows: [Row; BOARD_HEIGHT as usize],
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub ghost_enabled: bool,
    pub delay_ms: u32,
}

impl BoardSnapshot {
    /// Locked cell at (x, y); empty when out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }

    /// Ghost piece to draw, if enabled and in play
    pub fn ghost(&self) -> Option<Piece> {
        if !self.ghost_enabled {
            return None;
        }
        Some(self.current?.at_y(self.ghost_y?))
    }

    pub fn started(&self) -> bool {
        self.status != GameStatus::NotStarted
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            rows: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            ghost_y: None,
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            high_score: 0,
            status: GameStatus::NotStarted,
            ghost_enabled: true,
            delay_ms: INITIAL_DELAY_MS,
        }
    }
}

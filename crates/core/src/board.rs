//! Board module - the complete game state machine
//!
//! This module ties together the grid, pieces, randomizer and scoring. It handles
//! spawning, movement, rotation, locking, line clears, levels and the game lifecycle.
//!
//! States: `NotStarted → Running ⇄ Paused`, `Running → GameOver`. Only [`Board::start`]
//! leaves `GameOver`. A command issued in a state where it means nothing is a no-op and
//! returns `false`.

use std::time::Duration;

use crate::grid::{ClearedRows, Grid};
use crate::piece::Piece;
use crate::record::GameRecord;
use crate::rng::PieceQueue;
use crate::scoring::Rules;
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Command, GameStatus, STARTING_LEVEL};

/// What happened when a piece locked (consumed by observers such as audio glue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was written into the grid
    pub piece: Piece,
    /// Rows removed by this lock, bottom first (indices before the collapse)
    pub cleared_rows: ClearedRows,
    pub line_clear_score: u32,
    /// Hard-drop bonus awarded just before the lock (0 for single-row steps)
    pub drop_score: u32,
    pub level_up: bool,
    /// The following spawn collided and ended the game
    pub game_over: bool,
}

impl LockEvent {
    pub fn lines_cleared(&self) -> u32 {
        self.cleared_rows.len() as u32
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    current: Option<Piece>,
    next: Option<Piece>,
    queue: PieceQueue,
    rules: Rules,
    score: u32,
    level: u32,
    lines_cleared: u32,
    /// Best score seen by this board, across games
    high_score: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    ghost_enabled: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Board {
    /// Create a board with classic rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rules(Rules::with_seed(seed))
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            grid: Grid::new(),
            current: None,
            next: None,
            queue: PieceQueue::new(rules.randomizer, rules.seed),
            rules,
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            high_score: 0,
            started: false,
            paused: false,
            game_over: false,
            ghost_enabled: true,
            last_event: None,
        }
    }

    /// Start (or restart) a game
    ///
    /// Clears the grid and the counters (the high score is kept), draws the next piece,
    /// promotes it to the current piece and draws a fresh next piece. The piece sequence
    /// continues from the previous game rather than replaying it.
    pub fn start(&mut self) -> bool {
        self.grid.clear();
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.lines_cleared = 0;
        self.started = true;
        self.paused = false;
        self.game_over = false;
        self.current = None;
        self.last_event = None;
        self.next = Some(self.draw_piece());
        self.spawn_next();
        self.check_invariants();
        true
    }

    fn draw_piece(&mut self) -> Piece {
        Piece::spawn(self.queue.draw())
    }

    /// Promote `next` to `current` and draw a new `next`
    ///
    /// Returns false and ends the game if the promoted piece overlaps locked cells.
    fn spawn_next(&mut self) -> bool {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.draw_piece(),
        };
        self.next = Some(self.draw_piece());

        if !self.grid.fits(&piece) {
            self.game_over = true;
            self.current = None;
            return false;
        }

        self.current = Some(piece);
        true
    }

    /// Running and not paused, with a piece in play
    fn is_playing(&self) -> bool {
        self.started && !self.paused && !self.game_over && self.current.is_some()
    }

    /// Replace the current piece with `candidate` if it fits
    fn try_place(&mut self, candidate: Piece) -> bool {
        if !self.is_playing() || !self.grid.fits(&candidate) {
            return false;
        }
        self.current = Some(candidate);
        true
    }

    /// Try to move the current piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        match self.current {
            Some(piece) => self.try_place(piece.moved_by(dx, dy)),
            None => false,
        }
    }

    /// Try to rotate the current piece in place (no wall kicks)
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        let rotated = if clockwise {
            piece.rotated_clockwise()
        } else {
            piece.rotated_counter_clockwise()
        };
        self.try_place(rotated)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn rotate_right(&mut self) -> bool {
        self.try_rotate(true)
    }

    pub fn rotate_left(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Move down one row (scoring the step) or lock if blocked
    pub fn move_piece_down(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        if self.try_move(0, -1) {
            self.add_score(self.rules.drop_score(1, false));
        } else {
            self.lock_current(0);
        }
        self.check_invariants();
        true
    }

    /// Gravity step fired by the driver's timer; same as [`Board::move_piece_down`]
    pub fn tick(&mut self) -> bool {
        self.move_piece_down()
    }

    /// Hard drop the current piece to its resting row and lock it
    pub fn drop_down(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let (Some(piece), Some(landed)) = (self.current, self.ghost_piece()) else {
            return false;
        };

        let distance = (piece.y - landed.y) as u32;
        let drop_score = self.rules.drop_score(distance, true);
        self.current = Some(landed);
        self.add_score(drop_score);
        self.lock_current(drop_score);
        self.check_invariants();
        true
    }

    /// Lock the current piece into the grid, clear lines and spawn the next piece
    fn lock_current(&mut self, drop_score: u32) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let locked = self.grid.lock_piece(&piece);
        assert!(locked, "current piece overlapped the grid at lock: {:?}", piece);

        let cleared_rows = self.grid.clear_full_rows();
        let lines = cleared_rows.len();

        // Points use the level in force when the rows completed.
        let level_before = self.level;
        let line_clear_score = self.rules.line_clear_score(lines, level_before);
        if lines > 0 {
            self.lines_cleared += lines as u32;
            self.level = self.rules.level_for_lines(self.lines_cleared);
            self.add_score(line_clear_score);
        }

        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            piece,
            cleared_rows,
            line_clear_score,
            drop_score,
            level_up: self.level > level_before,
            game_over: !spawned,
        });
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    /// Toggle `Running ⇄ Paused`; no effect before start or after game over
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Toggle the ghost piece preview (display only)
    pub fn toggle_ghost_piece(&mut self) -> bool {
        self.ghost_enabled = !self.ghost_enabled;
        true
    }

    /// Apply a driver command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MovePieceDown => self.move_piece_down(),
            Command::DropDown => self.drop_down(),
            Command::RotateRight => self.rotate_right(),
            Command::RotateLeft => self.rotate_left(),
            Command::TogglePause => self.toggle_pause(),
            Command::ToggleGhost => self.toggle_ghost_piece(),
            Command::Tick => self.tick(),
        }
    }

    /// Where the current piece would rest if hard-dropped now
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut piece = self.current?;
        loop {
            let below = piece.moved_by(0, -1);
            if !self.grid.fits(&below) {
                return Some(piece);
            }
            piece = below;
        }
    }

    /// Row the current piece would rest on if hard-dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        self.ghost_piece().map(|piece| piece.y)
    }

    /// Time the driver should wait between gravity ticks at the current level
    pub fn delay_for_level(&self) -> Duration {
        self.rules.delay_for_level(self.level)
    }

    /// Seed the record from storage; the high score never goes down
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = self.high_score.max(high_score);
    }

    /// Result to hand to the persistence collaborator, once the game is over
    pub fn final_record(&self, player: &str) -> Option<GameRecord> {
        if !self.game_over {
            return None;
        }
        Some(GameRecord::new(
            player,
            self.score,
            self.level,
            self.lines_cleared,
        ))
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn status(&self) -> GameStatus {
        if !self.started {
            GameStatus::NotStarted
        } else if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn ghost_enabled(&self) -> bool {
        self.ghost_enabled
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    /// Locked cell at (x, y); empty when out of bounds
    pub fn shape_at(&self, x: i8, y: i8) -> Cell {
        self.grid.get(x, y).flatten()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.grid.write_rows(&mut out.rows);
        out.current = self.current;
        out.next = self.next;
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.level = self.level;
        out.lines_cleared = self.lines_cleared;
        out.high_score = self.high_score;
        out.status = self.status();
        out.ghost_enabled = self.ghost_enabled;
        out.delay_ms = self.rules.delay_ms_for_level(self.level);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// The current piece must sit inside the grid on empty cells while in play.
    fn check_invariants(&self) {
        if let (false, Some(piece)) = (self.game_over, self.current) {
            debug_assert!(
                self.grid.fits(&piece),
                "current piece out of place: {:?}",
                piece
            );
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};

    /// Started board with no drop bonus and a fixed current/next pair
    fn board_with(current: Piece, next: Shape) -> Board {
        let mut board = Board::with_rules(Rules::with_seed(12345).without_drop_points());
        board.start();
        board.current = Some(current);
        board.next = Some(Piece::spawn(next));
        board
    }

    fn vertical_line(x: i8, y: i8) -> Piece {
        // North offsets span dy = 1..=-2, so the bottom cell sits on y - 2.
        Piece::new(Shape::Line, Rotation::North, x, y)
    }

    #[test]
    fn test_new_board_defaults() {
        let board = Board::new(12345);

        assert_eq!(board.status(), GameStatus::NotStarted);
        assert!(!board.started());
        assert_eq!(board.score(), 0);
        assert_eq!(board.level(), 1);
        assert_eq!(board.lines_cleared(), 0);
        assert!(board.current().is_none());
        assert!(board.next().is_none());
        assert_eq!(board.ghost_y(), None);
        assert_eq!(board.shape_at(0, 0), None);
    }

    #[test]
    fn test_start_spawns_current_and_next() {
        let mut board = Board::new(12345);
        assert!(board.start());

        assert_eq!(board.status(), GameStatus::Running);
        let current = board.current().unwrap();
        assert_eq!(current, Piece::spawn(current.shape));
        assert!(board.next().is_some());
        let top = current.cell_positions().iter().map(|c| c.1).max();
        assert_eq!(top, Some(BOARD_HEIGHT as i8 - 1));
    }

    #[test]
    fn test_commands_ignored_before_start() {
        let mut board = Board::new(1);
        assert!(!board.move_left());
        assert!(!board.rotate_right());
        assert!(!board.move_piece_down());
        assert!(!board.drop_down());
        assert!(!board.tick());
        assert!(!board.toggle_pause());
        assert_eq!(board.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_single_line_clear_scores_40_times_level() {
        let mut board = board_with(vertical_line(0, 2), Shape::T);
        board.grid.fill_row_except(0, Shape::S, &[0]);
        board.grid.set(5, 1, Some(Shape::Z));

        assert!(board.drop_down());

        assert_eq!(board.lines_cleared(), 1);
        assert_eq!(board.score(), 40);
        // Remaining Line cells and the Z cell moved down one row.
        assert_eq!(board.shape_at(0, 0), Some(Shape::Line));
        assert_eq!(board.shape_at(0, 1), Some(Shape::Line));
        assert_eq!(board.shape_at(0, 2), Some(Shape::Line));
        assert_eq!(board.shape_at(0, 3), None);
        assert_eq!(board.shape_at(5, 0), Some(Shape::Z));
        assert_eq!(board.shape_at(1, 0), None);
        assert_eq!(board.current().map(|p| p.shape), Some(Shape::T));

        let event = board.take_last_event().unwrap();
        assert_eq!(event.cleared_rows.as_slice(), &[0]);
        assert_eq!(event.line_clear_score, 40);
        assert!(!event.game_over);
        assert!(board.take_last_event().is_none());
    }

    #[test]
    fn test_multi_line_clear_table() {
        // (rows filled except column 0, expected lines, expected points at level 1)
        for (rows, expected_lines, expected_score) in [(2, 2, 100), (3, 3, 300), (4, 4, 1200)] {
            let mut board = board_with(vertical_line(0, 2), Shape::Square);
            for y in 0..rows {
                board.grid.fill_row_except(y, Shape::L, &[0]);
            }

            board.drop_down();

            assert_eq!(board.lines_cleared(), expected_lines);
            assert_eq!(board.score(), expected_score);
            let leftover = 4 - expected_lines as usize;
            assert_eq!(board.grid().occupied_count(), leftover);
        }
    }

    #[test]
    fn test_lock_without_clear_keeps_score() {
        let mut board = board_with(Piece::new(Shape::Square, Rotation::North, 0, 1), Shape::T);
        board.tick();

        assert_eq!(board.score(), 0);
        assert_eq!(board.lines_cleared(), 0);
        assert_eq!(board.grid().occupied_count(), 4);
        assert_eq!(board.take_last_event().unwrap().lines_cleared(), 0);
    }

    #[test]
    fn test_level_up_scores_at_level_before_clear() {
        let mut board = board_with(vertical_line(0, 2), Shape::T);
        board.lines_cleared = 9;
        board.grid.fill_row_except(0, Shape::S, &[0]);

        board.drop_down();

        assert_eq!(board.lines_cleared(), 10);
        assert_eq!(board.level(), 2);
        assert_eq!(board.score(), 40);
        assert!(board.take_last_event().unwrap().level_up);
        assert_eq!(board.delay_for_level(), Duration::from_millis(370));

        // The next single at level 2 is worth 80. Column 0 still holds Line cells.
        board.current = Some(vertical_line(1, 5));
        board.grid.fill_row_except(0, Shape::S, &[1]);
        board.drop_down();
        assert_eq!(board.lines_cleared(), 11);
        assert_eq!(board.score(), 40 + 80);
    }

    #[test]
    fn test_spawn_collision_ends_game_without_scoring() {
        let mut board = board_with(Piece::new(Shape::Square, Rotation::North, 0, 1), Shape::Square);
        let (spawn_x, spawn_y) = crate::shapes::spawn_position(Shape::Square);
        board.grid.set(spawn_x, spawn_y, Some(Shape::Line));
        let score_before = board.score();

        // The square already rests on the floor, so this locks it.
        assert!(board.move_piece_down());

        assert!(board.game_over());
        assert_eq!(board.status(), GameStatus::GameOver);
        assert_eq!(board.score(), score_before);
        assert!(board.current().is_none());
        assert!(board.take_last_event().unwrap().game_over);

        // Terminal until restarted.
        assert!(!board.tick());
        assert!(!board.move_left());
        assert!(!board.toggle_pause());
        assert!(board.start());
        assert_eq!(board.status(), GameStatus::Running);
    }

    #[test]
    fn test_tick_and_move_piece_down_score_alike() {
        let mut by_timer = Board::new(7);
        let mut by_player = Board::new(7);
        by_timer.start();
        by_player.start();
        let y = by_timer.current().unwrap().y;

        for _ in 0..5 {
            assert!(by_timer.tick());
            assert!(by_player.move_piece_down());
        }

        assert_eq!(by_timer.current(), by_player.current());
        assert_eq!(by_timer.current().unwrap().y, y - 5);
        assert_eq!(by_timer.score(), by_player.score());
        assert_eq!(by_timer.score(), 0);
    }

    #[test]
    fn test_step_points_apply_to_gravity_too() {
        let rules = Rules {
            soft_drop_points: 1,
            ..Rules::with_seed(7)
        };
        let mut board = Board::with_rules(rules);
        board.start();

        assert!(board.tick());
        assert!(board.move_piece_down());
        assert_eq!(board.score(), 2);
    }

    #[test]
    fn test_hard_drop_awards_two_points_per_row() {
        let mut board = Board::new(7);
        board.start();
        board.current = Some(Piece::new(Shape::Square, Rotation::North, 4, 10));

        assert!(board.drop_down());

        // Square origin fell from row 10 to row 1.
        assert_eq!(board.score(), 18);
        assert_eq!(board.shape_at(4, 0), Some(Shape::Square));
        assert_eq!(board.take_last_event().unwrap().drop_score, 18);
    }

    #[test]
    fn test_walls_reject_moves() {
        let mut board = board_with(Piece::new(Shape::Square, Rotation::North, 0, 10), Shape::T);
        assert!(!board.move_left());
        assert_eq!(board.current().unwrap().x, 0);

        let right_edge = BOARD_WIDTH as i8 - 2;
        board.current = Some(Piece::new(Shape::Square, Rotation::North, right_edge, 10));
        assert!(!board.move_right());
        assert!(board.move_left());
    }

    #[test]
    fn test_blocked_rotation_is_rejected_without_kick() {
        // Standing the flat Line back up needs column 2 free from row 3 to row 6.
        let flat = Piece::new(Shape::Line, Rotation::East, 2, 5);
        let mut board = board_with(flat, Shape::T);
        board.grid.set(2, 3, Some(Shape::S));

        assert!(!board.rotate_left());
        assert_eq!(board.current(), Some(flat));

        board.grid.set(2, 3, None);
        assert!(board.rotate_left());
        assert_eq!(board.current().unwrap().rotation, Rotation::North);
    }

    #[test]
    fn test_rotation_out_of_bounds_is_rejected() {
        // Upright Line against the left wall cannot lie down to the left.
        let upright = vertical_line(0, 10);
        let mut board = board_with(upright, Shape::T);
        assert!(!board.rotate_right());
        assert_eq!(board.current(), Some(upright));
    }

    #[test]
    fn test_pause_blocks_commands() {
        let mut board = Board::new(3);
        board.start();
        let before = board.current();

        assert!(board.toggle_pause());
        assert_eq!(board.status(), GameStatus::Paused);
        assert!(!board.move_left());
        assert!(!board.tick());
        assert!(!board.drop_down());
        assert_eq!(board.current(), before);

        assert!(board.toggle_pause());
        assert_eq!(board.status(), GameStatus::Running);
        assert!(board.tick());
    }

    #[test]
    fn test_ghost_matches_hard_drop_row() {
        let mut board = board_with(vertical_line(4, 15), Shape::T);
        board.grid.set(4, 5, Some(Shape::Z));

        // Bottom cell rests on row 6, origin two rows higher.
        assert_eq!(board.ghost_y(), Some(8));
        assert_eq!(board.current().unwrap().y, 15);

        board.drop_down();
        assert_eq!(board.shape_at(4, 6), Some(Shape::Line));
        assert_eq!(board.shape_at(4, 9), Some(Shape::Line));
        assert_eq!(board.shape_at(4, 10), None);
    }

    #[test]
    fn test_high_score_survives_restart() {
        let mut board = board_with(vertical_line(0, 2), Shape::T);
        board.grid.fill_row_except(0, Shape::S, &[0]);
        board.drop_down();
        assert_eq!(board.high_score(), 40);

        board.start();
        assert_eq!(board.score(), 0);
        assert_eq!(board.high_score(), 40);

        board.set_high_score(10);
        assert_eq!(board.high_score(), 40);
        board.set_high_score(500);
        assert_eq!(board.high_score(), 500);
    }

    #[test]
    fn test_final_record_only_after_game_over() {
        let mut board = board_with(Piece::new(Shape::Square, Rotation::North, 0, 1), Shape::Square);
        assert!(board.final_record("ana").is_none());

        let (spawn_x, spawn_y) = crate::shapes::spawn_position(Shape::Square);
        board.grid.set(spawn_x, spawn_y, Some(Shape::Line));
        board.tick();

        let record = board.final_record("  ").unwrap();
        assert_eq!(record.player, crate::types::DEFAULT_PLAYER_NAME);
        assert_eq!(record.level, 1);
    }

    #[test]
    fn test_ghost_toggle_is_display_only() {
        let mut board = Board::new(5);
        board.start();
        let snapshot = board.snapshot();

        assert!(board.ghost_enabled());
        assert!(board.toggle_ghost_piece());
        assert!(!board.ghost_enabled());

        let after = board.snapshot();
        assert_eq!(after.rows, snapshot.rows);
        assert_eq!(after.current, snapshot.current);
        assert_eq!(after.ghost_y, snapshot.ghost_y);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut board = Board::new(11);
        assert!(board.apply(Command::Start));
        assert!(board.apply(Command::TogglePause));
        assert!(board.paused());
        assert!(!board.apply(Command::MoveLeft));
        assert!(board.apply(Command::TogglePause));
        assert!(board.apply(Command::DropDown));
        assert!(board.grid().occupied_count() >= 4);
    }
}

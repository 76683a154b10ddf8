//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the rules engine and by the
//! collaborators around it (renderer, input layer, persistence). All types are pure
//! data with no game logic, so they can be used from any context.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, **bottom to top**)
//!
//! Row 0 is the floor. A renderer that draws top-down flips the row index itself.
//!
//! # Drop Delay
//!
//! The engine never schedules its own timer; it only reports how long the driver should
//! wait between gravity ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DELAY_MS` | 400 | Delay at level 1 |
//! | `DELAY_STEP_MS` | 30 | Reduction per level above 1 |
//! | `MIN_DELAY_MS` | 100 | Floor |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Command, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = Shape::T;
//! assert_eq!(Shape::from_str("t"), Some(shape));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod theme;

pub use theme::{Rgb, Theme};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity delay at level 1 in milliseconds
pub const INITIAL_DELAY_MS: u32 = 400;

/// Gravity delay reduction per level in milliseconds
pub const DELAY_STEP_MS: u32 = 30;

/// Gravity delay floor in milliseconds
pub const MIN_DELAY_MS: u32 = 100;

/// Level a fresh game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for one single-row step down (`move_piece_down` and gravity alike)
pub const SOFT_DROP_POINTS: u32 = 0;

/// Points per cell fallen during a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Name recorded for a finished game when the player left the name blank
pub const DEFAULT_PLAYER_NAME: &str = "Player1";


/// The seven tetromino shapes
///
/// The empty cell marker is not a variant: an unoccupied cell is `None` in a [`Cell`].
///
/// - **S**, **Z**: skew pieces (mirror images)
/// - **Line**: four in a row
/// - **T**: T-shaped
/// - **Square**: 2x2 block, rotation-invariant
/// - **L**, **MirroredL**: L-shaped (mirror images)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    S,
    Z,
    Line,
    T,
    Square,
    L,
    MirroredL,
}

impl Shape {
    /// Every shape, in declaration order
    pub const ALL: [Shape; 7] = [
        Shape::S,
        Shape::Z,
        Shape::Line,
        Shape::T,
        Shape::Square,
        Shape::L,
        Shape::MirroredL,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// Accepts the full name or the usual single-letter alias
    /// (`i` for Line, `o` for Square, `j` for MirroredL).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("line"), Some(Shape::Line));
    /// assert_eq!(Shape::from_str("O"), Some(Shape::Square));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "line" | "i" => Some(Shape::Line),
            "t" => Some(Shape::T),
            "square" | "o" => Some(Shape::Square),
            "l" => Some(Shape::L),
            "mirroredl" | "j" => Some(Shape::MirroredL),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::S => "s",
            Shape::Z => "z",
            Shape::Line => "line",
            Shape::T => "t",
            Shape::Square => "square",
            Shape::L => "l",
            Shape::MirroredL => "mirroredl",
        }
    }
}

/// Rotation states, stepped by 90°
///
/// - **North**: spawn orientation (index 0)
/// - **East**: one clockwise step (index 1)
/// - **South**: two steps (index 2)
/// - **West**: three clockwise steps (index 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from North (0..=3)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Inverse of [`Rotation::index`]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rotation::North),
            1 => Some(Rotation::East),
            2 => Some(Rotation::South),
            3 => Some(Rotation::West),
            _ => None,
        }
    }
}

/// Commands a driver can issue to the board
///
/// The input layer maps one discrete input event to one command; the timer maps each
/// expiry to [`Command::Tick`]. No debouncing happens at this level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Start (or restart) a game
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Soft drop: one cell down, locking if blocked
    MovePieceDown,
    /// Hard drop: fall to rest and lock
    DropDown,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Toggle pause state
    TogglePause,
    /// Toggle the ghost piece preview
    ToggleGhost,
    /// Gravity step fired by the driver's timer
    Tick,
}

impl Command {
    /// Every command, in declaration order
    pub const ALL: [Command; 10] = [
        Command::Start,
        Command::MoveLeft,
        Command::MoveRight,
        Command::MovePieceDown,
        Command::DropDown,
        Command::RotateRight,
        Command::RotateLeft,
        Command::TogglePause,
        Command::ToggleGhost,
        Command::Tick,
    ];

    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("hardDrop"), Some(Command::DropDown));
    /// assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateRight));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" | "restart" => Some(Command::Start),
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "movepiecedown" | "softdrop" | "down" => Some(Command::MovePieceDown),
            "dropdown" | "harddrop" | "drop" => Some(Command::DropDown),
            "rotateright" | "rotatecw" => Some(Command::RotateRight),
            "rotateleft" | "rotateccw" => Some(Command::RotateLeft),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "toggleghost" | "ghost" => Some(Command::ToggleGhost),
            "tick" => Some(Command::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MovePieceDown => "movePieceDown",
            Command::DropDown => "dropDown",
            Command::RotateRight => "rotateRight",
            Command::RotateLeft => "rotateLeft",
            Command::TogglePause => "togglePause",
            Command::ToggleGhost => "toggleGhost",
            Command::Tick => "tick",
        }
    }
}

/// Lifecycle of a game as seen by a driver
///
/// `NotStarted → Running ⇄ Paused`, `Running → GameOver`; only a new start leaves
/// `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Shape)`: Cell filled by a locked piece of that shape
pub type Cell = Option<Shape>;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at once:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

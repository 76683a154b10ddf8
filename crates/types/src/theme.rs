//! Colour themes
//!
//! Each shape gets its own named field, so reordering [`Shape`] never
//! silently recolours the board.

use crate::{Cell, Shape};

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// Palette used by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub ui_background: Rgb,
    pub board_background: Rgb,
    pub grid: Rgb,
    pub empty: Rgb,
    pub s: Rgb,
    pub z: Rgb,
    pub line: Rgb,
    pub t: Rgb,
    pub square: Rgb,
    pub l: Rgb,
    pub mirrored_l: Rgb,
}

impl Theme {
    /// Cool tones, soft contrast
    pub const DARK_MINIMAL: Theme = Theme {
        name: "Dark Minimal",
        ui_background: Rgb::new(18, 18, 24),
        board_background: Rgb::new(25, 25, 35),
        grid: Rgb::new(40, 40, 55),
        empty: Rgb::new(15, 15, 25),
        s: Rgb::from_hex(0x81C784),
        z: Rgb::from_hex(0x4FC3F7),
        line: Rgb::from_hex(0x9575CD),
        t: Rgb::from_hex(0xFFD54F),
        square: Rgb::from_hex(0xE57373),
        l: Rgb::from_hex(0x64B5F6),
        mirrored_l: Rgb::from_hex(0xFFB74D),
    };

    /// Arcade neon
    pub const RETRO_NEON: Theme = Theme {
        name: "Retro Neon",
        ui_background: Rgb::new(5, 5, 15),
        board_background: Rgb::new(10, 10, 25),
        grid: Rgb::new(20, 20, 40),
        empty: Rgb::new(0, 0, 0),
        s: Rgb::from_hex(0x00FF00),
        z: Rgb::from_hex(0xFF0066),
        line: Rgb::from_hex(0x00FFFF),
        t: Rgb::from_hex(0xFF00FF),
        square: Rgb::from_hex(0xFFFF00),
        l: Rgb::from_hex(0x0099FF),
        mirrored_l: Rgb::from_hex(0xFF6600),
    };

    /// Built-in themes, in cycling order
    pub const AVAILABLE: [Theme; 2] = [Theme::DARK_MINIMAL, Theme::RETRO_NEON];

    /// Colour of a shape
    pub fn shape_color(&self, shape: Shape) -> Rgb {
        match shape {
            Shape::S => self.s,
            Shape::Z => self.z,
            Shape::Line => self.line,
            Shape::T => self.t,
            Shape::Square => self.square,
            Shape::L => self.l,
            Shape::MirroredL => self.mirrored_l,
        }
    }

    /// Colour of a board cell (`empty` for `None`)
    pub fn color(&self, cell: Cell) -> Rgb {
        cell.map_or(self.empty, |shape| self.shape_color(shape))
    }

    /// Index of the theme after `index` in [`Theme::AVAILABLE`], wrapping
    pub fn next_index(index: usize) -> usize {
        (index + 1) % Self::AVAILABLE.len()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DARK_MINIMAL
    }
}

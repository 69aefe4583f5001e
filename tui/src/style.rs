//! Cell visual styles.
//!
//! A style maps a cell's state and position to the glyph and color
//! drawn for it.

use crossterm::style::Color;
use rlifesim_lib::State;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// How cells are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    /// Solid blocks for live cells, blanks for dead ones.
    Blocks,
    /// Plaintext-like `o` and `.` glyphs.
    Dots,
    /// Solid blocks, colored by position.
    Color,
}

impl Style {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "blocks" => Some(Style::Blocks),
            "dots" => Some(Style::Dots),
            "color" => Some(Style::Color),
            _ => None,
        }
    }

    /// The glyph drawn for a cell.
    pub(crate) fn glyph(self, state: State) -> char {
        match (self, state.is_alive()) {
            (Style::Dots, true) => 'o',
            (Style::Dots, false) => '.',
            (_, true) => '█',
            (_, false) => ' ',
        }
    }

    /// The foreground color a cell is drawn with.
    pub(crate) fn color(self, state: State, row: usize, col: usize) -> Color {
        match self {
            Style::Color if state.is_alive() => PALETTE[(row + col) % PALETTE.len()],
            _ => Color::Reset,
        }
    }
}

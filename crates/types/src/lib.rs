//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The classic Connect Four grid is 7 lanes wide and 6 rows tall:
//!
//! - **Width**: lanes, numbered 1..=width by players (columns 0..width internally)
//! - **Length**: rows, indexed 0..length with row 0 at the top
//! - Tokens fall to the highest free row index of a lane
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 7 | Number of lanes |
//! | `DEFAULT_LENGTH` | 6 | Number of rows |
//! | `DEFAULT_RUN_LENGTH` | 4 | Tokens in a row needed to win |
//! | `MAX_DIMENSION` | 64 | Upper bound accepted for width and length |
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Coord, Token, TokenColor, DEFAULT_RUN_LENGTH};
//!
//! let red = Token::player_one();
//! let yellow = Token::player_two();
//! assert_ne!(red.color(), yellow.color());
//! assert_eq!(red.label(), "P1");
//!
//! // Custom tokens are plain values.
//! let green = Token::new("P3", TokenColor::new(80, 200, 120));
//! assert_eq!(green.color(), TokenColor::new(80, 200, 120));
//!
//! let at = Coord::new(5, 0);
//! assert_eq!((at.row, at.col), (5, 0));
//! assert_eq!(DEFAULT_RUN_LENGTH, 4);
//! ```

use std::fmt;

/// Default grid width in lanes (7 columns)
pub const DEFAULT_WIDTH: usize = 7;

/// Default grid length in rows (6 rows)
pub const DEFAULT_LENGTH: usize = 6;

/// Default number of same-colored tokens in a row that wins a game
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Largest width or length accepted by configuration
pub const MAX_DIMENSION: usize = 64;

/// 24-bit RGB display color of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TokenColor {
    pub const RED: TokenColor = TokenColor::new(220, 60, 60);
    pub const YELLOW: TokenColor = TokenColor::new(240, 210, 60);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A player's token.
///
/// Tokens are immutable values created at game setup and copied into grid
/// cells on placement. Two tokens are considered the same color when their
/// [`TokenColor`]s are equal; the label is for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    label: &'static str,
    color: TokenColor,
}

impl Token {
    pub const fn new(label: &'static str, color: TokenColor) -> Self {
        Self { label, color }
    }

    /// Red token used by the first player.
    pub const fn player_one() -> Self {
        Self::new("P1", TokenColor::RED)
    }

    /// Yellow token used by the second player.
    pub const fn player_two() -> Self {
        Self::new("P2", TokenColor::YELLOW)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn color(&self) -> TokenColor {
        self.color
    }

    /// True if both tokens share a display color.
    pub fn same_color(&self, other: &Token) -> bool {
        self.color == other.color
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Cell on the grid (None = empty, Some = holds a token)
pub type Cell = Option<Token>;

/// Zero-based grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Input actions produced by the key map and consumed by the lane selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the lane cursor one lane to the left
    CursorLeft,
    /// Move the lane cursor one lane to the right
    CursorRight,
    /// Drop a token into the typed lane, or the cursor lane if nothing was typed
    Drop,
    /// Append a typed lane digit (0-9)
    Digit(u8),
    /// Remove the last typed digit
    Backspace,
    /// Start a new game
    Restart,
}

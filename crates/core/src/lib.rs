//! Core rules module - pure, deterministic, and testable
//!
//! This module contains the grid and the win detection. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same sequence of placements always yields the same outcome
//! - **Testable**: every rule is a plain function of grid contents
//! - **Portable**: can run in any environment (terminal, line prompt, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: `length x width` grid with gravity placement and column-fill checks
//! - [`win`]: run-length scan along four axes, reporting the winning tiles
//! - [`player`]: player name, tag and token
//! - [`error`]: placement errors
//!
//! # Game Rules
//!
//! - **Gravity**: a token always lands in the lowest empty cell of its lane
//! - **Lanes**: players pick lanes 1..=width; anything else is rejected
//! - **Win**: `k` same-colored tokens in a row horizontally, vertically or diagonally
//!
//! # Example
//!
//! ```
//! use connect_four_core::{Axis, Grid};
//! use connect_four_types::{Coord, Token};
//!
//! let mut grid = Grid::new(7, 6);
//! let red = Token::player_one();
//!
//! let mut last = Coord::new(0, 0);
//! for lane in 1..=4 {
//!     last = grid.place(red, lane).unwrap();
//! }
//!
//! let result = grid.check_win(last, 4);
//! assert!(result.won());
//! assert_eq!(result.axis(), Some(Axis::Horizontal));
//! assert_eq!(result.tiles().len(), 4);
//! ```

pub mod error;
pub mod grid;
pub mod player;
pub mod win;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use error::PlaceError;
pub use grid::Grid;
pub use player::Player;
pub use win::{check_win, Axis, WinResult, Window};

//! Turn engine: players, turn order, game status, configuration.
//!
//! The engine drives [`connect_four_core`] one placement at a time. It owns the
//! only grid and never blocks; input collection and rendering live in the
//! `input` and `term` crates.

pub mod config;
pub mod game;

pub use connect_four_core as core;
pub use connect_four_types as types;

pub use config::{ConfigError, ConfigOverrides, GameConfig};
pub use game::{Game, GameStatus, Placement, PlayError};

//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputAction`], turns those into
//! lane choices with [`LaneSelector`], and validates typed lanes for line-mode
//! play with [`parse_lane`].

pub mod handler;
pub mod lane;
pub mod map;

pub use connect_four_types as types;

pub use handler::LaneSelector;
pub use lane::{parse_lane, wants_rematch, LaneParseError};
pub use map::{map_key, should_quit};

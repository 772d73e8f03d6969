//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! libraries and renders into a framebuffer that is either flushed to an
//! alternate screen (key mode) or printed as styled lines (line mode).
//!
//! Goals:
//! - Keep `core` and `engine` free of I/O
//! - Box-drawing board with colored tokens and a highlighted winning run
//! - Cheap redraws by flushing only changed cells

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use connect_four_engine as engine;
pub use connect_four_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{game_over_hint, status_line, AnchorY, GameView, PromptView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, encode_lines_into, TerminalRenderer};

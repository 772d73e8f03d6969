//! Connect Four (workspace facade crate).
//!
//! Re-exports the workspace crates as `connect_four::{types,core,engine,input,term}`
//! so the binary, benches and integration tests share one import path.

pub use connect_four_core as core;
pub use connect_four_engine as engine;
pub use connect_four_input as input;
pub use connect_four_term as term;
pub use connect_four_types as types;

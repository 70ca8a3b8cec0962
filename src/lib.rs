//! Terminal falling-block puzzle (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core,engine,input,term,types}` and adds
//! the binary's configuration layer.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

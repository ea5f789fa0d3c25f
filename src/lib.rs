//! Tetris lineup manager (workspace facade crate).
//!
//! This package keeps the `tetris_lineup::{core, types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use tetris_lineup_core as core;
pub use tetris_lineup_types as types;

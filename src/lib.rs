use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod game;
mod log;
pub mod notation;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use game::{GameSession, MoveSelector, SessionConfig};
pub use types::{Cell, FlipSet, Move, MoveError, Score, Tile};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

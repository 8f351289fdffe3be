use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two tile colors. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Dark,
    Light,
}

impl Tile {
    pub fn opponent(self) -> Self {
        match self {
            Tile::Dark => Tile::Light,
            Tile::Light => Tile::Dark,
        }
    }

    /// Classic text symbol: `X` for dark, `O` for light.
    pub fn symbol(self) -> char {
        match self {
            Tile::Dark => 'X',
            Tile::Light => 'O',
        }
    }
}

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    pub fn holds(self, tile: Tile) -> bool {
        self == Cell::from(tile)
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Dark => Cell::Dark,
            Tile::Light => Cell::Light,
        }
    }
}

/// A board coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub col: u8,
    pub row: u8,
}

impl Move {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// Squares a candidate move would convert to the mover's color.
pub type FlipSet = Vec<Move>;

/// Tile counts of a board. `dark + light + empty` is always 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub dark: u8,
    pub light: u8,
    pub empty: u8,
}

impl Score {
    pub fn of(&self, tile: Tile) -> u8 {
        match tile {
            Tile::Dark => self.dark,
            Tile::Light => self.light,
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    OffBoard,
    Occupied,
    NoFlips,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalReason::OffBoard => "off the board",
            IllegalReason::Occupied => "already occupied",
            IllegalReason::NoFlips => "flips no tiles",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move at ({col}, {row}): {reason}")]
    IllegalMove {
        col: i32,
        row: i32,
        reason: IllegalReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("it is not the {0}'s turn")]
    NotYourTurn(&'static str),
    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Tile),
    #[error("computer selected an illegal move ({}, {})", .0.col, .0.row)]
    BadSelection(Move),
    #[error(transparent)]
    Illegal(#[from] MoveError),
}

/// Who takes the next turn in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Human,
    Computer,
}

impl Turn {
    pub fn other(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Turn::Human => "player",
            Turn::Computer => "computer",
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Flat board, index `row * 8 + col`; 0=empty, 1=dark, 2=light.
    pub board: Vec<u8>,
    pub turn: Turn,
    pub human_tile: Tile,
    pub score: Score,
    pub is_game_over: bool,
    pub show_hints: bool,
    /// Side that was skipped after the last move because it had no legal move.
    pub passed: Option<Turn>,
    /// Tiles flipped by the last move, kept when a pass follows it.
    pub flipped: Vec<Move>,
    pub last_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Tie,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Outcome,
    pub human: u8,
    pub computer: u8,
    pub margin: u8,
}

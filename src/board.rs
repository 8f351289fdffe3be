use std::fmt;

use once_cell::sync::Lazy;

use crate::types::{Cell, FlipSet, IllegalReason, Move, MoveError, Score, Tile};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Compass order N, NE, E, SE, S, SW, W, NW as `(d_col, d_row)`; row 0 is the top.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const CORNERS: [Move; 4] = [
    Move::new(0, 0),
    Move::new(0, 7),
    Move::new(7, 0),
    Move::new(7, 7),
];

/// Column-major scan order shared by enumeration and every tie-break.
static SCAN_ORDER: Lazy<Vec<Move>> = Lazy::new(|| {
    (0..BOARD_SIZE as u8)
        .flat_map(|col| (0..BOARD_SIZE as u8).map(move |row| Move::new(col, row)))
        .collect()
});

/// 8x8 Reversi grid, indexed `cells[col][row]`.
///
/// `Clone` yields a fully detached copy; speculative moves must be made on a
/// clone, never on the board owned by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with all 64 cells empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the starting position:
    /// dark at (3,3) and (4,4), light at (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Dark;
        board.cells[3][4] = Cell::Light;
        board.cells[4][3] = Cell::Light;
        board.cells[4][4] = Cell::Dark;
        board
    }

    /// Builds a board from eight rows of text, top row first.
    /// `X` is dark, `O` is light, space or `.` is empty.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != BOARD_SIZE {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[col][row] = match ch {
                    'X' => Cell::Dark,
                    'O' => Cell::Light,
                    ' ' | '.' => Cell::Empty,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    pub fn is_on_board(col: i32, row: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row)
    }

    pub fn is_corner(col: i32, row: i32) -> bool {
        CORNERS
            .iter()
            .any(|c| c.col as i32 == col && c.row as i32 == row)
    }

    /// Returns the cell at `(col, row)`, or `None` when off the board.
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        if Self::is_on_board(col, row) {
            Some(self.cells[col as usize][row as usize])
        } else {
            None
        }
    }

    /// Overwrites one cell. Off-board coordinates are ignored.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if Self::is_on_board(col, row) {
            self.cells[col as usize][row as usize] = cell;
        }
    }

    pub fn score(&self) -> Score {
        let mut score = Score {
            dark: 0,
            light: 0,
            empty: 0,
        };
        for column in &self.cells {
            for cell in column {
                match cell {
                    Cell::Dark => score.dark += 1,
                    Cell::Light => score.light += 1,
                    Cell::Empty => score.empty += 1,
                }
            }
        }
        score
    }

    /// Converts board to `[u8; 64]` indexed `row * 8 + col`,
    /// where 0=empty, 1=dark, 2=light.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for mv in SCAN_ORDER.iter() {
            out[mv.row as usize * BOARD_SIZE + mv.col as usize] =
                self.cells[mv.col as usize][mv.row as usize].to_u8();
        }
        out
    }

    /// Computes the tiles `tile` would flip by playing at `(col, row)`.
    ///
    /// Flips are grouped by direction in compass order, nearest first.
    /// An empty result is never returned: no flips means the move is illegal.
    pub fn evaluate_move(&self, tile: Tile, col: i32, row: i32) -> Result<FlipSet, MoveError> {
        let illegal = |reason| MoveError::IllegalMove { col, row, reason };

        match self.get(col, row) {
            None => return Err(illegal(IllegalReason::OffBoard)),
            Some(Cell::Empty) => {}
            Some(_) => return Err(illegal(IllegalReason::Occupied)),
        }

        let opponent = tile.opponent();
        let mut flips = FlipSet::new();

        for (dc, dr) in DIRECTIONS {
            let mut c = col + dc;
            let mut r = row + dr;
            let mut line = Vec::new();

            while let Some(cell) = self.get(c, r) {
                if cell.holds(opponent) {
                    line.push(Move::new(c as u8, r as u8));
                } else {
                    if cell.holds(tile) {
                        flips.extend_from_slice(&line);
                    }
                    break;
                }
                c += dc;
                r += dr;
            }
        }

        if flips.is_empty() {
            return Err(illegal(IllegalReason::NoFlips));
        }
        Ok(flips)
    }

    /// Places `tile` at `(col, row)` and flips captured tiles.
    /// Returns the flipped squares. An illegal move leaves the board unchanged.
    pub fn apply_move(&mut self, tile: Tile, col: i32, row: i32) -> Result<FlipSet, MoveError> {
        let flips = self.evaluate_move(tile, col, row)?;

        let cell = Cell::from(tile);
        self.cells[col as usize][row as usize] = cell;
        for mv in &flips {
            self.cells[mv.col as usize][mv.row as usize] = cell;
        }

        Ok(flips)
    }

    /// All legal moves for `tile` in column-major scan order.
    pub fn legal_moves(&self, tile: Tile) -> Vec<Move> {
        SCAN_ORDER
            .iter()
            .copied()
            .filter(|mv| self.evaluate_move(tile, mv.col as i32, mv.row as i32).is_ok())
            .collect()
    }

    pub fn has_legal_move(&self, tile: Tile) -> bool {
        SCAN_ORDER
            .iter()
            .any(|mv| self.evaluate_move(tile, mv.col as i32, mv.row as i32).is_ok())
    }

    /// True when neither color has a legal move.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Tile::Dark) && !self.has_legal_move(Tile::Light)
    }

    /// Text board with `.` on every legal move of `tile`.
    pub fn render_with_hints(&self, tile: Tile) -> String {
        let hints = self.legal_moves(tile);
        self.render(&hints)
    }

    fn render(&self, hints: &[Move]) -> String {
        let mut out = String::new();
        out.push_str("  12345678\n");
        out.push_str(" +--------+\n");
        for row in 0..BOARD_SIZE {
            out.push_str(&format!("{}|", row + 1));
            for col in 0..BOARD_SIZE {
                let ch = match self.cells[col][row] {
                    Cell::Dark => Tile::Dark.symbol(),
                    Cell::Light => Tile::Light.symbol(),
                    Cell::Empty if hints.contains(&Move::new(col as u8, row as u8)) => '.',
                    Cell::Empty => ' ',
                };
                out.push(ch);
            }
            out.push_str(&format!("|{}\n", row + 1));
        }
        out.push_str(" +--------+\n");
        out.push_str("  12345678\n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Squares in column-major scan order.
pub fn scan_order() -> &'static [Move] {
    &SCAN_ORDER
}

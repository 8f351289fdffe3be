use serde::Deserialize;

use crate::ai::CornerGreedySelector;
use crate::board::Board;
use crate::log::console_log;
use crate::types::{GameError, GameResult, GameState, Move, Outcome, Tile, Turn};

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, tile: Tile) -> Option<Move>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, tile: Tile) -> Option<Move> {
        board.legal_moves(tile).first().copied()
    }
}

/// Session settings supplied by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub human_tile: Tile,
    pub first_turn: Turn,
    pub show_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_tile: Tile::Dark,
            first_turn: Turn::Human,
            show_hints: false,
        }
    }
}

/// One human-versus-computer game. Owns the authoritative board.
pub struct GameSession {
    board: Board,
    human_tile: Tile,
    pub turn: Turn,
    pub show_hints: bool,
    pub is_game_over: bool,
    pub passed: Option<Turn>,
    pub flipped: Vec<Move>,
    pub last_move: Option<Move>,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(config: SessionConfig, selector: Box<dyn MoveSelector>) -> Self {
        console_log!(
            "new game: player is {}, {} goes first",
            config.human_tile.symbol(),
            config.first_turn.label()
        );
        Self {
            board: Board::new(),
            human_tile: config.human_tile,
            turn: config.first_turn,
            show_hints: config.show_hints,
            is_game_over: false,
            passed: None,
            flipped: Vec::new(),
            last_move: None,
            selector,
        }
    }

    pub fn new_with_default_selector(config: SessionConfig) -> Self {
        Self::new(config, Box::new(CornerGreedySelector))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_tile(&self) -> Tile {
        self.human_tile
    }

    pub fn computer_tile(&self) -> Tile {
        self.human_tile.opponent()
    }

    pub fn tile_for(&self, turn: Turn) -> Tile {
        match turn {
            Turn::Human => self.human_tile,
            Turn::Computer => self.computer_tile(),
        }
    }

    pub fn play_human(&mut self, col: i32, row: i32) -> Result<(), GameError> {
        self.ensure_turn(Turn::Human)?;
        self.apply_move(Turn::Human, col, row)
    }

    pub fn play_computer(&mut self) -> Result<Move, GameError> {
        self.ensure_turn(Turn::Computer)?;

        let tile = self.computer_tile();
        if !self.board.has_legal_move(tile) {
            return Err(GameError::NoLegalMoves(tile));
        }

        let selected = self
            .selector
            .select_move(&self.board, tile)
            .ok_or(GameError::NoLegalMoves(tile))?;
        if self
            .board
            .evaluate_move(tile, selected.col as i32, selected.row as i32)
            .is_err()
        {
            return Err(GameError::BadSelection(selected));
        }

        self.apply_move(Turn::Computer, selected.col as i32, selected.row as i32)?;
        Ok(selected)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_move(self.tile_for(self.turn))
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over {
            return Vec::new();
        }
        self.board.legal_moves(self.tile_for(self.turn))
    }

    fn pass(&mut self) {
        console_log!("{} has no legal moves and passes", self.turn.label());
        self.passed = Some(self.turn);
        self.turn = self.turn.other();
    }

    pub fn end_game(&mut self) {
        if !self.is_game_over {
            let score = self.board.score();
            console_log!("game over: X {} - O {}", score.dark, score.light);
        }
        self.is_game_over = true;
    }

    /// Ends the game when neither side can move, otherwise skips a side that cannot.
    pub fn advance(&mut self) {
        if self.is_game_over {
            return;
        }
        if self.board.is_terminal() {
            self.end_game();
        } else if !self.has_legal_moves_for_current() {
            self.pass();
        }
    }

    pub fn toggle_hints(&mut self) -> bool {
        self.show_hints = !self.show_hints;
        self.show_hints
    }

    /// Text board, with hint markers on the player's turn when hints are on.
    pub fn render(&self) -> String {
        if self.show_hints && self.turn == Turn::Human && !self.is_game_over {
            self.board.render_with_hints(self.human_tile)
        } else {
            self.board.to_string()
        }
    }

    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            human_tile: self.human_tile,
            score: self.board.score(),
            is_game_over: self.is_game_over,
            show_hints: self.show_hints,
            passed: self.passed,
            flipped: self.flipped.clone(),
            last_move: self.last_move,
        }
    }

    pub fn result(&self) -> GameResult {
        let score = self.board.score();
        let human = score.of(self.human_tile);
        let computer = score.of(self.computer_tile());
        GameResult {
            winner: if human > computer {
                Outcome::HumanWins
            } else if computer > human {
                Outcome::ComputerWins
            } else {
                Outcome::Tie
            },
            human,
            computer,
            margin: human.abs_diff(computer),
        }
    }

    fn ensure_turn(&self, turn: Turn) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.turn != turn {
            return Err(GameError::NotYourTurn(turn.label()));
        }
        Ok(())
    }

    fn apply_move(&mut self, turn: Turn, col: i32, row: i32) -> Result<(), GameError> {
        let tile = self.tile_for(turn);
        let flips = self.board.apply_move(tile, col, row)?;

        console_log!(
            "{} played {}{} flipping {}",
            turn.label(),
            col + 1,
            row + 1,
            flips.len()
        );

        self.passed = None;
        self.flipped = flips;
        self.last_move = Some(Move::new(col as u8, row as u8));
        self.turn = turn.other();
        self.advance();

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Turn) {
        self.board = board;
        self.turn = turn;
        self.is_game_over = false;
        self.passed = None;
        self.flipped.clear();
    }
}

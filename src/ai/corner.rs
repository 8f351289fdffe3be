use crate::board::Board;
use crate::game::MoveSelector;
use crate::types::{Move, Tile};

/// Two-tier computer policy: take a corner when one is available,
/// otherwise the move that leaves the computer with the most tiles.
///
/// Ties go to the first candidate in scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct CornerGreedySelector;

impl MoveSelector for CornerGreedySelector {
    fn select_move(&self, board: &Board, tile: Tile) -> Option<Move> {
        let moves = board.legal_moves(tile);
        if moves.is_empty() {
            return None;
        }

        if let Some(corner) = moves
            .iter()
            .find(|mv| Board::is_corner(mv.col as i32, mv.row as i32))
        {
            return Some(*corner);
        }

        let mut best: Option<(Move, u8)> = None;
        for mv in moves {
            let score = preview_score(board, tile, mv)?;
            if is_better_move(score, best) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }
}

/// Plays `mv` on a detached copy and returns `tile`'s resulting count.
fn preview_score(board: &Board, tile: Tile, mv: Move) -> Option<u8> {
    let mut preview = board.clone();
    preview
        .apply_move(tile, mv.col as i32, mv.row as i32)
        .ok()?;
    Some(preview.score().of(tile))
}

fn is_better_move(score: u8, best: Option<(Move, u8)>) -> bool {
    match best {
        None => true,
        Some((_, best_score)) => score > best_score,
    }
}

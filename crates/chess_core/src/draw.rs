//! Draw rules cozy-chess leaves to the caller.
//!
//! `Board::status` reports checkmate and stalemate; the fifty-move rule,
//! repetition and dead positions are checked here.

use cozy_chess::{Board, Piece, Square};

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_PLIES: u8 = 100;

pub fn is_fifty_move_draw(board: &Board) -> bool {
    board.halfmove_clock() >= FIFTY_MOVE_PLIES
}

/// Neither side can ever deliver mate.
///
/// Bare kings, a single minor piece, or any number of bishops that all
/// stand on one square colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !heavy.is_empty() {
        return false;
    }
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    if knights.len() + bishops.len() <= 1 {
        return true;
    }
    if !knights.is_empty() {
        return false;
    }
    let dark = bishops.into_iter().filter(|&sq| is_dark(sq)).count();
    dark == 0 || dark == bishops.len() as usize
}

fn is_dark(square: Square) -> bool {
    (square.file() as u8 + square.rank() as u8) % 2 == 0
}

/// Position hashes seen so far in a game, for threefold repetition.
#[derive(Debug, Clone, Default)]
pub struct RepetitionHistory {
    hashes: Vec<u64>,
}

impl RepetitionHistory {
    pub fn new(board: &Board) -> Self {
        Self {
            hashes: vec![board.hash()],
        }
    }

    pub fn push(&mut self, board: &Board) {
        self.hashes.push(board.hash());
    }

    /// How often the position `board` has occurred.
    pub fn count(&self, board: &Board) -> usize {
        let key = board.hash();
        self.hashes.iter().filter(|&&h| h == key).count()
    }

    pub fn is_threefold(&self, board: &Board) -> bool {
        self.count(board) >= 3
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

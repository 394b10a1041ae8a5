//! Material-only static evaluation.

use chess_core::cozy_chess::{Board, Color, Piece};

/// Centipawn values in `Piece` order: pawn, knight, bishop, rook, queen, king.
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Material balance from the side to move's point of view.
///
/// Positive is good for the side to move.
pub fn evaluate(board: &Board) -> i32 {
    let white = board.colors(Color::White);
    let black = board.colors(Color::Black);

    let mut score = 0i32;
    for piece in Piece::ALL {
        let value = PIECE_VALUES[piece as usize];
        let pieces = board.pieces(piece);
        let white_count = (pieces & white).len() as i32;
        let black_count = (pieces & black).len() as i32;
        score += value * (white_count - black_count);
    }

    match board.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

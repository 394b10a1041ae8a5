//! Attack queries on top of the cozy-chess attack tables.
//!
//! These work on a bare occupancy bitboard so they serve both a legal
//! `cozy_chess::Board` and a free-form [`Snapshot`](crate::Snapshot).

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Color, Piece, Square,
};

/// Squares attacked by `piece` of `color` standing on `square`.
///
/// Sliders stop at (and include) the first occupied square in each direction.
/// Pawns attack diagonally only; their pushes are not attacks.
pub fn piece_attacks(piece: Piece, color: Color, square: Square, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => get_pawn_attacks(square, color),
        Piece::Knight => get_knight_moves(square),
        Piece::Bishop => get_bishop_moves(square, occupied),
        Piece::Rook => get_rook_moves(square, occupied),
        Piece::Queen => get_bishop_moves(square, occupied) | get_rook_moves(square, occupied),
        Piece::King => get_king_moves(square),
    }
}

/// Squares holding a piece of `color` that attacks `square`.
///
/// `pieces` returns the squares occupied by `color`'s pieces of the given type.
/// Pins are ignored: a pinned piece still attacks.
pub fn attackers(
    square: Square,
    color: Color,
    occupied: BitBoard,
    mut pieces: impl FnMut(Piece) -> BitBoard,
) -> BitBoard {
    let queens = pieces(Piece::Queen);
    let diagonal = get_bishop_moves(square, occupied) & (pieces(Piece::Bishop) | queens);
    let orthogonal = get_rook_moves(square, occupied) & (pieces(Piece::Rook) | queens);

    // A pawn of `color` attacks `square` from where an enemy pawn on `square` would attack.
    let pawns = get_pawn_attacks(square, !color) & pieces(Piece::Pawn);
    let knights = get_knight_moves(square) & pieces(Piece::Knight);
    let kings = get_king_moves(square) & pieces(Piece::King);

    pawns | knights | diagonal | orthogonal | kings
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

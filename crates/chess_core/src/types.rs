use cozy_chess::{Board, Color, Move, Piece};

/// Spoken names of the piece types, in piece-type id order (pawn = 1 .. king = 6).
pub const PIECE_NAMES: [&str; 6] = ["pawn", "knight", "bishop", "rook", "queen", "king"];

pub fn piece_name(piece: Piece) -> &'static str {
    PIECE_NAMES[piece as usize]
}

/// Piece for a keypad piece-type id: pawn = 1, knight = 2, .. king = 6.
pub fn piece_from_id(id: u8) -> Option<Piece> {
    let idx = id.checked_sub(1)? as usize;
    Piece::ALL.get(idx).copied()
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Every legal move in `board`, in generation order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|piece_moves| {
        moves.extend(piece_moves);
        false
    });
    moves
}

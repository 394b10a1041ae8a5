//! Plain-English narration of moves.
//!
//! A move is named by its piece types ("queen takes rook") unless another
//! piece of the same kind could be confused with it, in which case the
//! square is spoken instead ("a5 takes rook", "e6 to f8").

use cozy_chess::{Move, Piece, Square};

use crate::{
    error::DescribeError,
    notation::standard_castling,
    oracle::BoardOracle,
    types::{piece_from_id, piece_name},
};

/// What a pass turn (the null move) is called.
pub const NULL_MOVE_PHRASE: &str = "pass turn";

const EN_PASSANT_SUFFIX: &str = " - pawn taken in passing";
const CASTLING_SUFFIX: &str = " - castling";
const CHECK_SUFFIX: &str = " - check";

/// Describe a ply that may be a pass.
pub fn describe_ply<B: BoardOracle + ?Sized>(
    board: &B,
    mv: Option<Move>,
) -> Result<String, DescribeError> {
    match mv {
        Some(mv) => describe(board, mv),
        None => Ok(NULL_MOVE_PHRASE.to_string()),
    }
}

/// Describe `mv` as played from `board`, the position before the move.
///
/// The board is only read. Fails if nothing stands on the origin square or
/// the promotion piece is a pawn or king.
pub fn describe<B: BoardOracle + ?Sized>(board: &B, mv: Move) -> Result<String, DescribeError> {
    if matches!(mv.promotion, Some(Piece::Pawn | Piece::King)) {
        return Err(DescribeError::MalformedMove(format!(
            "cannot promote to a {}",
            mv.promotion.map(piece_name).unwrap_or_default()
        )));
    }
    let castling = board.is_castling(mv);
    let mv = standard_castling(board, mv);

    let (_, mover) = board
        .piece_at(mv.from)
        .ok_or_else(|| DescribeError::InvalidMove {
            square: mv.from.to_string(),
        })?;
    let victim = board.piece_at(mv.to);
    let capture = board.is_capture(mv);

    let verb = match (mv.promotion, capture) {
        (Some(_), _) => "promotion to",
        (None, true) => "takes",
        (None, false) => "to",
    };

    let mut from_alias = piece_name(mover).to_string();
    let mut to_alias = match (mv.promotion, victim) {
        (Some(promoted), _) => piece_name(promoted).to_string(),
        (None, Some((_, piece))) => piece_name(piece).to_string(),
        (None, None) => String::new(),
    };

    if has_rival_attacker(board, mv.from, mv.to) {
        from_alias = mv.from.to_string();
    }
    // A quiet promotion keeps the piece it becomes; there is no victim to confuse.
    if has_rival_victim(board, mv.from, mv.to) && !(mv.promotion.is_some() && victim.is_none()) {
        to_alias = mv.to.to_string();
    }
    if let Some((_, piece)) = victim {
        let still_bare = from_alias == piece_name(mover) && to_alias == piece_name(piece);
        if still_bare && has_unrelated_duplicate_capture(board, mv.from, mv.to) {
            from_alias = mv.from.to_string();
        }
    }

    let mut phrase = format!("{from_alias} {verb} {to_alias}");
    if board.is_en_passant(mv) {
        phrase.push_str(EN_PASSANT_SUFFIX);
    }
    if castling {
        phrase.push_str(CASTLING_SUFFIX);
    }
    if board.gives_check(mv) {
        phrase.push_str(CHECK_SUFFIX);
    }
    Ok(phrase)
}

/// Another piece of the mover's kind and colour also attacks `target`.
///
/// A pawn pushing straight onto an empty square never counts: pushes are not
/// attacks, so no other pawn can be mistaken for it.
pub fn has_rival_attacker<B: BoardOracle + ?Sized>(board: &B, origin: Square, target: Square) -> bool {
    let Some((color, piece)) = board.piece_at(origin) else {
        return false;
    };
    if piece == Piece::Pawn && board.piece_at(target).is_none() && origin.file() == target.file() {
        return false;
    }
    board
        .attackers_of(target, color)
        .into_iter()
        .any(|sq| sq != origin && board.piece_at(sq) == Some((color, piece)))
}

/// The victim on `target` cannot be named by type alone.
///
/// True when `target` is empty, or when the mover also attacks another
/// piece of the victim's kind and colour from `origin`.
pub fn has_rival_victim<B: BoardOracle + ?Sized>(board: &B, origin: Square, target: Square) -> bool {
    let Some(victim) = board.piece_at(target) else {
        return true;
    };
    board
        .attacks_from(origin)
        .into_iter()
        .any(|sq| sq != target && board.piece_at(sq) == Some(victim))
}

/// A different piece of the mover's kind could capture another piece of the
/// victim's kind somewhere else on the board, so "queen takes knight" alone
/// would not say which capture was made.
pub fn has_unrelated_duplicate_capture<B: BoardOracle + ?Sized>(
    board: &B,
    origin: Square,
    target: Square,
) -> bool {
    let Some((color, piece)) = board.piece_at(target) else {
        return false;
    };
    board
        .squares_of(color, piece)
        .into_iter()
        .any(|sq| sq != target && has_rival_attacker(board, origin, sq))
}

/// Build a move from raw square indices and an optional piece-type id.
pub fn move_from_indices(from: u8, to: u8, promotion: Option<u8>) -> Result<Move, DescribeError> {
    let square = |idx: u8| {
        Square::try_index(usize::from(idx))
            .ok_or_else(|| DescribeError::MalformedMove(format!("square index {idx} is off the board")))
    };
    let promotion = match promotion {
        None => None,
        Some(id) => match piece_from_id(id) {
            Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(piece),
            _ => {
                return Err(DescribeError::MalformedMove(format!(
                    "piece id {id} is not a promotion piece"
                )))
            }
        },
    };
    Ok(Move {
        from: square(from)?,
        to: square(to)?,
        promotion,
    })
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod describe_tests;

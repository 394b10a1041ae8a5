//! UCI text, keypad digits and board rendering.

use cozy_chess::{Board, Color, File, Move, Piece, Square};

use crate::{
    error::{FenError, NotationError},
    oracle::BoardOracle,
    types::piece_from_id,
};

/// UCI spelling of the null move.
pub const NULL_MOVE_UCI: &str = "0000";

/// Format a move for humans and engines: castling is printed as the king's
/// two-file hop even though cozy-chess stores it as king-takes-rook.
pub fn move_to_uci(board: &impl BoardOracle, mv: Move) -> String {
    standard_castling(board, mv).to_string()
}

pub fn ply_to_uci(board: &impl BoardOracle, mv: Option<Move>) -> String {
    match mv {
        Some(mv) => move_to_uci(board, mv),
        None => NULL_MOVE_UCI.to_string(),
    }
}

/// Rewrite a king-onto-own-rook move as the king's destination square.
pub fn standard_castling<B: BoardOracle + ?Sized>(board: &B, mv: Move) -> Move {
    match (board.piece_at(mv.from), board.piece_at(mv.to)) {
        (Some((color, Piece::King)), Some((owner, Piece::Rook))) if color == owner => {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
                File::G
            } else {
                File::C
            };
            Move {
                from: mv.from,
                to: Square::new(file, mv.from.rank()),
                promotion: None,
            }
        }
        _ => mv,
    }
}

/// Syntactic UCI parse, case-insensitive. `Ok(None)` is the null move.
pub fn parse_uci(text: &str) -> Result<Option<Move>, NotationError> {
    let txt = text.trim().to_ascii_lowercase();
    if txt == NULL_MOVE_UCI {
        return Ok(None);
    }
    let unrecognized = || NotationError::Unrecognized(text.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(unrecognized());
    }
    let plain: Move = txt[..4].parse().map_err(|_| unrecognized())?;
    let Some(suffix) = txt[4..].chars().next() else {
        return Ok(Some(plain));
    };
    // cozy-chess drops a pawn or king promotion instead of rejecting it.
    match txt.parse::<Move>() {
        Ok(mv) if mv.promotion.is_some() => Ok(Some(mv)),
        _ => Err(NotationError::BadPromotion(suffix)),
    }
}

/// Parse UCI and match it against the legal moves of `board`.
///
/// Standard castling notation (`e1g1`) is mapped onto the cozy-chess
/// king-takes-rook encoding. The null move is returned as `Ok(None)`; whether
/// passing is allowed is the caller's decision.
pub fn resolve_uci(board: &Board, text: &str) -> Result<Option<Move>, NotationError> {
    let Some(mv) = parse_uci(text)? else {
        return Ok(None);
    };
    if board.is_legal(mv) {
        return Ok(Some(mv));
    }
    if let Some(castle) = castling_encoding(board, mv) {
        if board.is_legal(castle) {
            return Ok(Some(castle));
        }
    }
    Err(NotationError::Illegal(text.trim().to_string()))
}

fn castling_encoding(board: &Board, mv: Move) -> Option<Move> {
    let color = board.color_on(mv.from)?;
    if board.piece_on(mv.from)? != Piece::King
        || mv.from.rank() != mv.to.rank()
        || mv.promotion.is_some()
    {
        return None;
    }
    let rights = board.castle_rights(color);
    let rook_file = match (mv.to.file() as i8) - (mv.from.file() as i8) {
        2 => rights.short?,
        -2 => rights.long?,
        _ => return None,
    };
    Some(Move {
        from: mv.from,
        to: Square::new(rook_file, mv.from.rank()),
        promotion: None,
    })
}

/// Turn keypad input into UCI.
///
/// Already-UCI text passes through. Four digits are file/rank pairs
/// (`"5254"` is `e2e4`); a fifth digit is the promotion piece id
/// (`"87885"` is `h7h8q`). `"0000"` is the null move.
pub fn decode_keypad(text: &str) -> Result<String, NotationError> {
    let txt = text.trim();
    let bytes = txt.as_bytes();
    if !(4..=5).contains(&bytes.len()) {
        return Err(NotationError::Unrecognized(text.to_string()));
    }

    let looks_uci = bytes[0].is_ascii_alphabetic()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_alphabetic()
        && bytes[3].is_ascii_digit();
    if looks_uci {
        return Ok(txt.to_ascii_lowercase());
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(NotationError::Unrecognized(text.to_string()));
    }
    if txt == NULL_MOVE_UCI {
        return Ok(txt.to_string());
    }

    let mut uci = String::with_capacity(5);
    for (i, &b) in bytes.iter().enumerate() {
        let n = b - b'0';
        match i {
            4 => {
                let piece = piece_from_id(n)
                    .filter(|p| matches!(p, Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen))
                    .ok_or(NotationError::BadPromotion(b as char))?;
                uci.push(char::from(piece));
            }
            _ if !(1..=8).contains(&n) => return Err(NotationError::BadDigit { digit: b as char }),
            0 | 2 => uci.push(char::from(File::index(usize::from(n - 1)))),
            _ => uci.push(b as char),
        }
    }
    Ok(uci)
}

/// Normalise FEN to the six fields cozy-chess requires by filling in move counters.
pub fn fen_with_clocks(fen: &str) -> String {
    let fields = fen.split_whitespace().count();
    let mut out = fen.split_whitespace().collect::<Vec<_>>().join(" ");
    if fields == 4 {
        out.push_str(" 0 1");
    } else if fields == 5 {
        out.push_str(" 1");
    }
    out
}

pub fn board_from_fen(fen: &str) -> Result<Board, FenError> {
    Board::from_fen(&fen_with_clocks(fen), false).map_err(|e| FenError::Rejected(format!("{e:?}")))
}

/// ASCII board, rank 8 at the top; white pieces upper case, empty squares `.`.
pub fn render_board(board: &impl BoardOracle) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let square = Square::ALL[(rank * 8 + file) as usize];
            let ch = match board.piece_at(square) {
                Some((Color::White, piece)) => char::from(piece).to_ascii_uppercase(),
                Some((Color::Black, piece)) => char::from(piece),
                None => '.',
            };
            out.push(ch);
            if file < 7 {
                out.push(' ');
            }
        }
        if rank > 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;

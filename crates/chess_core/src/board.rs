use cozy_chess::{BitBoard, Color, File, Move, Piece, Rank, Square};

use crate::{error::FenError, oracle::BoardOracle};

/// Piece placement plus the little state move narration needs.
///
/// Unlike `cozy_chess::Board` this does not insist on a legal position:
/// missing kings or pawns on the back rank are fine, which lets puzzle and
/// test positions be described as well as real games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    board: [Option<(Color, Piece)>; 64],
    side_to_move: Color,
    en_passant: Option<Square>,
}

impl Snapshot {
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            board: [None; 64],
            side_to_move,
            en_passant: None,
        }
    }

    /// Lenient Forsyth-Edwards Notation parser.
    ///
    /// Placement, side to move, castling and en passant fields are required;
    /// the move counters may be omitted. The castling field is checked for
    /// syntax only: castling is recognised from where the king and rooks
    /// stand, not from rights.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let board_part = parts.next().ok_or(FenError::MissingField("placement"))?;
        let stm_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
        let castle_part = parts.next().ok_or(FenError::MissingField("castling"))?;
        let ep_part = parts.next().ok_or(FenError::MissingField("en passant"))?;
        for counter in parts.take(2) {
            counter
                .parse::<u32>()
                .map_err(|_| FenError::BadCounter(counter.to_string()))?;
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadSide(stm_part.to_string())),
        };
        let mut snapshot = Self::empty(side_to_move);

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRank {
                rank: ranks.len(),
                reason: "expected 8 ranks".to_string(),
            });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 .. 1
            let rank = 7 - rank_idx as u8;
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as u8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = match ch.to_ascii_lowercase() {
                        'p' => Piece::Pawn,
                        'n' => Piece::Knight,
                        'b' => Piece::Bishop,
                        'r' => Piece::Rook,
                        'q' => Piece::Queen,
                        'k' => Piece::King,
                        _ => return Err(FenError::BadPiece(ch)),
                    };
                    let file_idx = File::try_index(usize::from(file)).ok_or_else(|| FenError::BadRank {
                        rank: rank as usize + 1,
                        reason: "too many files".to_string(),
                    })?;
                    let square = Square::new(file_idx, Rank::index(usize::from(rank)));
                    snapshot.set(square, Some((color, piece)));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRank {
                        rank: rank as usize + 1,
                        reason: "too many files".to_string(),
                    });
                }
            }
            if file != 8 {
                return Err(FenError::BadRank {
                    rank: rank as usize + 1,
                    reason: "not enough files".to_string(),
                });
            }
        }

        let castling_ok = castle_part == "-"
            || castle_part
                .chars()
                .all(|c| matches!(c, 'K' | 'Q' | 'k' | 'q' | 'A'..='H' | 'a'..='h'));
        if !castling_ok {
            return Err(FenError::BadCastling(castle_part.to_string()));
        }

        if ep_part != "-" {
            let square = ep_part
                .parse::<Square>()
                .map_err(|_| FenError::BadEnPassant(ep_part.to_string()))?;
            snapshot.en_passant = Some(square);
        }

        Ok(snapshot)
    }

    /// Copy any oracle's visible state into an owned snapshot.
    pub fn capture<B: BoardOracle + ?Sized>(oracle: &B) -> Self {
        let mut snapshot = Self::empty(oracle.side_to_move());
        for square in Square::ALL {
            snapshot.set(square, oracle.piece_at(square));
        }
        snapshot.en_passant = oracle.en_passant_square();
        snapshot
    }

    pub fn set(&mut self, square: Square, piece: Option<(Color, Piece)>) {
        self.board[square as usize] = piece;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(color, Piece::King).into_iter().next()
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => !self.attackers_of(king, !color).is_empty(),
            None => false,
        }
    }

    /// Play `mv` without any legality checks.
    ///
    /// Handles en passant removal, the castling rook hop (both the two-file
    /// and the king-onto-rook encodings) and promotion. Moves from an empty
    /// square leave the snapshot unchanged.
    pub fn apply(&mut self, mv: Move) {
        let Some((color, piece)) = self.board[mv.from as usize] else {
            return;
        };
        let en_passant = self.en_passant.take();
        self.side_to_move = !color;

        if piece == Piece::King && self.is_castling(mv) {
            let back_rank = mv.from.rank();
            let kingside = (mv.to.file() as u8) > (mv.from.file() as u8);
            let (corner, king_file, rook_file) = if kingside {
                (File::H, File::G, File::F)
            } else {
                (File::A, File::C, File::D)
            };
            let rook_from = [mv.to, Square::new(corner, back_rank)]
                .into_iter()
                .find(|&sq| self.board[sq as usize] == Some((color, Piece::Rook)));
            self.set(mv.from, None);
            if let Some(rook_from) = rook_from {
                self.set(rook_from, None);
                self.set(Square::new(rook_file, back_rank), Some((color, Piece::Rook)));
            }
            self.set(Square::new(king_file, back_rank), Some((color, Piece::King)));
            return;
        }

        if piece == Piece::Pawn && Some(mv.to) == en_passant && mv.from.file() != mv.to.file() {
            // The captured pawn sits beside the mover, not on the target square.
            self.set(Square::new(mv.to.file(), mv.from.rank()), None);
        }

        let from_rank = mv.from.rank() as u8;
        let to_rank = mv.to.rank() as u8;
        if piece == Piece::Pawn && from_rank.abs_diff(to_rank) == 2 {
            let middle = Rank::ALL[((from_rank + to_rank) / 2) as usize];
            self.en_passant = Some(Square::new(mv.from.file(), middle));
        }

        self.set(mv.from, None);
        self.set(mv.to, Some((color, mv.promotion.unwrap_or(piece))));
    }
}

impl BoardOracle for Snapshot {
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.board[square as usize]
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    fn occupied(&self) -> BitBoard {
        Square::ALL
            .into_iter()
            .filter(|&sq| self.board[sq as usize].is_some())
            .fold(BitBoard::EMPTY, |bb, sq| bb | sq.bitboard())
    }

    fn squares_of(&self, color: Color, piece: Piece) -> BitBoard {
        Square::ALL
            .into_iter()
            .filter(|&sq| self.board[sq as usize] == Some((color, piece)))
            .fold(BitBoard::EMPTY, |bb, sq| bb | sq.bitboard())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

//! The read-only board queries the move describer is written against.

use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

use crate::{attacks, board::Snapshot};

/// Read-only view of a position.
///
/// Implementors supply piece placement, side to move and the en passant
/// target; attack and move-flag queries are derived from those.
pub trait BoardOracle {
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)>;

    fn side_to_move(&self) -> Color;

    /// Square a pawn may capture onto en passant, if any.
    fn en_passant_square(&self) -> Option<Square>;

    fn occupied(&self) -> BitBoard;

    fn squares_of(&self, color: Color, piece: Piece) -> BitBoard;

    /// Squares attacked by whatever stands on `square` (empty set if nothing does).
    fn attacks_from(&self, square: Square) -> BitBoard {
        match self.piece_at(square) {
            Some((color, piece)) => attacks::piece_attacks(piece, color, square, self.occupied()),
            None => BitBoard::EMPTY,
        }
    }

    /// Squares holding a `color` piece that attacks `square`.
    fn attackers_of(&self, square: Square, color: Color) -> BitBoard {
        attacks::attackers(square, color, self.occupied(), |piece| {
            self.squares_of(color, piece)
        })
    }

    fn is_en_passant(&self, mv: Move) -> bool {
        matches!(self.piece_at(mv.from), Some((_, Piece::Pawn)))
            && self.en_passant_square() == Some(mv.to)
            && mv.from.file() != mv.to.file()
            && self.piece_at(mv.to).is_none()
    }

    fn is_capture(&self, mv: Move) -> bool {
        let Some((mover, _)) = self.piece_at(mv.from) else {
            return false;
        };
        match self.piece_at(mv.to) {
            Some((victim, _)) => victim != mover,
            None => self.is_en_passant(mv),
        }
    }

    /// The king-onto-own-rook form cozy-chess uses, or a two-file king hop
    /// towards a corner that holds one of its own rooks.
    fn is_castling(&self, mv: Move) -> bool {
        let Some((color, Piece::King)) = self.piece_at(mv.from) else {
            return false;
        };
        if mv.from.rank() != mv.to.rank() {
            return false;
        }
        match self.piece_at(mv.to) {
            Some((owner, Piece::Rook)) => owner == color,
            Some(_) => false,
            None => {
                let corner = match mv.to.file() as i8 - mv.from.file() as i8 {
                    2 => File::H,
                    -2 => File::A,
                    _ => return false,
                };
                self.piece_at(Square::new(corner, mv.from.rank())) == Some((color, Piece::Rook))
            }
        }
    }

    /// Whether playing `mv` leaves the opponent's king attacked.
    ///
    /// Plays the move on a private [`Snapshot`]; `self` is never touched.
    fn gives_check(&self, mv: Move) -> bool {
        let Some((color, _)) = self.piece_at(mv.from) else {
            return false;
        };
        let mut after = Snapshot::capture(self);
        after.apply(mv);
        after.in_check(!color)
    }
}

impl BoardOracle for Board {
    fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        let piece = self.piece_on(square)?;
        let color = self.color_on(square)?;
        Some((color, piece))
    }

    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    fn en_passant_square(&self) -> Option<Square> {
        let file: File = self.en_passant()?;
        let rank = match Board::side_to_move(self) {
            Color::White => Rank::Sixth,
            Color::Black => Rank::Third,
        };
        Some(Square::new(file, rank))
    }

    fn occupied(&self) -> BitBoard {
        Board::occupied(self)
    }

    fn squares_of(&self, color: Color, piece: Piece) -> BitBoard {
        self.colored_pieces(color, piece)
    }
}

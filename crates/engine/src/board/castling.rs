use crate::types::*;
use super::Board;

/// Where the king and rook land after a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_to: Square,
    pub rook_to: Square,
}

impl CastleSquares {
    /// Landing squares for a king at `king_from` castling with the rook at
    /// `rook_from`. The king always travels two files toward the rook and the
    /// rook lands on the file next to the king's origin, on the rook's side.
    ///
    /// Distance 4 is the queenside pattern, distance 3 the kingside one; any
    /// other geometry is not a castle.
    pub fn for_move(king_from: Square, rook_from: Square) -> Option<Self> {
        if king_from.row != rook_from.row {
            return None;
        }

        let distance = (rook_from.col - king_from.col).abs();
        if distance != 3 && distance != 4 {
            return None;
        }

        let dir = (rook_from.col - king_from.col).signum();
        Some(Self {
            king_to: king_from.offset(0, 2 * dir),
            rook_to: king_from.offset(0, dir),
        })
    }

    /// The square the king crosses on its way to `king_to`.
    pub fn king_path(&self, king_from: Square) -> Square {
        let dir = (self.king_to.col - king_from.col).signum();
        king_from.offset(0, dir)
    }
}

impl Board {
    /// Relocate `king` (already lifted from `from`, or still standing there)
    /// and the rook standing on `to`.
    ///
    /// Returns the landing squares, or `None` if the squares do not describe
    /// a castle, in which case the board is untouched.
    pub fn castle(&mut self, king: Piece, from: Square, to: Square) -> Option<CastleSquares> {
        let squares = CastleSquares::for_move(from, to)?;

        let rook = self.remove(to)?;
        if self.get(from) == Some(king) {
            self.remove(from);
        }

        self.set(squares.king_to, king);
        self.set(squares.rook_to, rook);
        Some(squares)
    }

    /// Undo [`Board::castle`]: put the king back on `from` and the rook on `to`.
    pub fn uncastle(&mut self, from: Square, to: Square, squares: CastleSquares) {
        let king = self.remove(squares.king_to);
        let rook = self.remove(squares.rook_to);
        self.put(from, king);
        self.put(to, rook);
    }
}

use crate::types::*;
// Declare submodules
pub mod castling;
pub mod debug;

pub use castling::CastleSquares;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    fn setup_starting_position(&mut self) {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            // Black pieces (row 0) and pawns (row 1)
            self.set(Square::new(0, col), Piece::new(Color::Black, kind));
            self.set(Square::new(1, col), Piece::new(Color::Black, PieceKind::Pawn));

            // White pawns (row 6) and pieces (row 7)
            self.set(Square::new(6, col), Piece::new(Color::White, PieceKind::Pawn));
            self.set(Square::new(7, col), Piece::new(Color::White, kind));
        }
    }

    /// Restore the standard initial layout.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        self.setup_starting_position();
    }

    pub fn is_valid(&self, square: Square) -> bool {
        square.is_valid()
    }

    // Basic board operations
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        if square.is_valid() {
            self.squares[square.row as usize][square.col as usize] = Some(piece);
        }
    }

    /// Place `piece` or clear the square when `None`.
    pub fn put(&mut self, square: Square, piece: Option<Piece>) {
        match piece {
            Some(piece) => self.set(square, piece),
            None => {
                self.remove(square);
            }
        }
    }

    /// Clear a square, returning its prior occupant.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize].take()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True when `square` holds a piece of `color`.
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color == color)
    }

    /// All pieces of `color` with their squares, row by row.
    pub fn pieces(&self, color: Color) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|square| match self.get(square) {
                Some(piece) if piece.color == color => Some((square, piece)),
                _ => None,
            })
            .collect()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&square| {
            matches!(self.get(square), Some(piece) if piece.is(color, PieceKind::King))
        })
    }

    /// Parse the piece-placement field of a FEN string. The first rank
    /// string describes row 0 (black's back rank).
    pub fn from_placement(placement: &str) -> Result<Self, String> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err("Invalid piece placement: must have 8 ranks".to_string());
        }

        let mut board = Self::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u32;

            for ch in row_str.chars() {
                if let Some(empty_squares) = ch.to_digit(10) {
                    col += empty_squares;
                } else {
                    if col >= 8 {
                        return Err(format!("Too many pieces in rank {}", row_str));
                    }
                    let piece = Piece::from_char(ch).ok_or_else(|| format!("Unknown piece: {}", ch))?;
                    board.set(Square::new(row as i8, col as i8), piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(format!("Incomplete rank: {}", row_str));
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

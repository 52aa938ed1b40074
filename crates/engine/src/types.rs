use std::fmt;

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// Coordinates are signed so that offset arithmetic can step off the board;
/// use [`Square::is_valid`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn offset(&self, dr: i8, dc: i8) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Translate a pointer position relative to the board's top-left corner.
    pub fn from_pixel(x: f32, y: f32, square_size: f32) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() || square_size <= 0.0 {
            return None;
        }
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = (x / square_size) as i32;
        let row = (y / square_size) as i32;

        if row < 8 && col < 8 {
            Some(Self::new(row as i8, col as i8))
        } else {
            None
        }
    }

    /// Iterate all 64 on-board squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = (b'a' + self.col as u8) as char;
            let rank = 8 - self.row;
            write!(f, "{}{}", file, rank)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may be promoted to.
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is(&self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// FEN-style character: uppercase for white, lowercase for black.
    pub fn to_char(&self) -> char {
        let ch = self.kind.letter();
        match self.color {
            Color::White => ch,
            Color::Black => ch.to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{}{}", color, self.kind.letter())
    }
}

/// Per-color castling flags. A flag is cleared for good the first time that
/// color's king or one of its rooks moves, or the color castles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: bool,
    pub black: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white: true,
        black: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white: false,
        black: false,
    };

    pub fn has(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn revoke(&mut self, color: Color) {
        match color {
            Color::White => self.white = false,
            Color::Black => self.black = false,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal(Piece),
    Castle,
    PawnPromotion(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    pub player: Color,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Normal(piece) => {
                write!(f, "{} {}-{}", piece, self.from, self.to)?;
                if let Some(captured) = self.captured {
                    write!(f, " x{}", captured)?;
                }
                Ok(())
            }
            MoveKind::Castle => write!(f, "castle {}-{}", self.from, self.to),
            MoveKind::PawnPromotion(kind) => write!(f, "{}={}", self.to, kind.letter()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Check(Color),     // Which color is in check
    Checkmate(Color), // Which color is checkmated (other color wins)
    Draw,             // Stalemate
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_validity() {
        for row in -3..11 {
            for col in -3..11 {
                let square = Square::new(row, col);
                let expected = (0..=7).contains(&row) && (0..=7).contains(&col);
                assert_eq!(square.is_valid(), expected, "square {:?}", square);
            }
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_from_pixel() {
        assert_eq!(Square::from_pixel(0.0, 0.0, 60.0), Some(Square::new(0, 0)));
        assert_eq!(Square::from_pixel(479.0, 61.0, 60.0), Some(Square::new(1, 7)));
        assert_eq!(Square::from_pixel(480.0, 10.0, 60.0), None);
        assert_eq!(Square::from_pixel(-1.0, 10.0, 60.0), None);
        assert_eq!(Square::from_pixel(f32::NAN, 10.0, 60.0), None);
        assert_eq!(Square::from_pixel(10.0, 10.0, 0.0), None);
    }

    #[test]
    fn test_piece_chars() {
        let piece = Piece::from_char('q').unwrap();
        assert_eq!(piece, Piece::new(Color::Black, PieceKind::Queen));
        assert_eq!(piece.to_char(), 'q');
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).to_string(), "wN");
        assert!(Piece::from_char('x').is_none());
    }

    #[test]
    fn test_square_names() {
        assert_eq!(Square::new(7, 4).to_string(), "e1");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
    }

    #[test]
    fn test_castling_rights_revoke() {
        let mut rights = CastlingRights::default();
        rights.revoke(Color::Black);
        assert!(rights.has(Color::White));
        assert!(!rights.has(Color::Black));
    }
}

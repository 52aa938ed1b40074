use std::collections::HashMap;

use engine::{Color, Piece, PieceKind};

const DEFAULT_GLYPHS: [(Color, PieceKind, &str); 12] = [
    (Color::White, PieceKind::King, "♔"),
    (Color::White, PieceKind::Queen, "♕"),
    (Color::White, PieceKind::Rook, "♖"),
    (Color::White, PieceKind::Bishop, "♗"),
    (Color::White, PieceKind::Knight, "♘"),
    (Color::White, PieceKind::Pawn, "♙"),
    (Color::Black, PieceKind::King, "♚"),
    (Color::Black, PieceKind::Queen, "♛"),
    (Color::Black, PieceKind::Rook, "♜"),
    (Color::Black, PieceKind::Bishop, "♝"),
    (Color::Black, PieceKind::Knight, "♞"),
    (Color::Black, PieceKind::Pawn, "♟"),
];

/// One drawable glyph per piece identity.
#[derive(Debug, Clone)]
pub struct PieceGlyphs {
    glyphs: HashMap<Piece, &'static str>,
}

impl PieceGlyphs {
    pub fn load() -> Result<Self, String> {
        Self::from_entries(&DEFAULT_GLYPHS)
    }

    /// Build the table, failing if any of the 12 pieces has no glyph.
    pub fn from_entries(entries: &[(Color, PieceKind, &'static str)]) -> Result<Self, String> {
        let glyphs: HashMap<Piece, &'static str> = entries
            .iter()
            .filter(|(_, _, glyph)| !glyph.is_empty())
            .map(|&(color, kind, glyph)| (Piece::new(color, kind), glyph))
            .collect();

        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                if !glyphs.contains_key(&piece) {
                    return Err(format!("Missing piece glyph for {}", piece));
                }
            }
        }

        Ok(Self { glyphs })
    }

    pub fn get(&self, piece: Piece) -> &'static str {
        self.glyphs.get(&piece).copied().unwrap_or("?")
    }
}

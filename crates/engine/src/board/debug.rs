use std::fmt;

use crate::types::*;
use super::Board;

impl Board {
    /// FEN piece-placement field for the current position.
    pub fn placement(&self) -> String {
        let mut rows = Vec::with_capacity(8);
        for row in 0..8 {
            let mut row_str = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.get(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            row_str.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row_str.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row_str.push_str(&empty.to_string());
            }
            rows.push(row_str);
        }
        rows.join("/")
    }
}

/// ASCII diagram, black's back rank on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let ch = self
                    .get(Square::new(row, col))
                    .map(|piece| piece.to_char())
                    .unwrap_or('.');
                write!(f, "{}", ch)?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

use crate::board::{Board, CastleSquares};
use crate::types::*;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A fully legal move: the piece's movement rule allows it and the mover's
/// king is not left attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

/// Read-only legality checks over a board.
///
/// The validator never mutates the board it borrows; "what if" questions are
/// answered on clones.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
    castling: CastlingRights,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a Board, castling: CastlingRights) -> Self {
        Self { board, castling }
    }

    /// Movement-rule legality of `piece` going from `from` to `to`.
    ///
    /// `piece` is passed explicitly because the engine lifts a selected piece
    /// off the board before validating, so `from` may be empty.
    pub fn is_valid_move(&self, piece: Piece, from: Square, to: Square) -> bool {
        if !to.is_valid() || from == to {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => self.is_valid_pawn_move(piece.color, from, to),
            PieceKind::Knight => self.is_valid_knight_move(piece.color, from, to),
            PieceKind::Bishop => self.is_valid_bishop_move(piece.color, from, to),
            PieceKind::Rook => self.is_valid_rook_move(piece.color, from, to),
            PieceKind::Queen => {
                self.is_valid_bishop_move(piece.color, from, to)
                    || self.is_valid_rook_move(piece.color, from, to)
            }
            PieceKind::King => self.is_valid_king_move(piece.color, from, to),
        }
    }

    fn is_valid_pawn_move(&self, color: Color, from: Square, to: Square) -> bool {
        let direction = color.forward();
        let col_diff = (to.col - from.col).abs();
        let row_diff = to.row - from.row;

        // Diagonal capture
        if col_diff == 1 && row_diff == direction {
            return self.board.is_color(to, color.opposite());
        }

        if col_diff != 0 || !self.board.is_empty(to) {
            return false;
        }

        if row_diff == direction {
            return true;
        }

        // Double step from the start row, intermediate square must be empty
        row_diff == 2 * direction
            && from.row == color.pawn_start_row()
            && self.board.is_empty(from.offset(direction, 0))
    }

    fn is_valid_knight_move(&self, color: Color, from: Square, to: Square) -> bool {
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        KNIGHT_OFFSETS.contains(&(dr, dc)) && self.is_open_to(color, to)
    }

    fn is_valid_bishop_move(&self, color: Color, from: Square, to: Square) -> bool {
        let dr = (to.row - from.row).abs();
        let dc = (to.col - from.col).abs();
        dr == dc && dr != 0 && self.is_path_clear(color, from, to)
    }

    fn is_valid_rook_move(&self, color: Color, from: Square, to: Square) -> bool {
        let straight = (from.row == to.row) != (from.col == to.col);
        straight && self.is_path_clear(color, from, to)
    }

    fn is_valid_king_move(&self, color: Color, from: Square, to: Square) -> bool {
        if self.is_castle_request(color, from, to) {
            return self.can_castle(color, from, to);
        }

        let dr = to.row - from.row;
        let dc = to.col - from.col;
        KING_OFFSETS.contains(&(dr, dc)) && self.is_open_to(color, to)
    }

    /// Destination empty or held by the other color.
    fn is_open_to(&self, color: Color, to: Square) -> bool {
        match self.board.get(to) {
            None => true,
            Some(occupant) => occupant.color != color,
        }
    }

    /// First occupied square strictly between `from` and `to` along a
    /// straight or diagonal line.
    fn first_blocker(&self, from: Square, to: Square) -> Option<Square> {
        let dr = (to.row - from.row).signum();
        let dc = (to.col - from.col).signum();
        let mut square = from.offset(dr, dc);

        while square != to && square.is_valid() {
            if !self.board.is_empty(square) {
                return Some(square);
            }
            square = square.offset(dr, dc);
        }
        None
    }

    /// Sliding-piece path rule: nothing strictly between, and the only
    /// occupant allowed on the destination is an enemy (a capture).
    fn is_path_clear(&self, color: Color, from: Square, to: Square) -> bool {
        self.first_blocker(from, to).is_none() && self.is_open_to(color, to)
    }

    /// A king moved onto one of its own rooks asks to castle with it.
    pub fn is_castle_request(&self, color: Color, from: Square, to: Square) -> bool {
        matches!(self.board.get(to), Some(piece) if piece.is(color, PieceKind::Rook))
            && CastleSquares::for_move(from, to).is_some()
    }

    fn can_castle(&self, color: Color, from: Square, to: Square) -> bool {
        if !self.castling.has(color) {
            return false;
        }

        let Some(squares) = CastleSquares::for_move(from, to) else {
            return false;
        };

        if self.first_blocker(from, to).is_some() {
            return false;
        }

        // Not out of check, not across an attacked square. The landing square
        // goes through the same king-safety test as any other move.
        let king = Piece::new(color, PieceKind::King);
        let mut standing = self.board.clone();
        standing.set(from, king);
        if !self.with_board(&standing).king_is_safe(color) {
            return false;
        }

        let mut crossing = standing;
        crossing.remove(from);
        crossing.set(squares.king_path(from), king);
        self.with_board(&crossing).king_is_safe(color)
    }

    fn with_board<'b>(&self, board: &'b Board) -> MoveValidator<'b> {
        MoveValidator::new(board, self.castling)
    }

    /// True when some piece of `attacker` can move onto the opposing king.
    pub fn attacks_king(&self, attacker: Color) -> bool {
        let Some(king_square) = self.board.king_square(attacker.opposite()) else {
            return false;
        };

        self.board
            .pieces(attacker)
            .into_iter()
            .any(|(square, piece)| self.is_valid_move(piece, square, king_square))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.attacks_king(color.opposite())
    }

    /// True when no opposing piece can reach `color`'s king.
    pub fn king_is_safe(&self, color: Color) -> bool {
        !self.attacks_king(color.opposite())
    }

    /// The board after `piece` goes from `from` to `to`, castling included.
    pub fn simulate(&self, piece: Piece, from: Square, to: Square) -> Board {
        let mut next = self.board.clone();
        if piece.kind == PieceKind::King && self.is_castle_request(piece.color, from, to) {
            next.castle(piece, from, to);
        } else {
            next.remove(from);
            next.set(to, piece);
        }
        next
    }

    /// Movement rule plus king safety.
    pub fn is_legal_move(&self, piece: Piece, from: Square, to: Square) -> bool {
        if !self.is_valid_move(piece, from, to) {
            return false;
        }

        let next = self.simulate(piece, from, to);
        self.with_board(&next).king_is_safe(piece.color)
    }

    /// Every legal destination of `piece` standing (or lifted) at `from`.
    pub fn legal_destinations(&self, piece: Piece, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal_move(piece, from, to))
            .collect()
    }

    /// Every legal move of `color`: each of its pieces against all 64 squares.
    pub fn all_legal_moves(&self, color: Color) -> Vec<LegalMove> {
        self.board
            .pieces(color)
            .into_iter()
            .flat_map(|(from, piece)| {
                self.legal_destinations(piece, from)
                    .into_iter()
                    .map(move |to| LegalMove { from, to, piece })
            })
            .collect()
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.board.pieces(color).into_iter().any(|(from, piece)| {
            Square::all().any(|to| self.is_legal_move(piece, from, to))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn piece_at(board: &Board, square: Square) -> Piece {
        board.get(square).unwrap()
    }

    fn reachable(board: &Board, from: Square) -> Vec<Square> {
        let validator = MoveValidator::new(board, CastlingRights::ALL);
        let piece = piece_at(board, from);
        Square::all()
            .filter(|&to| validator.is_valid_move(piece, from, to))
            .collect()
    }

    #[test]
    fn test_off_board_and_same_square_rejected() {
        let board = Board::new();
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let queen = Piece::new(Color::White, PieceKind::Queen);

        assert!(!validator.is_valid_move(queen, sq(4, 4), sq(8, 4)));
        assert!(!validator.is_valid_move(queen, sq(4, 4), sq(-1, 1)));
        assert!(!validator.is_valid_move(queen, sq(4, 4), sq(4, 4)));
    }

    #[test]
    fn test_knight_edge_clipping() {
        let mut board = Board::empty();
        board.set(sq(1, 0), Piece::new(Color::White, PieceKind::Knight));

        let mut moves = reachable(&board, sq(1, 0));
        moves.sort_by_key(|s| (s.row, s.col));
        assert_eq!(moves, vec![sq(0, 2), sq(2, 2), sq(3, 1)]);
    }

    #[test]
    fn test_knight_jumps_but_respects_occupants() {
        let board = Board::new();
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let knight = piece_at(&board, sq(7, 1));

        assert!(validator.is_valid_move(knight, sq(7, 1), sq(5, 2)));
        assert!(validator.is_valid_move(knight, sq(7, 1), sq(5, 0)));
        // Own pawn on d2
        assert!(!validator.is_valid_move(knight, sq(7, 1), sq(6, 3)));
    }

    #[test]
    fn test_pawn_steps() {
        let board = Board::new();
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let pawn = piece_at(&board, sq(6, 4));

        assert!(validator.is_valid_move(pawn, sq(6, 4), sq(5, 4)));
        assert!(validator.is_valid_move(pawn, sq(6, 4), sq(4, 4)));
        assert!(!validator.is_valid_move(pawn, sq(6, 4), sq(3, 4)));
        assert!(!validator.is_valid_move(pawn, sq(6, 4), sq(7, 4)));
        // Diagonal onto an empty square
        assert!(!validator.is_valid_move(pawn, sq(6, 4), sq(5, 5)));

        let black = piece_at(&board, sq(1, 3));
        assert!(validator.is_valid_move(black, sq(1, 3), sq(3, 3)));
        assert!(!validator.is_valid_move(black, sq(1, 3), sq(0, 3)));
    }

    #[test]
    fn test_pawn_double_step_only_from_start_row() {
        let board = position("4k3/8/8/8/4P3/8/8/4K3");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let pawn = piece_at(&board, sq(4, 4));

        assert!(validator.is_valid_move(pawn, sq(4, 4), sq(3, 4)));
        assert!(!validator.is_valid_move(pawn, sq(4, 4), sq(2, 4)));
    }

    #[test]
    fn test_pawn_double_step_needs_clear_intermediate_square() {
        let board = position("4k3/8/8/8/8/4n3/4P3/4K3");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let pawn = piece_at(&board, sq(6, 4));

        assert!(!validator.is_valid_move(pawn, sq(6, 4), sq(4, 4)));
        assert!(!validator.is_valid_move(pawn, sq(6, 4), sq(5, 4)));
    }

    #[test]
    fn test_pawn_captures() {
        let board = position("4k3/8/8/3p1P2/4P3/8/8/4K3");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let pawn = piece_at(&board, sq(4, 4));

        // Enemy on d5, own pawn on f5
        assert!(validator.is_valid_move(pawn, sq(4, 4), sq(3, 3)));
        assert!(!validator.is_valid_move(pawn, sq(4, 4), sq(3, 5)));
        // Backwards diagonal
        assert!(!validator.is_valid_move(pawn, sq(4, 4), sq(5, 3)));
    }

    #[test]
    fn test_bishop_blocking_and_capture() {
        // White bishop c1, black pawn e3, white pawn b2
        let board = position("4k3/8/8/8/8/4p3/1P6/2B1K3");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let bishop = piece_at(&board, sq(7, 2));

        assert!(validator.is_valid_move(bishop, sq(7, 2), sq(6, 3)));
        // Blocker is the destination and an enemy
        assert!(validator.is_valid_move(bishop, sq(7, 2), sq(5, 4)));
        // Beyond the blocker
        assert!(!validator.is_valid_move(bishop, sq(7, 2), sq(4, 5)));
        // Own piece
        assert!(!validator.is_valid_move(bishop, sq(7, 2), sq(6, 1)));
        assert!(!validator.is_valid_move(bishop, sq(7, 2), sq(5, 0)));
        // Not diagonal
        assert!(!validator.is_valid_move(bishop, sq(7, 2), sq(5, 2)));
    }

    #[test]
    fn test_rook_blocking_and_capture() {
        let board = position("4k3/8/r7/8/8/8/8/R3K3");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let rook = piece_at(&board, sq(7, 0));

        assert!(validator.is_valid_move(rook, sq(7, 0), sq(3, 0)));
        assert!(validator.is_valid_move(rook, sq(7, 0), sq(2, 0)));
        assert!(!validator.is_valid_move(rook, sq(7, 0), sq(1, 0)));
        assert!(validator.is_valid_move(rook, sq(7, 0), sq(7, 3)));
        assert!(!validator.is_valid_move(rook, sq(7, 0), sq(7, 5)));
        assert!(!validator.is_valid_move(rook, sq(7, 0), sq(6, 1)));
    }

    #[test]
    fn test_any_blocker_voids_sliding_move() {
        let blockers = [
            Piece::new(Color::White, PieceKind::Pawn),
            Piece::new(Color::Black, PieceKind::Pawn),
        ];
        let queen = Piece::new(Color::White, PieceKind::Queen);
        let from = sq(7, 0);

        for target in [sq(7, 6), sq(1, 6), sq(1, 0)] {
            let dr = (target.row - from.row).signum();
            let dc = (target.col - from.col).signum();
            for blocker in blockers {
                let mut board = Board::empty();
                board.set(from, queen);
                board.set(from.offset(2 * dr, 2 * dc), blocker);
                let validator = MoveValidator::new(&board, CastlingRights::ALL);
                assert!(
                    !validator.is_valid_move(queen, from, target),
                    "{} should block {} -> {}",
                    blocker,
                    from,
                    target
                );
            }

            let mut board = Board::empty();
            board.set(from, queen);
            board.set(target, Piece::new(Color::Black, PieceKind::Knight));
            let validator = MoveValidator::new(&board, CastlingRights::ALL);
            assert!(validator.is_valid_move(queen, from, target));
        }
    }

    #[test]
    fn test_queen_union_of_rook_and_bishop() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(reachable(&board, sq(4, 4)).len(), 27);
        assert!(!reachable(&board, sq(4, 4)).contains(&sq(2, 3)));
    }

    #[test]
    fn test_king_steps() {
        let board = position("4k3/8/8/8/8/8/3P4/4K3");
        let validator = MoveValidator::new(&board, CastlingRights::NONE);
        let king = piece_at(&board, sq(7, 4));

        assert!(validator.is_valid_move(king, sq(7, 4), sq(6, 4)));
        assert!(validator.is_valid_move(king, sq(7, 4), sq(7, 5)));
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(6, 3)));
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(5, 4)));
    }

    #[test]
    fn test_castle_requests() {
        let board = position("4k3/8/8/8/8/8/8/R3K2R");
        let king = piece_at(&board, sq(7, 4));

        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        assert!(validator.is_valid_move(king, sq(7, 4), sq(7, 7)));
        assert!(validator.is_valid_move(king, sq(7, 4), sq(7, 0)));

        let validator = MoveValidator::new(&board, CastlingRights::NONE);
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 7)));
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 0)));
    }

    #[test]
    fn test_castle_blocked_by_piece_between() {
        let board = position("4k3/8/8/8/8/8/8/RN2K1NR");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let king = piece_at(&board, sq(7, 4));

        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 7)));
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 0)));
    }

    #[test]
    fn test_castle_refused_through_attacked_square() {
        // Black rook on f8 covers f1
        let board = position("4kr2/8/8/8/8/8/8/4K2R");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let king = piece_at(&board, sq(7, 4));
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 7)));

        // Black rook on e8 gives check
        let board = position("4r1k1/8/8/8/8/8/8/4K2R");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        assert!(!validator.is_valid_move(king, sq(7, 4), sq(7, 7)));
    }

    #[test]
    fn test_castle_onto_attacked_square_is_not_legal() {
        // Black rook on g8 covers g1, f1 is free
        let board = position("4k1r1/8/8/8/8/8/8/4K2R");
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        let king = piece_at(&board, sq(7, 4));

        assert!(validator.is_valid_move(king, sq(7, 4), sq(7, 7)));
        assert!(!validator.is_legal_move(king, sq(7, 4), sq(7, 7)));
        assert!(!validator.legal_destinations(king, sq(7, 4)).contains(&sq(7, 7)));
    }

    #[test]
    fn test_check_detection() {
        let board = position("4k3/8/8/8/8/8/8/4R1K1");
        let validator = MoveValidator::new(&board, CastlingRights::NONE);

        assert!(validator.attacks_king(Color::White));
        assert!(validator.is_in_check(Color::Black));
        assert!(!validator.king_is_safe(Color::Black));
        assert!(validator.king_is_safe(Color::White));
    }

    #[test]
    fn test_pinned_piece_has_no_legal_moves() {
        // White bishop on e2 pinned by the rook on e8
        let board = position("4r1k1/8/8/8/8/8/4B3/4K3");
        let validator = MoveValidator::new(&board, CastlingRights::NONE);
        let bishop = piece_at(&board, sq(6, 4));

        assert!(validator.is_valid_move(bishop, sq(6, 4), sq(5, 5)));
        assert!(!validator.is_legal_move(bishop, sq(6, 4), sq(5, 5)));
        assert!(validator.legal_destinations(bishop, sq(6, 4)).is_empty());
    }

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let board = Board::new();
        let validator = MoveValidator::new(&board, CastlingRights::ALL);
        assert_eq!(validator.all_legal_moves(Color::White).len(), 20);
        assert_eq!(validator.all_legal_moves(Color::Black).len(), 20);
        assert!(validator.has_legal_moves(Color::White));
    }

    #[test]
    fn test_stalemate_position_has_no_moves() {
        // Black king a8, white queen c7, white king c6: black to move
        let board = position("k7/2Q5/2K5/8/8/8/8/8");
        let validator = MoveValidator::new(&board, CastlingRights::NONE);

        assert!(!validator.is_in_check(Color::Black));
        assert!(!validator.has_legal_moves(Color::Black));
        assert!(validator.all_legal_moves(Color::Black).is_empty());
    }

    #[test]
    fn test_validator_never_mutates() {
        let board = position("4k3/8/8/8/8/8/8/R3K2R");
        let before = board.clone();
        let validator = MoveValidator::new(&board, CastlingRights::ALL);

        let _ = validator.all_legal_moves(Color::White);
        let _ = validator.is_in_check(Color::Black);
        assert_eq!(board, before);
    }
}

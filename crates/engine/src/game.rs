use crate::board::Board;
use crate::logger::ChessLogger;
use crate::state::{GameState, Selection};
use crate::types::*;
use crate::validation::MoveValidator;

/// What happened to the piece held by a `move_to` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was selected.
    Ignored,
    /// Dropped back on its own square.
    Cancelled,
    /// The piece cannot move there; everything was put back.
    Illegal,
    /// The move would leave the mover's king attacked; everything was put back.
    LeavesKingInCheck,
    Moved,
    Castled,
    /// A pawn reached its last rank; call [`GameEngine::promote`] to finish the turn.
    AwaitingPromotion,
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Moved | MoveOutcome::Castled | MoveOutcome::AwaitingPromotion
        )
    }
}

/// Orchestrates selection, validation, board mutation and status updates.
/// These are the only entry points a front-end needs.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    state: GameState,
    logger: ChessLogger,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(),
            logger: ChessLogger::new(),
        }
    }

    /// Start from an arbitrary position with full castling rights.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let mut engine = Self {
            board,
            state: GameState::new(),
            logger: ChessLogger::new(),
        };
        engine.state.set_current_player(to_move);

        let status = engine.status_for(to_move);
        engine.state.set_status(status);
        engine.logger.log_position(&engine.board);
        engine.logger.log_status(status);
        engine
    }

    fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(&self.board, self.state.castling_rights())
    }

    /// Lift the piece on `square` if it belongs to the player to move.
    ///
    /// Refused once the game is over, while a promotion is pending or while
    /// another piece is already held.
    pub fn select(&mut self, square: Square) -> bool {
        if self.state.is_game_over()
            || self.state.is_promotion_pending()
            || self.state.has_selection()
        {
            return false;
        }

        match self.board.get(square) {
            Some(piece) if piece.color == self.state.current_player() => {
                self.board.remove(square);
                self.state.select(piece, square);
                self.logger.log_selection(piece, square);
                true
            }
            _ => false,
        }
    }

    /// Drop the held piece on `to`.
    pub fn move_to(&mut self, to: Square) -> MoveOutcome {
        let Some(Selection { piece, origin }) = self.state.selection() else {
            return MoveOutcome::Ignored;
        };

        if to == origin {
            self.cancel_selection();
            return MoveOutcome::Cancelled;
        }

        if let Some(target) = self.board.get(to).filter(|target| target.color != piece.color) {
            self.state.set_capture(target, to);
        }

        if !self.validator().is_valid_move(piece, origin, to) {
            self.logger.log_rejected(piece, origin, to, "illegal move");
            self.cancel_selection();
            return MoveOutcome::Illegal;
        }

        if piece.kind == PieceKind::King
            && self.validator().is_castle_request(piece.color, origin, to)
        {
            return self.castle(piece, origin, to);
        }

        self.board.set(to, piece);
        if !self.validator().king_is_safe(piece.color) {
            self.logger.log_rejected(piece, origin, to, "king left in check");
            self.board.remove(to);
            if let Some((taken, square)) = self.state.capture() {
                self.board.set(square, taken);
            }
            self.cancel_selection();
            return MoveOutcome::LeavesKingInCheck;
        }

        let captured = self.state.capture().map(|(taken, _)| taken);

        self.record(MoveRecord {
            from: origin,
            to,
            kind: MoveKind::Normal(piece),
            captured,
            player: piece.color,
        });
        if matches!(piece.kind, PieceKind::King | PieceKind::Rook) {
            self.state.revoke_castling(piece.color);
        }
        self.clear_transient();

        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            self.state.set_pending_promotion(to);
            self.logger.log_promotion_pending(to);
            return MoveOutcome::AwaitingPromotion;
        }

        self.end_turn();
        MoveOutcome::Moved
    }

    fn castle(&mut self, king: Piece, from: Square, to: Square) -> MoveOutcome {
        let Some(squares) = self.board.castle(king, from, to) else {
            self.cancel_selection();
            return MoveOutcome::Illegal;
        };

        if !self.validator().king_is_safe(king.color) {
            self.logger.log_rejected(king, from, to, "castles into check");
            self.board.uncastle(from, to, squares);
            self.cancel_selection();
            return MoveOutcome::LeavesKingInCheck;
        }

        self.record(MoveRecord {
            from,
            to,
            kind: MoveKind::Castle,
            captured: None,
            player: king.color,
        });
        self.state.revoke_castling(king.color);
        self.clear_transient();
        self.end_turn();
        MoveOutcome::Castled
    }

    /// Replace the pawn waiting on its last rank with `kind` and finish the
    /// turn. Only knight, bishop, rook and queen are accepted.
    pub fn promote(&mut self, kind: PieceKind) -> bool {
        if !kind.is_promotion_choice() {
            return false;
        }
        let Some(square) = self.state.clear_pending_promotion() else {
            return false;
        };

        let player = self.state.current_player();
        self.board.set(square, Piece::new(player, kind));
        self.record(MoveRecord {
            from: square,
            to: square,
            kind: MoveKind::PawnPromotion(kind),
            captured: None,
            player,
        });
        self.end_turn();
        true
    }

    /// Put any held piece back on its square.
    pub fn cancel_selection(&mut self) {
        if let Some(Selection { piece, origin }) = self.state.clear_selection() {
            self.board.set(origin, piece);
            self.logger.log_cancel(piece, origin);
        }
        self.state.clear_capture();
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.state.reset();
        self.logger.log_reset();
    }

    fn record(&mut self, record: MoveRecord) {
        self.logger.log_move(&record);
        self.state.push_move(record);
    }

    fn clear_transient(&mut self) {
        self.state.clear_selection();
        self.state.clear_capture();
    }

    /// Recompute the opponent's status, then hand them the move.
    fn end_turn(&mut self) {
        let opponent = self.state.current_player().opposite();
        let status = self.status_for(opponent);
        self.state.set_status(status);
        self.logger.log_status(status);
        self.state.switch_player();

        if status.is_terminal() {
            self.logger.log_position(&self.board);
        }
    }

    fn status_for(&self, color: Color) -> GameStatus {
        let validator = self.validator();
        let in_check = validator.is_in_check(color);
        let can_move = validator.has_legal_moves(color);

        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate(color),
            (true, true) => GameStatus::Check(color),
            (false, false) => GameStatus::Draw,
            (false, true) => GameStatus::Active,
        }
    }

    /// Legal destinations of the held piece, empty when nothing is held.
    pub fn selection_targets(&self) -> Vec<Square> {
        match self.state.selection() {
            Some(Selection { piece, origin }) => self.validator().legal_destinations(piece, origin),
            None => Vec::new(),
        }
    }

    // Read accessors
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player()
    }

    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.state.selection()
    }

    pub fn is_promotion_pending(&self) -> bool {
        self.state.is_promotion_pending()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.state.history()
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling_rights()
    }

    pub fn logger(&self) -> &ChessLogger {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut ChessLogger {
        &mut self.logger
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

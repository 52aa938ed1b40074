use crate::types::*;

/// A piece lifted off the board together with the square it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    pub origin: Square,
}

/// Turn, selection, history and status bookkeeping. Holds no chess logic.
#[derive(Debug, Clone)]
pub struct GameState {
    current_player: Color,
    selection: Option<Selection>,
    capture: Option<(Piece, Square)>,
    move_history: Vec<MoveRecord>,
    status: GameStatus,
    castling_rights: CastlingRights,
    pending_promotion: Option<Square>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            current_player: Color::White,
            selection: None,
            capture: None,
            move_history: Vec::new(),
            status: GameStatus::Active,
            castling_rights: CastlingRights::ALL,
            pending_promotion: None,
        }
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Color) {
        self.current_player = player;
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    // Selection
    pub fn select(&mut self, piece: Piece, origin: Square) {
        self.selection = Some(Selection { piece, origin });
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn clear_selection(&mut self) -> Option<Selection> {
        self.selection.take()
    }

    // Capture in flight
    pub fn set_capture(&mut self, piece: Piece, square: Square) {
        self.capture = Some((piece, square));
    }

    pub fn capture(&self) -> Option<(Piece, Square)> {
        self.capture
    }

    pub fn clear_capture(&mut self) {
        self.capture = None;
    }

    // History
    pub fn push_move(&mut self, record: MoveRecord) {
        self.move_history.push(record);
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    // Status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    // Castling
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn can_castle(&self, color: Color) -> bool {
        self.castling_rights.has(color)
    }

    pub fn revoke_castling(&mut self, color: Color) {
        self.castling_rights.revoke(color);
    }

    // Promotion
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn is_promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }

    pub fn set_pending_promotion(&mut self, square: Square) {
        self.pending_promotion = Some(square);
    }

    pub fn clear_pending_promotion(&mut self) -> Option<Square> {
        self.pending_promotion.take()
    }

    /// Back to the initial values: white to move, nothing selected, empty
    /// history, active, full castling rights, no promotion pending.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

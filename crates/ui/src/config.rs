use egui::Color32;
use engine::PieceKind;

// Window settings
pub const TITLE: &str = "Chess";
pub const WINDOW_SIZE: [f32; 2] = [640.0, 700.0];
pub const BOARD_MARGIN: f32 = 20.0;

// Colors
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(240, 217, 181);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(181, 136, 99);
pub const ORIGIN_HIGHLIGHT: Color32 = Color32::from_rgb(246, 246, 105);
pub const TARGET_MARKER: Color32 = Color32::from_rgba_premultiplied(90, 90, 90, 140); // ~55% opacity
pub const PIECE_COLOR: Color32 = Color32::BLACK;

// Glyph sizes relative to one square
pub const PIECE_SCALE: f32 = 0.8;
pub const HELD_PIECE_SCALE: f32 = 0.9;
pub const PROMOTION_GLYPH_SIZE: f32 = 40.0;

/// Promotion chooser slots, left to right.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

pub const LOG_DIR: &str = "logs";

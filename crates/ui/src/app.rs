use std::path::Path;

use egui::{Pos2, Rect, Sense, Vec2};
use engine::{GameEngine, GameStatus, MoveOutcome, Piece, Square};

use crate::assets::PieceGlyphs;
use crate::config::*;

pub struct ChessApp {
    engine: GameEngine,
    glyphs: PieceGlyphs,
    targets: Vec<Square>,
    last_outcome: Option<MoveOutcome>,
}

impl ChessApp {
    pub fn new(glyphs: PieceGlyphs) -> Self {
        let mut engine = GameEngine::new();
        engine.logger_mut().enable_verbose();

        Self {
            engine,
            glyphs,
            targets: Vec::new(),
            last_outcome: None,
        }
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(TITLE);
                ui.separator();
                ui.label(self.status_text());
                if ui.button("New game").clicked() {
                    self.engine.reset();
                    self.targets.clear();
                    self.last_outcome = None;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - BOARD_MARGIN;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(ui.cursor().min, Vec2::splat(board_size));

            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.secondary_clicked() {
                self.engine.cancel_selection();
                self.targets.clear();
            } else if response.clicked() {
                let clicked_square = response.interact_pointer_pos().and_then(|pos| {
                    let relative_pos = pos - board_rect.min;
                    Square::from_pixel(relative_pos.x, relative_pos.y, square_size)
                });
                self.handle_square_click(clicked_square);
            }

            // Draw the board
            self.draw_board(ui, board_rect, square_size);

            if let Some(pointer) = response.hover_pos() {
                self.draw_held_piece(ui, pointer, square_size);
            }
        });

        if self.engine.is_promotion_pending() {
            self.show_promotion_chooser(ctx);
        }
    }
}

impl ChessApp {
    /// First click lifts a piece, the next one drops it. A click that does not
    /// land on a square puts the piece back.
    fn handle_square_click(&mut self, clicked_square: Option<Square>) {
        match clicked_square {
            None => self.engine.cancel_selection(),
            Some(square) if self.engine.has_selection() => {
                self.last_outcome = Some(self.engine.move_to(square));
            }
            Some(square) => {
                self.engine.select(square);
            }
        }

        self.targets = self.engine.selection_targets();
    }

    fn status_text(&self) -> String {
        let to_move = self.engine.current_player().name();
        let status = match self.engine.status() {
            GameStatus::Active => format!("{} to move", to_move),
            GameStatus::Check(color) => format!("Check! {} to move", color.name()),
            GameStatus::Checkmate(color) => {
                format!("Checkmate - {} wins", color.opposite().name())
            }
            GameStatus::Draw => "Stalemate - draw".to_string(),
        };

        match self.last_outcome {
            Some(MoveOutcome::Illegal) => format!("{} (illegal move)", status),
            Some(MoveOutcome::LeavesKingInCheck) => format!("{} (king would be in check)", status),
            _ => status,
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();
        let origin = self.engine.selection().map(|selection| selection.origin);

        // Draw squares
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                let is_light = (row + col) % 2 == 0;

                let square_rect = Rect::from_min_size(
                    board_rect.min + Vec2::new(col as f32 * square_size, row as f32 * square_size),
                    Vec2::splat(square_size),
                );

                let square_color = if Some(square) == origin {
                    ORIGIN_HIGHLIGHT
                } else if is_light {
                    LIGHT_SQUARE
                } else {
                    DARK_SQUARE
                };

                painter.rect_filled(square_rect, 0.0, square_color);

                // Legal move indicators
                if self.targets.contains(&square) {
                    let center = square_rect.center();

                    if self.engine.board().get(square).is_some() {
                        // Capture square - draw donut
                        painter.circle_filled(center, square_size * 0.4, TARGET_MARKER);
                        painter.circle_filled(center, square_size * 0.3, square_color);
                    } else {
                        painter.circle_filled(center, square_size * 0.15, TARGET_MARKER);
                    }
                }

                if let Some(piece) = self.engine.board().get(square) {
                    self.draw_piece(painter, piece, square_rect.center(), square_size * PIECE_SCALE);
                }
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, egui::Color32::BLACK));
    }

    /// The lifted piece follows the pointer.
    fn draw_held_piece(&self, ui: &mut egui::Ui, pointer: Pos2, square_size: f32) {
        if let Some(selection) = self.engine.selection() {
            self.draw_piece(ui.painter(), selection.piece, pointer, square_size * HELD_PIECE_SCALE);
        }
    }

    fn draw_piece(&self, painter: &egui::Painter, piece: Piece, center: Pos2, size: f32) {
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            self.glyphs.get(piece),
            egui::FontId::proportional(size),
            PIECE_COLOR,
        );
    }

    fn show_promotion_chooser(&mut self, ctx: &egui::Context) {
        let player = self.engine.current_player();
        let mut chosen = None;

        egui::Window::new("Promote pawn")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for kind in PROMOTION_CHOICES {
                        let glyph = self.glyphs.get(Piece::new(player, kind));
                        let label = egui::RichText::new(glyph).size(PROMOTION_GLYPH_SIZE);
                        if ui.button(label).clicked() {
                            chosen = Some(kind);
                        }
                    }
                });
            });

        if let Some(kind) = chosen {
            self.engine.promote(kind);
        }
    }
}

impl Drop for ChessApp {
    fn drop(&mut self) {
        let moves = self.engine.history().len();
        let logger = self.engine.logger_mut();
        logger.log(&format!("Moves recorded: {}", moves));

        match logger.save_to_dir(Path::new(LOG_DIR), "window closed") {
            Ok(path) => println!("Game log saved to {}", path.display()),
            Err(e) => eprintln!("{}", e),
        }
    }
}

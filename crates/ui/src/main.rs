mod app;
mod assets;
mod config;

use app::ChessApp;
use assets::PieceGlyphs;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_title(config::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        config::TITLE,
        options,
        Box::new(|_cc| {
            // A missing glyph aborts startup
            let glyphs = PieceGlyphs::load()?;
            Ok(Box::new(ChessApp::new(glyphs)))
        }),
    )
}

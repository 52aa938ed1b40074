use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::board::Board;
use crate::types::*;

/// In-memory session log, flushed to a timestamped file when the session ends.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub verbose: bool,
    game_start_time: Instant,
    move_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            verbose: false,
            game_start_time: Instant::now(),
            move_count: 0,
            indent_level: 0,
        };

        logger.log("🎯 === Chess Game Log Started ===");
        logger.log(&format!("📅 Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn enable_verbose(&mut self) {
        self.verbose = true;
        self.log("🔬 Verbose logging enabled - selections and rejections recorded");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&format!("{}{}\n", indent, message));
    }

    pub fn increase_indent(&mut self) { self.indent_level += 1; }
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 { self.indent_level -= 1; }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.game_start_time.elapsed().as_millis()
    }

    pub fn moves_logged(&self) -> u32 {
        self.move_count
    }

    // 🎯 MOVE LOGGING
    pub fn log_move(&mut self, record: &MoveRecord) {
        self.move_count += 1;
        let elapsed = self.elapsed_ms();
        self.log(&format!(
            "{}. {} {} ({}ms)",
            self.move_count,
            record.player.name(),
            record,
            elapsed
        ));
    }

    pub fn log_selection(&mut self, piece: Piece, square: Square) {
        if self.verbose {
            self.log_with_indent(&format!("✋ Picked up {} on {}", piece, square));
        }
    }

    pub fn log_cancel(&mut self, piece: Piece, square: Square) {
        if self.verbose {
            self.log_with_indent(&format!("↩️ Returned {} to {}", piece, square));
        }
    }

    pub fn log_rejected(&mut self, piece: Piece, from: Square, to: Square, reason: &str) {
        if self.verbose {
            self.log_with_indent(&format!("❌ {} {}-{} rejected: {}", piece, from, to, reason));
        }
    }

    pub fn log_promotion_pending(&mut self, square: Square) {
        self.log_with_indent(&format!("👑 Pawn on {} awaiting promotion", square));
    }

    pub fn log_status(&mut self, status: GameStatus) {
        match status {
            GameStatus::Active => {}
            GameStatus::Check(color) => {
                self.log_with_indent(&format!("⚠️ {} is in check", color.name()));
            }
            GameStatus::Checkmate(color) => {
                self.log(&format!(
                    "🏁 Checkmate! {} wins",
                    color.opposite().name()
                ));
            }
            GameStatus::Draw => self.log("🏁 Stalemate - draw"),
        }
    }

    pub fn log_position(&mut self, board: &Board) {
        self.log(&format!("📋 Position: {}", board.placement()));
        self.increase_indent();
        for line in board.to_string().lines() {
            self.log_with_indent(line);
        }
        self.decrease_indent();
    }

    pub fn log_reset(&mut self) {
        self.move_count = 0;
        self.game_start_time = Instant::now();
        self.log("🔄 === New Game ===");
    }

    /// Write the buffer to `<dir>/<timestamp>.txt`, creating `dir` if needed.
    pub fn save_to_dir(&mut self, dir: &Path, reason: &str) -> Result<PathBuf, String> {
        if let Err(e) = fs::create_dir_all(dir) {
            return Err(format!("Failed to create log directory: {}", e));
        }

        // Generate filename with current date/time
        let now = chrono::Local::now();
        let filename = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("💾 Session ended: {} - Saving log", reason));

        match File::create(&filename) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log file: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}

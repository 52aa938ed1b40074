pub mod board;
pub mod types;
pub mod state;
pub mod validation;
pub mod game;
pub mod logger;

pub use board::*;
pub use types::*;
pub use state::{GameState, Selection};
pub use validation::{LegalMove, MoveValidator};
pub use game::{GameEngine, MoveOutcome};
pub use logger::ChessLogger;

pub mod core;

// module re-exports
pub use crate::core::definitions::{Color, Coordinate, Move, Piece, PieceType};
pub use crate::core::engine::Board;
pub use crate::core::game::Game;

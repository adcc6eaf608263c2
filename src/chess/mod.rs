pub mod attacks;
pub mod board;
pub mod error;
pub mod geometry;
pub mod make_move;
pub mod moves;
pub mod pawn_history;
pub mod render;
pub mod rules;
pub mod square;
mod zobrist;

pub use attacks::movegen::*;
pub use board::*;
pub use error::*;
pub use geometry::*;
pub use make_move::*;
pub use moves::*;
pub use pawn_history::*;
pub use render::*;
pub use square::*;

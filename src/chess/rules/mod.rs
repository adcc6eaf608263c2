//! Per-piece legality predicates.
//!
//! Each rule looks at one candidate move and the position it would be played
//! in, and either classifies it (quiet, capture, ...) or names the
//! [`Violation`]. Rules never mutate the position; king safety is out of
//! scope.

mod leapers;
mod pawn;
mod sliders;

use tracing::trace;

use crate::chess::{
    board::{Color, Piece, Position},
    error::Violation,
    geometry::Displacement,
    moves::MoveType,
    square::Square,
};

/// Everything the executor has gathered about a candidate move.
#[derive(Debug, Clone, Copy)]
pub struct MoveFacts {
    pub from: Square,
    pub to: Square,
    pub displacement: Displacement,
    pub piece: Piece,
    pub color: Color,
    /// Piece on the destination square before the move, if any.
    pub target: Option<(Piece, Color)>,
}

/// Runs the rule for the moving piece.
pub fn check_move(position: &Position, facts: &MoveFacts) -> Result<MoveType, Violation> {
    let side_to_move = position.side_to_move();
    if facts.color != side_to_move {
        return Err(Violation::WrongSide(facts.color));
    }
    if facts.displacement.is_zero() {
        return Err(Violation::NullMove);
    }

    let verdict = match facts.piece {
        Piece::Pawn => pawn::check_pawn(position, facts),
        Piece::Knight | Piece::King => leapers::check_leaper(facts),
        Piece::Bishop | Piece::Rook | Piece::Queen => sliders::check_slider(position, facts),
    };

    trace!(
        piece = %facts.piece,
        color = %facts.color,
        from = facts.from,
        to = facts.to,
        ?verdict,
        "legality check"
    );

    verdict
}

/// Quiet or capture depending on the destination; own pieces are never
/// capturable.
#[inline(always)]
fn capture_type(facts: &MoveFacts) -> Result<MoveType, Violation> {
    match facts.target {
        None => Ok(MoveType::Quiet),
        Some((_, color)) if color == facts.color => Err(Violation::FriendlyCapture),
        Some(_) => Ok(MoveType::Capture),
    }
}

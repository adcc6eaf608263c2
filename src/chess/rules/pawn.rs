use crate::chess::{
    board::{Piece, Position},
    error::Violation,
    moves::MoveType,
    rules::{MoveFacts, capture_type},
    square::*,
};

/// Pawn rule, checked in order:
/// 1. at most one file of lateral movement
/// 2. file changes only when capturing, straight moves only when not
/// 3. forward for the pawn's color; one rank, or two straight from the home
///    rank when the pawn has not moved and the skipped square is empty
/// 4. no capturing own pieces
///
/// A diagonal step onto the en passant square counts as a capture of the pawn
/// that skipped it.
pub(super) fn check_pawn(position: &Position, facts: &MoveFacts) -> Result<MoveType, Violation> {
    let displacement = facts.displacement;
    let color = facts.color;
    let forward = color.forward();
    let capturing = facts.target.is_some();
    let en_passant = !capturing && displacement.file != 0 && is_en_passant_target(position, facts);

    if displacement.file.abs() > 1 {
        return Err(Violation::PawnFileSpan);
    }

    if displacement.file != 0 && !(capturing || en_passant) {
        return Err(Violation::PawnDiagonalQuiet);
    }
    if displacement.file == 0 && capturing {
        return Err(Violation::PawnCaptureStraight);
    }

    if displacement.rank.signum() == -forward {
        return Err(Violation::PawnBackward);
    }
    let double_step = match displacement.rank.abs() {
        1 => false,
        2 if displacement.file == 0 => {
            let from_file = file_of(facts.from);
            let skipped = to_square(rank_of(facts.from) + forward, from_file);
            let unmoved = rank_of(facts.from) == color.pawn_home_rank()
                && !position.pawn_history().has_moved(color, from_file);
            if !unmoved || position.occupied() & bit(skipped) != 0 {
                return Err(Violation::PawnDoubleStep);
            }
            true
        }
        _ => return Err(Violation::PawnRankSpan),
    };

    if en_passant {
        return Ok(MoveType::EnPassantCapture);
    }
    match capture_type(facts)? {
        MoveType::Quiet if double_step => Ok(MoveType::DoublePawnPush),
        move_type => Ok(move_type),
    }
}

/// The destination is the square an enemy pawn skipped on the last ply, and
/// that pawn is still standing just past it.
fn is_en_passant_target(position: &Position, facts: &MoveFacts) -> bool {
    if position.en_passant_square() != Some(facts.to) {
        return false;
    }
    let victim = to_square(rank_of(facts.to) - facts.color.forward(), file_of(facts.to));
    position.piece_at(victim) == Some((Piece::Pawn, facts.color.toggle()))
}

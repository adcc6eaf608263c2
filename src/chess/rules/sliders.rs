use crate::chess::{
    attacks::{movegen::gen_sliding_attacks, tables::Offset},
    board::{Piece, Position},
    error::Violation,
    moves::MoveType,
    rules::{MoveFacts, capture_type},
    square::bit,
};

/// Bishops move diagonally, rooks along ranks and files, queens either way.
/// Every square strictly between source and destination must be empty.
pub(super) fn check_slider(position: &Position, facts: &MoveFacts) -> Result<MoveType, Violation> {
    let move_type = capture_type(facts)?;
    let displacement = facts.displacement;

    let on_line = match facts.piece {
        Piece::Bishop => displacement.is_diagonal(),
        Piece::Rook => displacement.is_straight(),
        Piece::Queen => displacement.is_diagonal() || displacement.is_straight(),
        _ => false,
    };
    if !on_line {
        return Err(Violation::PieceGeometry(facts.piece));
    }

    // The ray stops on the first occupied square, so the destination is only
    // on it when nothing stands in between.
    let (file, rank) = displacement.direction();
    let ray = gen_sliding_attacks(facts.from, position.occupied(), &[Offset { rank, file }]);
    if ray & bit(facts.to) == 0 {
        return Err(Violation::PathBlocked(facts.piece));
    }

    Ok(move_type)
}

use crate::chess::{
    attacks::tables::{KING_ATTACKS, KNIGHT_ATTACKS},
    board::Piece,
    error::Violation,
    moves::MoveType,
    rules::{MoveFacts, capture_type},
    square::bit,
};

/// Knights and kings jump to a fixed pattern of squares; nothing in between
/// matters.
pub(super) fn check_leaper(facts: &MoveFacts) -> Result<MoveType, Violation> {
    let move_type = capture_type(facts)?;

    let reach = match facts.piece {
        Piece::Knight => KNIGHT_ATTACKS[facts.from as usize],
        Piece::King => KING_ATTACKS[facts.from as usize],
        other => return Err(Violation::PieceGeometry(other)),
    };
    if reach & bit(facts.to) == 0 {
        return Err(Violation::PieceGeometry(facts.piece));
    }

    Ok(move_type)
}

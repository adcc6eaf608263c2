use std::fmt;

use crate::chess::error::MoveError;
use crate::chess::square::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MoveType {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassantCapture,
    Invalid,
}

impl MoveType {
    #[inline(always)]
    fn from_bits(bits: u16) -> MoveType {
        match bits {
            0 => MoveType::Quiet,
            1 => MoveType::DoublePawnPush,
            2 => MoveType::Capture,
            3 => MoveType::EnPassantCapture,
            _ => MoveType::Invalid,
        }
    }
}

/// A validated move: source, destination and what kind of move the rules
/// classified it as. Lives for one validate-and-apply cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Move(pub u16);

impl Move {
    #[inline(always)]
    pub fn new(from: Square, to: Square, move_type: MoveType) -> Self {
        debug_assert!(move_type != MoveType::Invalid);
        debug_assert!(from < BOARD_SIZE as u8 && to < BOARD_SIZE as u8);

        // 15..12 : move type
        // 11..6  : destination square
        // 5..0   : origin square
        Move(from as u16 | (to as u16) << 6 | (move_type as u16) << 12)
    }

    #[inline(always)]
    pub fn get_from(self) -> Square {
        (self.0 & 0x3f) as Square
    }

    #[inline(always)]
    pub fn get_to(self) -> Square {
        (self.0 >> 6 & 0x3f) as Square
    }

    #[inline(always)]
    pub fn move_type(self) -> MoveType {
        let move_type = MoveType::from_bits(self.0 >> 12 & 0xf);
        debug_assert!(move_type != MoveType::Invalid);
        move_type
    }

    /// True when the move removes an enemy piece, including en passant where
    /// the destination itself is empty.
    #[inline(always)]
    pub fn is_capture(self) -> bool {
        matches!(
            self.move_type(),
            MoveType::Capture | MoveType::EnPassantCapture
        )
    }

    pub fn to_notation(self) -> String {
        format!("{}{}", Coord(self.get_from()), Coord(self.get_to()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Coord(self.get_from()), Coord(self.get_to()))
    }
}

/// Splits `<fileA><rankA><fileB><rankB>` (e.g. `e2e4`) into source and
/// destination squares. Nothing else is accepted: no piece letters, no
/// promotion suffix, no surrounding whitespace.
pub fn parse_notation(notation: &str) -> Result<(Square, Square), MoveError> {
    let chars: Vec<char> = notation.chars().collect();
    let [from_file, from_rank, to_file, to_rank] = chars[..] else {
        return Err(MoveError::NotationLength(chars.len()));
    };

    Ok((
        coordinate_to_square(from_file, from_rank)?,
        coordinate_to_square(to_file, to_rank)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_squares_and_type() {
        let mov = Move::new(12, 28, MoveType::DoublePawnPush);
        assert_eq!(mov.get_from(), 12);
        assert_eq!(mov.get_to(), 28);
        assert_eq!(mov.move_type(), MoveType::DoublePawnPush);
        assert!(!mov.is_capture());
        assert_eq!(mov.to_notation(), "e2e4");
        assert!(Move::new(63, 0, MoveType::EnPassantCapture).is_capture());
    }

    #[test]
    fn notation_must_be_four_coordinate_characters() {
        assert_eq!(parse_notation("e2e4"), Ok((12, 28)));
        assert_eq!(parse_notation("a1h8"), Ok((0, 63)));
        assert_eq!(parse_notation("e2e"), Err(MoveError::NotationLength(3)));
        assert_eq!(parse_notation("e7e8q"), Err(MoveError::NotationLength(5)));
        assert_eq!(parse_notation(""), Err(MoveError::NotationLength(0)));
        assert_eq!(parse_notation("e2z4"), Err(MoveError::InvalidCoordinate('z')));
        assert_eq!(parse_notation("Nf3g"), Err(MoveError::InvalidCoordinate('N')));
    }
}

use crate::chess::board::Color;
use crate::chess::square::BOARD_WIDTH;

/// One bit per file per color recording whether the pawn that started on that
/// file has moved. Bits 0..8 are white's files a..h, bits 8..16 black's.
///
/// Every update keeps the value it replaced so the preceding state can be
/// inspected or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PawnHistory {
    bits: u16,
    previous: u16,
}

impl PawnHistory {
    #[inline(always)]
    fn mask(color: Color, file: i8) -> u16 {
        debug_assert!((0..BOARD_WIDTH as i8).contains(&file));
        1u16 << (color as usize * BOARD_WIDTH + file as usize)
    }

    pub fn from_bits(bits: u16) -> Self {
        PawnHistory { bits, previous: 0 }
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.bits
    }

    #[inline]
    pub fn previous(self) -> u16 {
        self.previous
    }

    #[inline]
    pub fn has_moved(self, color: Color, file: i8) -> bool {
        self.bits & Self::mask(color, file) != 0
    }

    /// Replaces the whole value, remembering the old one.
    pub fn set(&mut self, bits: u16) {
        self.previous = self.bits;
        self.bits = bits;
    }

    /// ORs in the bit for `color`'s pawn on `file`.
    pub fn mark_moved(&mut self, color: Color, file: i8) {
        self.set(self.bits | Self::mask(color, file));
    }
}

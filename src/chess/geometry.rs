//! Destination masks from shift arithmetic.
//!
//! With a1 = 0, one rank up is a left shift by 8 and one file right is a left
//! shift by 1. Everything is `u64`, so right shifts are logical and never
//! smear the h8 bit down the board.

use crate::chess::error::MoveError;
use crate::chess::square::*;

/// Signed file and rank distance between two squares, each in `-7..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement {
    pub file: i8,
    pub rank: i8,
}

impl Displacement {
    pub fn between(from: Square, to: Square) -> Self {
        Displacement {
            file: file_of(to) - file_of(from),
            rank: rank_of(to) - rank_of(from),
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.file == 0 && self.rank == 0
    }

    /// Unit step toward the destination along a rank, file or diagonal.
    #[inline]
    pub fn direction(self) -> (i8, i8) {
        (self.file.signum(), self.rank.signum())
    }

    #[inline]
    pub fn is_straight(self) -> bool {
        !self.is_zero() && (self.file == 0 || self.rank == 0)
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        !self.is_zero() && self.file.abs() == self.rank.abs()
    }
}

#[inline(always)]
pub fn shift_ranks(mask: u64, rank_delta: i8) -> u64 {
    let amount = BOARD_WIDTH as u32 * rank_delta.unsigned_abs() as u32;
    if rank_delta >= 0 {
        mask.checked_shl(amount).unwrap_or(0)
    } else {
        mask.checked_shr(amount).unwrap_or(0)
    }
}

#[inline(always)]
pub fn shift_files(mask: u64, file_delta: i8) -> u64 {
    let amount = file_delta.unsigned_abs() as u32;
    if file_delta >= 0 {
        mask.checked_shl(amount).unwrap_or(0)
    } else {
        mask.checked_shr(amount).unwrap_or(0)
    }
}

/// Square reached from `from` by `displacement`, or [`MoveError::OffBoard`].
pub fn destination_square(from: Square, displacement: Displacement) -> Result<Square, MoveError> {
    let (Some(file), Some(rank)) = (
        file_of(from).checked_add(displacement.file),
        rank_of(from).checked_add(displacement.rank),
    ) else {
        return Err(MoveError::OffBoard);
    };
    if valid_axis(file) && valid_axis(rank) {
        Ok(to_square(rank, file))
    } else {
        Err(MoveError::OffBoard)
    }
}

/// Shifts the one-bit mask of `from` by `displacement`.
///
/// The target is bounds-checked on coordinates first; a bare file shift from
/// the h-file would otherwise wrap onto the a-file of the next rank.
pub fn destination_mask(from: Square, displacement: Displacement) -> Result<u64, MoveError> {
    destination_square(from, displacement)?;

    let mask = shift_files(shift_ranks(bit(from), displacement.rank), displacement.file);
    debug_assert_eq!(mask.count_ones(), 1);
    Ok(mask)
}

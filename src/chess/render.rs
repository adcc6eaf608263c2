//! Console rendering of positions and single bitboards.
//!
//! Both print rank 8 first and files a..h left to right, eight characters
//! per line.

use std::fmt;

use crate::chess::board::*;
use crate::chess::square::*;

/// Piece letters in serialization order (see [`serial_index`]).
pub const PIECE_CHARS: [char; 12] = ['P', 'R', 'N', 'B', 'Q', 'K', 'p', 'r', 'n', 'b', 'q', 'k'];

pub const EMPTY_SQUARE: char = '-';

/// Builds the 8x8 character grid from the fifteen serialized bitboards.
pub fn render_bitboards(bitboards: &[u64; 15]) -> String {
    let mut grid = [EMPTY_SQUARE; BOARD_SIZE];
    for (index, &letter) in PIECE_CHARS.iter().enumerate() {
        for square in bitboards[index].ones_iter() {
            grid[square as usize] = letter;
        }
    }

    let mut out = String::with_capacity(BOARD_SIZE + BOARD_WIDTH);
    for rank in (0..BOARD_WIDTH as i8).rev() {
        for file in 0..BOARD_WIDTH as i8 {
            out.push(grid[to_square(rank, file) as usize]);
        }
        out.push('\n');
    }
    out
}

/// One mask as eight lines of `0`/`1`.
pub fn render_bitboard(bitboard: u64) -> String {
    let mut out = String::with_capacity(BOARD_SIZE + BOARD_WIDTH);
    for rank in (0..BOARD_WIDTH as i8).rev() {
        for file in 0..BOARD_WIDTH as i8 {
            out.push(if bitboard & bit(to_square(rank, file)) != 0 {
                '1'
            } else {
                '0'
            });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_bitboards(&self.serialized_bitboards()))
    }
}

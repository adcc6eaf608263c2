use std::fmt;

use crate::chess::{
    error::PositionError,
    pawn_history::PawnHistory,
    square::*,
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn toggle(self) -> Color {
        [Color::White, Color::Black][self as usize ^ 1]
    }

    /// Even ply means white to move.
    #[inline(always)]
    pub fn from_ply(ply: u32) -> Color {
        [Color::White, Color::Black][(ply & 1) as usize]
    }

    /// Rank step toward the opponent: `+1` for white, `-1` for black.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Zero-based rank the color's pawns start on.
    #[inline(always)]
    pub fn pawn_home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    pub fn from_char(letter: char) -> Result<Piece, PositionError> {
        match letter.to_ascii_lowercase() {
            'p' => Ok(Piece::Pawn),
            'n' => Ok(Piece::Knight),
            'b' => Ok(Piece::Bishop),
            'r' => Ok(Piece::Rook),
            'q' => Ok(Piece::Queen),
            'k' => Ok(Piece::King),
            _ => Err(PositionError::Fen("invalid piece character")),
        }
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let letter = match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };
        match color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        })
    }
}

pub const PIECE_TYPES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// Piece order used when the bitboards cross the rendering boundary:
/// pawns, rooks, knights, bishops, queens, king; white first, then black.
pub const SERIAL_PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
];

pub const WHITE_PIECES: usize = 12;
pub const BLACK_PIECES: usize = 13;
pub const ALL_PIECES: usize = 14;

/// Index `0..12` of a piece bitboard in serialization order.
pub fn serial_index(piece: Piece, color: Color) -> usize {
    let slot = match piece {
        Piece::Pawn => 0,
        Piece::Rook => 1,
        Piece::Knight => 2,
        Piece::Bishop => 3,
        Piece::Queen => 4,
        Piece::King => 5,
    };
    color as usize * SERIAL_PIECES.len() + slot
}

// Indexed [color][piece]. Queens on d1/d8, kings on e1/e8.
const STARTING_BITBOARDS: [[u64; 6]; 2] = [
    [
        0x000000000000FF00,
        0x0000000000000042,
        0x0000000000000024,
        0x0000000000000081,
        0x0000000000000008,
        0x0000000000000010,
    ],
    [
        0x00FF000000000000,
        0x4200000000000000,
        0x2400000000000000,
        0x8100000000000000,
        0x0800000000000000,
        0x1000000000000000,
    ],
];

/// One chess position: twelve piece bitboards, three aggregates derived from
/// them, the ply counter and the pawn bookkeeping used by pawn rules.
///
/// The aggregates are never written on their own; [`Position::recompute_aggregates`]
/// rebuilds them after every mutation. Mutation happens only through
/// [`Position::apply_move`] and [`Position::undo_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) bitboards: [[u64; 6]; 2], // 6 piece types for 2 colors
    pub(crate) occupancies: [u64; 2],
    pub(crate) occupied: u64,

    pub(crate) ply: u32,
    pub(crate) pawn_history: PawnHistory,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) zobrist: u64,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// The standard starting arrangement, white to move.
    pub fn new() -> Self {
        let mut position = Position {
            bitboards: STARTING_BITBOARDS,
            occupancies: [0; 2],
            occupied: 0,

            ply: 0,
            pawn_history: PawnHistory::default(),
            en_passant_square: None,
            zobrist: 0,
        };
        position.recompute_aggregates();
        position.zobrist = position.calculate_zobrist();
        position
    }

    /// Builds a position from caller-supplied piece masks indexed
    /// `[color][piece]` (see [`PIECE_TYPES`] for the piece order).
    ///
    /// A pawn is considered to have moved unless it still stands on its home
    /// square of that file.
    pub fn from_bitboards(bitboards: [[u64; 6]; 2], ply: u32) -> Result<Self, PositionError> {
        let mut seen = 0u64;
        for mask in bitboards.iter().flatten() {
            let overlap = seen & mask;
            if overlap != 0 {
                return Err(PositionError::Overlap(Coord(overlap.trailing_zeros() as Square)));
            }
            seen |= mask;
        }

        let mut history_bits = 0u16;
        for color in [Color::White, Color::Black] {
            let pawns = bitboards[color as usize][Piece::Pawn as usize];
            for file in 0..BOARD_WIDTH as i8 {
                let home = bit(to_square(color.pawn_home_rank(), file));
                if pawns & home == 0 {
                    history_bits |= 1 << (color as usize * BOARD_WIDTH + file as usize);
                }
            }
        }

        let mut position = Position {
            bitboards,
            occupancies: [0; 2],
            occupied: 0,

            ply,
            pawn_history: PawnHistory::from_bits(history_bits),
            en_passant_square: None,
            zobrist: 0,
        };
        position.recompute_aggregates();
        position.zobrist = position.calculate_zobrist();
        Ok(position)
    }

    fn parse_positioning(part: &str) -> Result<[[u64; 6]; 2], PositionError> {
        let mut bitboards = [[0u64; 6]; 2];
        let mut rank: i8 = BOARD_WIDTH as i8 - 1;
        let mut file: i8 = 0;

        for chr in part.chars() {
            match chr {
                '/' => {
                    if rank == 0 {
                        return Err(PositionError::Fen("too many ranks"));
                    }
                    if file != BOARD_WIDTH as i8 {
                        return Err(PositionError::Fen("incomplete rank"));
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += (chr as u8 - b'0') as i8;
                    if file > BOARD_WIDTH as i8 {
                        return Err(PositionError::Fen("file out of bounds"));
                    }
                }
                c => {
                    let piece = Piece::from_char(c)?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if !valid_axis(file) {
                        return Err(PositionError::Fen("file out of bounds"));
                    }
                    bitboards[color as usize][piece as usize] |= bit(to_square(rank, file));
                    file += 1;
                }
            }
        }

        if rank != 0 || file != BOARD_WIDTH as i8 {
            return Err(PositionError::Fen("incomplete board"));
        }

        Ok(bitboards)
    }

    /// Reads placement, side to move, en passant square and fullmove number.
    /// The castling and halfmove fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let mut tokens = fen.split_whitespace();

        let bitboards = match tokens.next() {
            Some(positioning_part) => Position::parse_positioning(positioning_part)?,
            None => return Err(PositionError::Fen("no piece placement part found")),
        };

        let side = match tokens.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(PositionError::Fen("side to move must be 'w' or 'b'")),
        };

        let _castling = tokens.next();

        let en_passant_square = match tokens.next() {
            None | Some("-") => None,
            Some(part) => {
                let coord: Coord = part
                    .parse()
                    .map_err(|_| PositionError::Fen("invalid en passant square"))?;
                // The square the opponent's pawn just skipped.
                let pusher = side.toggle();
                if rank_of(coord.0) != pusher.pawn_home_rank() + pusher.forward() {
                    return Err(PositionError::Fen("en passant square on the wrong rank"));
                }
                Some(coord.0)
            }
        };

        let _halfmove_clock = tokens.next();

        let fullmove = match tokens.next() {
            None => 1,
            Some(part) => part
                .parse::<u32>()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or(PositionError::Fen("invalid fullmove number"))?,
        };

        let ply = (fullmove - 1)
            .checked_mul(2)
            .and_then(|n| n.checked_add(side as u32))
            .ok_or(PositionError::Fen("invalid fullmove number"))?;

        let mut position = Position::from_bitboards(bitboards, ply)?;
        position.en_passant_square = en_passant_square;
        position.zobrist = position.calculate_zobrist();
        Ok(position)
    }

    #[inline]
    pub fn bitboard(&self, piece: Piece, color: Color) -> u64 {
        self.bitboards[color as usize][piece as usize]
    }

    /// All twelve piece masks indexed `[color][piece]`.
    #[inline]
    pub fn bitboards(&self) -> &[[u64; 6]; 2] {
        &self.bitboards
    }

    /// All pieces of one color.
    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancies[color as usize]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        Color::from_ply(self.ply)
    }

    #[inline]
    pub fn pawn_history(&self) -> PawnHistory {
        self.pawn_history
    }

    /// Square a pawn skipped on the previous ply with a two-square advance.
    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn zobrist(&self) -> u64 {
        self.zobrist
    }

    /// Scans the twelve piece masks for the one holding `square`. The masks
    /// are disjoint, so the scan order is irrelevant.
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        let square_bit = bit(square);
        if self.occupied & square_bit == 0 {
            return None;
        }
        for color in [Color::White, Color::Black] {
            for piece in PIECE_TYPES {
                if self.bitboards[color as usize][piece as usize] & square_bit != 0 {
                    return Some((piece, color));
                }
            }
        }
        None
    }

    /// Clears `source_mask` and sets `dest_mask` in one XOR.
    ///
    /// # Preconditions
    /// - `source_mask` is set and `dest_mask` is clear in the piece's bitboard
    #[inline(always)]
    pub(crate) fn move_piece(&mut self, piece: Piece, color: Color, source_mask: u64, dest_mask: u64) {
        let bitboard = &mut self.bitboards[color as usize][piece as usize];
        debug_assert!(*bitboard & source_mask == source_mask);
        debug_assert!(*bitboard & dest_mask == 0);

        *bitboard ^= source_mask | dest_mask;
    }

    #[inline(always)]
    pub(crate) fn remove_piece(&mut self, piece: Piece, color: Color, mask: u64) {
        self.bitboards[color as usize][piece as usize] &= !mask;
    }

    #[inline(always)]
    pub(crate) fn place_piece(&mut self, piece: Piece, color: Color, mask: u64) {
        self.bitboards[color as usize][piece as usize] |= mask;
    }

    /// Rebuilds the white, black and all-occupied masks from the piece masks.
    pub(crate) fn recompute_aggregates(&mut self) {
        for color in [Color::White, Color::Black] {
            self.occupancies[color as usize] = self.bitboards[color as usize]
                .iter()
                .fold(0u64, |acc, bitboard| acc | bitboard);
        }
        self.occupied = self.occupancies[0] | self.occupancies[1];
    }

    /// Checks that the piece masks are pairwise disjoint and the aggregates
    /// are exactly their union.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [0u64; 2];
        for color in [Color::White, Color::Black] {
            for bitboard in self.bitboards[color as usize] {
                if (seen[0] | seen[1]) & bitboard != 0 {
                    return false;
                }
                seen[color as usize] |= bitboard;
            }
        }

        seen == self.occupancies
            && self.occupied == seen[0] | seen[1]
            && self.occupancies[0] & self.occupancies[1] == 0
    }

    /// The fifteen bitboards in serialization order: the twelve piece masks
    /// (see [`serial_index`]) followed by white, black and all occupancy.
    pub fn serialized_bitboards(&self) -> [u64; 15] {
        let mut out = [0u64; 15];
        for color in [Color::White, Color::Black] {
            for piece in SERIAL_PIECES {
                out[serial_index(piece, color)] = self.bitboard(piece, color);
            }
        }
        out[WHITE_PIECES] = self.occupancies[Color::White as usize];
        out[BLACK_PIECES] = self.occupancies[Color::Black as usize];
        out[ALL_PIECES] = self.occupied;
        out
    }
}

pub trait BitboardOnes: Sized + Copy {
    fn ones_iter(self) -> BitboardOnesIter;
}

pub struct BitboardOnesIter {
    bitboard: u64,
}

impl Iterator for BitboardOnesIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard == 0 {
            None
        } else {
            let sq = self.bitboard.trailing_zeros() as Square;
            self.bitboard &= self.bitboard - 1; // clear lowest set bit
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pop = self.bitboard.count_ones() as usize;
        (pop, Some(pop))
    }
}

impl ExactSizeIterator for BitboardOnesIter {}

impl BitboardOnes for u64 {
    fn ones_iter(self) -> BitboardOnesIter {
        BitboardOnesIter { bitboard: self }
    }
}

use crate::chess::attacks::movegen::gen_jumping_attacks;
use crate::chess::square::{BOARD_SIZE, Square};
use std::sync::LazyLock;

/// One step on the board, in ranks and files.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offset {
    pub rank: i8,
    pub file: i8,
}

/// Every square a pawn can reach in one move, before any rule is applied:
/// single and double push plus both diagonals.
pub const PAWN_OFFSETS_WHITE: [Offset; 4] = [
    Offset { rank: 1, file: 0 },
    Offset { rank: 2, file: 0 },
    Offset { rank: 1, file: -1 },
    Offset { rank: 1, file: 1 },
];

pub const PAWN_OFFSETS_BLACK: [Offset; 4] = [
    Offset { rank: -1, file: 0 },
    Offset { rank: -2, file: 0 },
    Offset { rank: -1, file: -1 },
    Offset { rank: -1, file: 1 },
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset { rank: 2, file: 1 },
    Offset { rank: 1, file: 2 },
    Offset { rank: -1, file: 2 },
    Offset { rank: -2, file: 1 },
    Offset { rank: -2, file: -1 },
    Offset { rank: -1, file: -2 },
    Offset { rank: 1, file: -2 },
    Offset { rank: 2, file: -1 },
];

pub const KING_OFFSETS: [Offset; 8] = [
    Offset { rank: 1, file: 0 },
    Offset { rank: 1, file: 1 },
    Offset { rank: 0, file: 1 },
    Offset { rank: -1, file: 1 },
    Offset { rank: -1, file: 0 },
    Offset { rank: -1, file: -1 },
    Offset { rank: 0, file: -1 },
    Offset { rank: 1, file: -1 },
];

pub const ROOK_DIRECTIONS: [Offset; 4] = [
    Offset { rank: 1, file: 0 },  // north
    Offset { rank: -1, file: 0 }, // south
    Offset { rank: 0, file: 1 },  // east
    Offset { rank: 0, file: -1 }, // west
];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [
    Offset { rank: 1, file: 1 },   // northeast
    Offset { rank: 1, file: -1 },  // northwest
    Offset { rank: -1, file: 1 },  // southeast
    Offset { rank: -1, file: -1 }, // southwest
];

pub static KNIGHT_ATTACKS: LazyLock<[u64; BOARD_SIZE]> = LazyLock::new(|| {
    std::array::from_fn(|square| gen_jumping_attacks(square as Square, &KNIGHT_OFFSETS))
});
pub static KING_ATTACKS: LazyLock<[u64; BOARD_SIZE]> = LazyLock::new(|| {
    std::array::from_fn(|square| gen_jumping_attacks(square as Square, &KING_OFFSETS))
});
pub static WPAWN_REACH: LazyLock<[u64; BOARD_SIZE]> = LazyLock::new(|| {
    std::array::from_fn(|square| gen_jumping_attacks(square as Square, &PAWN_OFFSETS_WHITE))
});
pub static BPAWN_REACH: LazyLock<[u64; BOARD_SIZE]> = LazyLock::new(|| {
    std::array::from_fn(|square| gen_jumping_attacks(square as Square, &PAWN_OFFSETS_BLACK))
});

use crate::chess::board::{BitboardOnes, Color, PIECE_TYPES, Position};
use crate::chess::square::{BOARD_SIZE, BOARD_WIDTH, file_of};
use rand::{Rng, SeedableRng};
use std::array::from_fn;
use std::sync::LazyLock;

pub static ZOBRIST_PIECE: LazyLock<[[[u64; BOARD_SIZE]; PIECE_TYPES.len()]; 2]> =
    LazyLock::new(|| {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
        from_fn(|_| from_fn(|_| from_fn(|_| rng.random())))
    });

pub static ZOBRIST_SIDE: LazyLock<u64> = LazyLock::new(|| {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(2);
    rng.random()
});

pub static ZOBRIST_EN_PASSANT: LazyLock<[u64; BOARD_WIDTH]> = LazyLock::new(|| {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(4);
    from_fn(|_| rng.random())
});

impl Position {
    /// Hashes the position from scratch. `apply_move` keeps `zobrist` in
    /// sync incrementally; this is the reference it must agree with.
    pub fn calculate_zobrist(&self) -> u64 {
        let mut zobrist = 0u64;

        for color in [Color::White, Color::Black] {
            for piece in PIECE_TYPES {
                for square in self.bitboard(piece, color).ones_iter() {
                    zobrist ^= ZOBRIST_PIECE[color as usize][piece as usize][square as usize];
                }
            }
        }

        if self.side_to_move() == Color::Black {
            zobrist ^= *ZOBRIST_SIDE;
        }
        if let Some(en_passant_square) = self.en_passant_square {
            zobrist ^= ZOBRIST_EN_PASSANT[file_of(en_passant_square) as usize];
        }

        zobrist
    }
}

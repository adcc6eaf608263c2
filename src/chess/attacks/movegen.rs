use tinyvec::ArrayVec;

use crate::chess::{
    attacks::tables::{self, Offset},
    board::*,
    moves::Move,
    square::*,
};

pub const MAX_MOVES: usize = 256;

pub fn gen_jumping_attacks(square: Square, offsets: &[Offset]) -> u64 {
    debug_assert!(square < BOARD_SIZE as u8);

    let rank = rank_of(square);
    let file = file_of(square);

    offsets.iter().fold(0u64, |attacks, offset| {
        let (r, f) = (rank + offset.rank, file + offset.file);
        if valid_axis(r) && valid_axis(f) {
            attacks | bit(to_square(r, f))
        } else {
            attacks
        }
    })
}

/// Walks each direction until the board edge or the first occupied square,
/// which is included so it can be captured.
pub fn gen_sliding_attacks(square: Square, occupancy: u64, directions: &[Offset]) -> u64 {
    debug_assert!(square < BOARD_SIZE as u8);

    let rank = rank_of(square);
    let file = file_of(square);

    let mut attacks: u64 = 0;

    for offset in directions {
        let (mut attacked_rank, mut attacked_file) = (rank + offset.rank, file + offset.file);
        let mut ray: u64 = 0;

        while valid_axis(attacked_rank) && valid_axis(attacked_file) {
            ray |= bit(to_square(attacked_rank, attacked_file));

            if ray & occupancy != 0 {
                break;
            }

            attacked_rank += offset.rank;
            attacked_file += offset.file;
        }

        attacks |= ray;
    }

    attacks
}

/// Squares a piece could plausibly reach. A superset of what the rules
/// accept; pawn pushes and captures are not told apart here.
#[inline(always)]
fn gen_piece_reach(square: Square, piece: Piece, color: Color, occupancy: u64) -> u64 {
    match piece {
        Piece::Pawn => match color {
            Color::White => tables::WPAWN_REACH[square as usize],
            Color::Black => tables::BPAWN_REACH[square as usize],
        },
        Piece::Knight => tables::KNIGHT_ATTACKS[square as usize],
        Piece::Bishop => gen_sliding_attacks(square, occupancy, &tables::BISHOP_DIRECTIONS),
        Piece::Rook => gen_sliding_attacks(square, occupancy, &tables::ROOK_DIRECTIONS),
        Piece::Queen => {
            gen_sliding_attacks(square, occupancy, &tables::BISHOP_DIRECTIONS)
                | gen_sliding_attacks(square, occupancy, &tables::ROOK_DIRECTIONS)
        }
        Piece::King => tables::KING_ATTACKS[square as usize],
    }
}

/// Every move the piece rules accept for the side to move. King safety is
/// not considered.
pub fn gen_legal_moves(position: &Position) -> ArrayVec<[Move; MAX_MOVES]> {
    let mut move_list = ArrayVec::<[Move; MAX_MOVES]>::new();
    let color = position.side_to_move();
    let friendly = position.occupancy(color);
    let occupancy = position.occupied();

    for piece in PIECE_TYPES {
        for from_square in position.bitboard(piece, color).ones_iter() {
            let candidates = gen_piece_reach(from_square, piece, color, occupancy) & !friendly;
            for to in candidates.ones_iter() {
                if let Ok(mov) = position.check_move(from_square, to) {
                    move_list.push(mov);
                }
            }
        }
    }

    move_list
}

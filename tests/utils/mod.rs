#![allow(dead_code)]

use plyboard::chess::*;

/// Mixed middlegame and endgame positions used as starting points for the
/// randomized move sequences.
pub const TEST_FENS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn square(name: &str) -> Square {
    name.parse::<Coord>().expect("test square names are valid").0
}

/// Builds a position from `(piece, color, square)` placements.
pub fn position_with(pieces: &[(Piece, Color, &str)], ply: u32) -> Position {
    let mut bitboards = [[0u64; 6]; 2];
    for &(piece, color, name) in pieces {
        bitboards[color as usize][piece as usize] |= bit(square(name));
    }
    Position::from_bitboards(bitboards, ply).expect("test placements do not overlap")
}

/// Plays a sequence of moves that must all be accepted.
pub fn play(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        if let Err(e) = position.apply_move(notation) {
            panic!("{notation} should be legal: {e}");
        }
    }
}

pub fn assert_invariants(position: &Position) {
    assert!(position.is_consistent(), "inconsistent position:\n{position}");

    let mut white = 0u64;
    let mut black = 0u64;
    for piece in PIECE_TYPES {
        white |= position.bitboard(piece, Color::White);
        black |= position.bitboard(piece, Color::Black);
    }
    assert_eq!(position.occupancy(Color::White), white);
    assert_eq!(position.occupancy(Color::Black), black);
    assert_eq!(position.occupied(), white | black);
    assert_eq!(white & black, 0);
    assert_eq!(position.zobrist(), position.calculate_zobrist());
}

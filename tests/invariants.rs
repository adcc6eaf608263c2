mod utils;

use plyboard::chess::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utils::*;

const GAMES_PER_FEN: u64 = 8;
const MAX_PLIES: usize = 120;

#[test]
fn random_games_keep_aggregates_in_sync() {
    for fen in TEST_FENS {
        for seed in 0..GAMES_PER_FEN {
            let mut rng = SmallRng::seed_from_u64(seed);
            let start = Position::from_fen(fen).unwrap();
            let mut position = start.clone();
            let mut undos = Vec::new();

            for _ in 0..MAX_PLIES {
                let moves = gen_legal_moves(&position);
                if moves.is_empty() {
                    break;
                }
                let mov = moves[rng.random_range(0..moves.len())];
                let ply = position.ply();
                let mover = position.piece_at(mov.get_from());
                let target = position.piece_at(mov.get_to());

                let undo = position
                    .try_move(mov.get_from(), mov.get_to())
                    .expect("listed moves are accepted");

                assert_eq!(undo.mov(), mov);
                assert_eq!(position.ply(), ply + 1);
                assert_eq!(position.piece_at(mov.get_from()), None);
                assert_eq!(position.piece_at(mov.get_to()), mover);
                assert_eq!(mov.move_type() == MoveType::Capture, target.is_some());
                assert_invariants(&position);
                undos.push(undo);
            }

            while let Some(undo) = undos.pop() {
                position.undo_move(&undo);
            }
            assert_eq!(position, start, "{fen} seed {seed}");
        }
    }
}

#[test]
fn rejected_moves_change_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);

    for fen in TEST_FENS {
        let mut position = Position::from_fen(fen).unwrap();

        for _ in 0..MAX_PLIES {
            // Random square pairs are almost always illegal.
            for _ in 0..32 {
                let from = rng.random_range(0..64u8);
                let to = rng.random_range(0..64u8);
                let before = position.clone();
                if let Err(error) = position.try_move(from, to) {
                    assert_eq!(position, before, "{error} changed the position");
                    assert_eq!(position.serialized_bitboards(), before.serialized_bitboards());
                    assert_eq!(position.ply(), before.ply());
                } else {
                    assert_invariants(&position);
                }
            }

            let moves = gen_legal_moves(&position);
            if moves.is_empty() {
                break;
            }
            let mov = moves[rng.random_range(0..moves.len())];
            position
                .try_move(mov.get_from(), mov.get_to())
                .expect("listed moves are accepted");
        }
    }
}

#[test]
fn overlapping_masks_are_refused() {
    let mut bitboards = [[0u64; 6]; 2];
    bitboards[Color::White as usize][Piece::Rook as usize] = bit(square("a1"));
    bitboards[Color::Black as usize][Piece::Queen as usize] = bit(square("a1"));

    assert_eq!(
        Position::from_bitboards(bitboards, 0),
        Err(PositionError::Overlap(Coord(0)))
    );
}

#[test]
fn fen_and_default_setup_agree() {
    let position = Position::from_fen(TEST_FENS[0]).unwrap();
    assert_eq!(position, Position::new());
    assert_invariants(&position);

    assert!(Position::from_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Position::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Position::from_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
    assert!(Position::from_fen("8/8/8/8/8/8/8/8 w - e4 0 1").is_err());
    assert!(Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 0").is_err());
    assert!(Position::from_fen("").is_err());
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 4000000000"),
        Err(PositionError::Fen("invalid fullmove number"))
    );

    let black_to_move = Position::from_fen("8/8/8/8/8/8/8/8 b - - 0 5").unwrap();
    assert_eq!(black_to_move.ply(), 9);
    assert_eq!(black_to_move.side_to_move(), Color::Black);
}

#[test]
fn serialized_bitboards_follow_rendering_order() {
    let position = Position::new();
    let bitboards = position.serialized_bitboards();

    assert_eq!(bitboards[0], 0x000000000000FF00); // white pawns
    assert_eq!(bitboards[1], 0x0000000000000081); // white rooks
    assert_eq!(bitboards[4], bit(square("d1"))); // white queen
    assert_eq!(bitboards[5], bit(square("e1"))); // white king
    assert_eq!(bitboards[11], bit(square("e8"))); // black king
    assert_eq!(bitboards[WHITE_PIECES], 0xFFFF);
    assert_eq!(bitboards[BLACK_PIECES], 0xFFFF000000000000);
    assert_eq!(bitboards[ALL_PIECES], 0xFFFF00000000FFFF);
    assert_eq!(serial_index(Piece::Knight, Color::Black), 8);
}

use std::io::Cursor;

use plyboard::chess::*;
use plyboard::turn_loop::{LoopOptions, TurnLoop};

fn run(input: &str, options: LoopOptions) -> (TurnLoop, String) {
    let mut game = TurnLoop::new(Position::new(), options);
    let mut out = Vec::new();
    game.run(Cursor::new(input), &mut out)
        .expect("writing to a Vec cannot fail");
    (game, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn end_stops_before_later_moves() {
    let (game, out) = run("e2e4\ne7e5\nend\nd2d4\n", LoopOptions::default());

    assert_eq!(game.position().ply(), 2);
    assert!(out.starts_with("rnbqkbnr\npppppppp\n"));
    assert_eq!(out.matches("White's move.").count(), 2);
    assert_eq!(out.matches("Black's move.").count(), 1);
    assert!(!out.contains("illegal"));
}

#[test]
fn illegal_input_is_reported_and_ignored() {
    let (game, out) = run("e2e5\nhello\ne2e4\n", LoopOptions::default());

    assert!(out.contains("Move e2e5 is illegal!"));
    assert!(out.contains("Move hello is illegal!"));
    assert_eq!(game.position().ply(), 1);
    assert_eq!(
        game.position().piece_at(28),
        Some((Piece::Pawn, Color::White))
    );
}

#[test]
fn end_of_input_terminates() {
    let (game, out) = run("", LoopOptions::default());
    assert_eq!(game.position(), &Position::new());
    assert!(out.ends_with("White's move.\nEnter move:\n"));
}

#[test]
fn windows_line_endings_are_accepted() {
    let (game, _) = run("e2e4\r\nend\r\n", LoopOptions::default());
    assert_eq!(game.position().ply(), 1);
}

#[test]
fn bitboard_dump_lists_all_fifteen_masks() {
    let options = LoopOptions {
        show_bitboards: true,
    };
    let (_, out) = run("end\n", options);

    assert!(out.contains("white pawns:\n00000000\n00000000\n"));
    assert!(out.contains("all pieces:\n11111111\n11111111\n00000000\n"));
    // Fifteen mask headings plus the one prompt.
    assert_eq!(out.matches(":\n").count(), 16);
}

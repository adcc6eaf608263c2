use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::chess::{Position, render_bitboard};

/// Input that ends the game loop without attempting a move.
pub const END_COMMAND: &str = "end";

const BITBOARD_NAMES: [&str; 15] = [
    "white pawns",
    "white rooks",
    "white knights",
    "white bishops",
    "white queens",
    "white king",
    "black pawns",
    "black rooks",
    "black knights",
    "black bishops",
    "black queens",
    "black king",
    "white pieces",
    "black pieces",
    "all pieces",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Print all fifteen bitboards after every board.
    pub show_bitboards: bool,
}

/// Reads one move per line and plays it on a single owned position.
pub struct TurnLoop {
    position: Position,
    options: LoopOptions,
}

impl TurnLoop {
    pub fn new(position: Position, options: LoopOptions) -> TurnLoop {
        TurnLoop { position, options }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.position)?;
        if self.options.show_bitboards {
            for (name, bitboard) in BITBOARD_NAMES
                .iter()
                .zip(self.position.serialized_bitboards())
            {
                writeln!(out, "\n{name}:")?;
                write!(out, "{}", render_bitboard(bitboard))?;
            }
        }
        writeln!(out)
    }

    /// Runs until `end` or end of input. Illegal moves are reported and the
    /// position is left as it was.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.print_board(out)?;

        let mut lines = input.lines();
        loop {
            writeln!(out, "{}'s move.", self.position.side_to_move())?;
            writeln!(out, "Enter move:")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                info!("input closed");
                break;
            };
            let line = line?;
            let command = line.trim_end_matches('\r');

            if command == END_COMMAND {
                break;
            }

            if let Err(error) = self.position.apply_move(command) {
                debug!(notation = command, %error, "illegal move");
                writeln!(out, "Move {command} is illegal!")?;
            }
            self.print_board(out)?;
        }

        out.flush()
    }
}

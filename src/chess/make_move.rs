use tracing::debug;

use crate::chess::{
    board::*,
    error::MoveError,
    geometry::{Displacement, destination_mask},
    moves::*,
    pawn_history::PawnHistory,
    rules::{self, MoveFacts},
    square::*,
    zobrist::*,
};

/// Restores the position as it was before one [`Position::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undo {
    mov: Move,
    piece: Piece,
    color: Color,
    // The captured piece and the square it stood on (differs from the
    // destination for en passant).
    captured: Option<(Piece, Square)>,
    pawn_history: PawnHistory,
    en_passant_square: Option<Square>,
    zobrist: u64,
}

impl Undo {
    #[inline]
    pub fn mov(&self) -> Move {
        self.mov
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured.map(|(piece, _)| piece)
    }
}

/// A move that passed validation together with what committing it touches.
struct Commit {
    mov: Move,
    piece: Piece,
    color: Color,
    captured: Option<(Piece, Square)>,
}

impl Position {
    fn validate(&self, from: Square, to: Square) -> Result<Commit, MoveError> {
        let source_mask = bit(from);
        debug_assert_eq!(source_mask.count_ones(), 1);

        let (piece, color) = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource(Coord(from)))?;

        let displacement = Displacement::between(from, to);
        let dest_mask = destination_mask(from, displacement)?;
        debug_assert_eq!(dest_mask, bit(to));

        let target = self.piece_at(to);

        let facts = MoveFacts {
            from,
            to,
            displacement,
            piece,
            color,
            target,
        };
        let move_type = rules::check_move(self, &facts)?;

        let captured = match move_type {
            MoveType::Capture => target.map(|(captured, _)| (captured, to)),
            MoveType::EnPassantCapture => Some((
                Piece::Pawn,
                to_square(rank_of(to) - color.forward(), file_of(to)),
            )),
            _ => None,
        };

        Ok(Commit {
            mov: Move::new(from, to, move_type),
            piece,
            color,
            captured,
        })
    }

    /// Validates the move from `from` to `to` without touching the position.
    pub fn check_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.validate(from, to).map(|commit| commit.mov)
    }

    /// Parses `<file><rank><file><rank>` notation and plays the move.
    ///
    /// On error the position is unchanged.
    pub fn apply_move(&mut self, notation: &str) -> Result<Undo, MoveError> {
        let (from, to) = parse_notation(notation).inspect_err(|error| {
            debug!(notation, %error, "unreadable move");
        })?;
        self.try_move(from, to)
    }

    /// Validates and plays the move from `from` to `to`. Either every
    /// bitboard, the ply counter and the pawn bookkeeping are updated, or
    /// nothing is.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Undo, MoveError> {
        match self.validate(from, to) {
            Ok(commit) => Ok(self.commit(commit)),
            Err(error) => {
                debug!(
                    from = %Coord(from),
                    to = %Coord(to),
                    ply = self.ply,
                    %error,
                    "move rejected"
                );
                Err(error)
            }
        }
    }

    fn commit(&mut self, commit: Commit) -> Undo {
        let Commit {
            mov,
            piece,
            color,
            captured,
        } = commit;
        let from = mov.get_from();
        let to = mov.get_to();
        let enemy = color.toggle();

        let undo = Undo {
            mov,
            piece,
            color,
            captured,
            pawn_history: self.pawn_history,
            en_passant_square: self.en_passant_square,
            zobrist: self.zobrist,
        };

        // The captured piece leaves before the mover lands, so the destination
        // is never held by two masks at once.
        if let Some((captured_piece, captured_square)) = captured {
            self.remove_piece(captured_piece, enemy, bit(captured_square));
            self.zobrist ^=
                ZOBRIST_PIECE[enemy as usize][captured_piece as usize][captured_square as usize];
        }

        self.move_piece(piece, color, bit(from), bit(to));
        self.zobrist ^= ZOBRIST_PIECE[color as usize][piece as usize][from as usize]
            ^ ZOBRIST_PIECE[color as usize][piece as usize][to as usize];

        if piece == Piece::Pawn && rank_of(from) == color.pawn_home_rank() {
            self.pawn_history.mark_moved(color, file_of(from));
        }

        if let Some(old) = self.en_passant_square {
            self.zobrist ^= ZOBRIST_EN_PASSANT[file_of(old) as usize];
        }
        self.en_passant_square = if mov.move_type() == MoveType::DoublePawnPush {
            Some(to_square(rank_of(from) + color.forward(), file_of(from)))
        } else {
            None
        };
        if let Some(new) = self.en_passant_square {
            self.zobrist ^= ZOBRIST_EN_PASSANT[file_of(new) as usize];
        }

        self.ply += 1;
        self.zobrist ^= *ZOBRIST_SIDE;

        self.recompute_aggregates();

        debug_assert!(self.is_consistent());
        debug_assert_eq!(self.zobrist, self.calculate_zobrist());
        debug!(
            mov = %mov,
            piece = %piece,
            color = %color,
            move_type = ?mov.move_type(),
            ply = self.ply,
            "move applied"
        );

        undo
    }

    /// Takes back the move that produced `undo`.
    ///
    /// # Preconditions
    /// - `undo` comes from the most recent `apply_move`/`try_move` on this
    ///   position that has not been undone yet
    pub fn undo_move(&mut self, undo: &Undo) {
        let from = undo.mov.get_from();
        let to = undo.mov.get_to();

        self.move_piece(undo.piece, undo.color, bit(to), bit(from));
        if let Some((captured_piece, captured_square)) = undo.captured {
            self.place_piece(captured_piece, undo.color.toggle(), bit(captured_square));
        }

        self.pawn_history = undo.pawn_history;
        self.en_passant_square = undo.en_passant_square;
        self.zobrist = undo.zobrist;
        debug_assert!(self.ply > 0, "undo past the first ply");
        self.ply -= 1;

        self.recompute_aggregates();

        debug_assert!(self.is_consistent());
        debug!(mov = %undo.mov, ply = self.ply, "move undone");
    }
}

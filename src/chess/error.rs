//! Error types for notation parsing, move validation and position setup.
//!
//! Nothing here is fatal: every failure leaves the [`Position`] untouched and
//! is handed back to the caller to report.
//!
//! [`Position`]: crate::chess::board::Position

use thiserror::Error;

use crate::chess::board::{Color, Piece};
use crate::chess::square::Coord;

/// Why applying a move failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Move notation must be exactly `<file><rank><file><rank>`.
    #[error("move notation must be 4 characters, got {0}")]
    NotationLength(usize),

    /// A notation character falls outside a-h / 1-8.
    #[error("invalid coordinate character '{0}'")]
    InvalidCoordinate(char),

    /// No piece stands on the source square.
    #[error("no piece on {0}")]
    EmptySource(Coord),

    /// The moving piece's rule rejected the move.
    #[error("{0}")]
    Illegal(#[from] Violation),

    /// The displacement would leave the board.
    #[error("destination is off the board")]
    OffBoard,
}

/// The rule a rejected move broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("it is not {0}'s turn")]
    WrongSide(Color),

    #[error("cannot capture a piece of the same color")]
    FriendlyCapture,

    #[error("source and destination are the same square")]
    NullMove,

    #[error("a pawn cannot move more than one file")]
    PawnFileSpan,

    #[error("a pawn cannot capture straight ahead")]
    PawnCaptureStraight,

    #[error("a pawn can only change file when capturing")]
    PawnDiagonalQuiet,

    #[error("a pawn cannot move backward")]
    PawnBackward,

    #[error("a pawn moves one rank, or two on its first move")]
    PawnRankSpan,

    #[error("a two-square pawn advance needs an unmoved pawn and a clear path")]
    PawnDoubleStep,

    #[error("a {0} cannot move that way")]
    PieceGeometry(Piece),

    #[error("the {0}'s path is blocked")]
    PathBlocked(Piece),
}

/// Why a caller-supplied position was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("square {0} is claimed by more than one piece")]
    Overlap(Coord),

    #[error("invalid FEN: {0}")]
    Fen(&'static str),
}

//! Bitboard chess position and move application.
//!
//! [`chess::Position`] owns twelve piece bitboards plus the white, black and
//! all-occupied aggregates. Moves arrive as four-character coordinate
//! notation, are checked against per-piece rules and are applied all at
//! once or not at all.

pub mod chess;
pub mod turn_loop;

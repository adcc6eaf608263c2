//! Square indexing under the a1 = 0, h1 = 7, a8 = 56, h8 = 63 convention.
//!
//! Every shift in [`crate::chess::geometry`] relies on this orientation: one
//! file to the right is `+1`, one rank up is `+8`.

use std::fmt;
use std::str::FromStr;

use crate::chess::error::MoveError;

pub const BOARD_WIDTH: usize = 8;
pub const BOARD_SIZE: usize = 64;

pub type Square = u8;

#[inline(always)]
pub fn to_square(rank: i8, file: i8) -> Square {
    ((rank * BOARD_WIDTH as i8) + file) as Square
}

#[inline(always)]
pub fn valid_axis(axis: i8) -> bool {
    axis >= 0 && axis < BOARD_WIDTH as i8
}

#[inline(always)]
pub fn bit(square: Square) -> u64 {
    1u64 << square
}

/// Zero-based file, a = 0 .. h = 7.
#[inline(always)]
pub fn file_of(square: Square) -> i8 {
    (square % BOARD_WIDTH as Square) as i8
}

/// Zero-based rank, rank 1 = 0 .. rank 8 = 7.
#[inline(always)]
pub fn rank_of(square: Square) -> i8 {
    (square / BOARD_WIDTH as Square) as i8
}

/// Maps a file letter and rank digit to a square index: `(rank-1)*8 + file`.
pub fn coordinate_to_square(file: char, rank: char) -> Result<Square, MoveError> {
    let file = match file {
        'a'..='h' => file as u8 - b'a',
        other => return Err(MoveError::InvalidCoordinate(other)),
    };
    let rank = match rank {
        '1'..='8' => rank as u8 - b'1',
        other => return Err(MoveError::InvalidCoordinate(other)),
    };

    Ok(to_square(rank as i8, file as i8))
}

/// Inverse of [`coordinate_to_square`].
pub fn square_to_coordinate(square: Square) -> (char, char) {
    debug_assert!(square < BOARD_SIZE as Square);

    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'1' + rank_of(square) as u8) as char;
    (file, rank)
}

/// A square that prints as its coordinate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(pub Square);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, rank) = square_to_coordinate(self.0);
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coord {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Ok(Coord(coordinate_to_square(file, rank)?)),
            _ => Err(MoveError::NotationLength(s.chars().count())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_a1_zero_convention() {
        assert_eq!(coordinate_to_square('a', '1').unwrap(), 0);
        assert_eq!(coordinate_to_square('h', '1').unwrap(), 7);
        assert_eq!(coordinate_to_square('a', '8').unwrap(), 56);
        assert_eq!(coordinate_to_square('h', '8').unwrap(), 63);
        assert_eq!(coordinate_to_square('e', '4').unwrap(), 28);
    }

    #[test]
    fn every_square_round_trips() {
        for file in 'a'..='h' {
            for rank in '1'..='8' {
                let square = coordinate_to_square(file, rank).unwrap();
                assert_eq!(square_to_coordinate(square), (file, rank));
            }
        }
    }

    #[test]
    fn rejects_out_of_range_characters() {
        assert_eq!(
            coordinate_to_square('i', '1'),
            Err(MoveError::InvalidCoordinate('i'))
        );
        assert_eq!(
            coordinate_to_square('a', '9'),
            Err(MoveError::InvalidCoordinate('9'))
        );
        assert_eq!(
            coordinate_to_square('A', '1'),
            Err(MoveError::InvalidCoordinate('A'))
        );
        assert_eq!(
            coordinate_to_square('a', '0'),
            Err(MoveError::InvalidCoordinate('0'))
        );
    }

    #[test]
    fn coord_parses_and_prints() {
        let coord: Coord = "d5".parse().unwrap();
        assert_eq!(coord, Coord(35));
        assert_eq!(coord.to_string(), "d5");
        assert!("d".parse::<Coord>().is_err());
        assert!("d55".parse::<Coord>().is_err());
    }
}

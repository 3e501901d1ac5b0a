/*
 * Makhos, a search core for Thai Checkers
 * Copyright (C) 2026 The Makhos Authors
 *
 * Makhos is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Makhos is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along
 * with Makhos. If not, see <https://www.gnu.org/licenses/>.
 */

//! A compact textual notation for building and printing positions in tests.
//!
//! This is not a persisted or wire format (the core has none); it exists so
//! `#[cfg(test)]` code can write positions tersely instead of building
//! bitboards bit by bit. One character per dark square, row-major from
//! square 0, followed by the side to move and the halfmove clock:
//! `"................MMMMMMMM........ w 0"` is the initial position spelled
//! with kings/men swapped around, for example.

use std::fmt::Write as _;

use crate::{
    bitboard::Bitboard,
    defs::{Side, Square},
    error::ParseError,
    position::Position,
};

/// Parses `s` as `"<32 board chars> <w|b> <clock>"` into a [`Position`].
///
/// The board chars are, per dark square in row-major order: `.` empty, `m`/
/// `k` a P1 man/king, `M`/`K` a P2 man/king.
///
/// # Errors
///
/// Returns [`ParseError`] if the board portion isn't exactly
/// [`Square::TOTAL`] characters long, contains a character outside `.mkMK`,
/// or the side marker isn't `w` or `b`.
pub fn from_notation(s: &str) -> Result<Position, ParseError> {
    let mut parts = s.split_whitespace();
    let board = parts.next().unwrap_or("");
    if board.chars().count() != Square::TOTAL {
        return Err(ParseError::WrongLength(board.chars().count()));
    }

    let mut p1_men = Bitboard::EMPTY;
    let mut p1_kings = Bitboard::EMPTY;
    let mut p2_men = Bitboard::EMPTY;
    let mut p2_kings = Bitboard::EMPTY;
    for (i, ch) in board.chars().enumerate() {
        let sq = Square(i as u8);
        match ch {
            '.' => {}
            'm' => p1_men.set(sq),
            'k' => p1_kings.set(sq),
            'M' => p2_men.set(sq),
            'K' => p2_kings.set(sq),
            other => return Err(ParseError::InvalidChar(other)),
        }
    }

    let side = match parts.next() {
        Some("w") => Side::P1,
        Some("b") => Side::P2,
        _ => return Err(ParseError::MissingSide),
    };
    let clock = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    Ok(Position::from_parts(p1_men, p1_kings, p2_men, p2_kings, side, clock))
}

/// Formats `pos` in the notation [`from_notation`] accepts.
#[must_use]
pub fn to_notation(pos: &Position) -> String {
    let mut out = String::with_capacity(Square::TOTAL + 8);
    for i in 0..Square::TOTAL as u8 {
        let sq = Square(i);
        let ch = if pos.p1_men().test(sq) {
            'm'
        } else if pos.p1_kings().test(sq) {
            'k'
        } else if pos.p2_men().test(sq) {
            'M'
        } else if pos.p2_kings().test(sq) {
            'K'
        } else {
            '.'
        };
        out.push(ch);
    }
    let side = if pos.side_to_move() == Side::P1 { 'w' } else { 'b' };
    let _ = write!(out, " {side} {}", pos.halfmove_clock());
    out
}

#[cfg(test)]
mod tests {
    use super::{from_notation, to_notation};
    use crate::position::Position;

    #[test]
    fn initial_position_round_trips() {
        let pos = Position::initial();
        let text = to_notation(&pos);
        let parsed = from_notation(&text).unwrap();
        assert_eq!(parsed, pos);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(from_notation("short w 0").is_err());
    }

    #[test]
    fn rejects_invalid_char() {
        let mut bad = "x".repeat(32);
        bad.push_str(" w 0");
        assert!(from_notation(&bad).is_err());
    }

    #[test]
    fn rejects_missing_side() {
        let board = ".".repeat(32);
        assert!(from_notation(&board).is_err());
    }
}

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

//! Error types for the one fallible entry point in the crate: parsing the
//! test/debug board notation (see [`crate::notation`]).

use std::fmt::{self, Display, Formatter};

/// Why a notation string failed to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character outside the notation alphabet (`.mkMK`) appeared in the
    /// board portion of the string.
    InvalidChar(char),
    /// The board portion did not contain exactly [`crate::defs::Square::TOTAL`]
    /// characters.
    WrongLength(usize),
    /// The side-to-move marker (`w`/`b`) was missing or unrecognized.
    MissingSide,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "invalid notation character: {c:?}"),
            Self::WrongLength(n) => write!(f, "expected 32 board characters, got {n}"),
            Self::MissingSide => write!(f, "missing or unrecognized side-to-move marker"),
        }
    }
}

impl std::error::Error for ParseError {}

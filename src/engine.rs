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

//! The public surface of the crate (spec §4.8): the handful of entry points
//! an embedder needs to run a game loop around the search core, re-exporting
//! and thinly wrapping the internal modules rather than duplicating them.

use std::time::Duration;

use crate::movegen;

pub use crate::{
    error::ParseError,
    evaluate::evaluate,
    movegen::Move,
    notation::{from_notation, to_notation},
    position::Position,
    search::{iterative_deepening, SearchInfo, SearchResult},
    tt::{Bound, TranspositionTable},
};

/// The starting position of a game.
#[must_use]
pub fn initial_position() -> Position {
    Position::initial()
}

/// The legal moves for the side to move, already filtered down to forced
/// maximum-length captures when any capture exists (spec §4.3).
#[must_use]
pub fn generate_moves(pos: &Position) -> Vec<Move> {
    movegen::generate_moves(pos).iter().copied().collect()
}

/// Applies `mv` to `pos`, returning the resulting position. Does not check
/// that `mv` is legal in `pos`; callers are expected to only apply moves
/// drawn from [`generate_moves`].
#[must_use]
pub fn apply_move(pos: &Position, mv: &Move) -> Position {
    movegen::apply_move(pos, mv)
}

/// Whether the game is over at `pos`: either side has run out of pieces, or
/// the side to move has no legal moves. A position can separately be a draw
/// by piece-scarcity inactivity without meeting either condition; callers
/// that care about draws consult [`is_draw_by_inactivity`] as well (spec
/// §3).
#[must_use]
pub fn is_terminal(pos: &Position) -> bool {
    pos.has_no_pieces_for_either_side() || movegen::generate_moves(pos).is_empty()
}

/// Whether `pos` is a draw by piece-scarcity inactivity: each side holds at
/// most two pieces and the halfmove clock has reached the draw threshold
/// (spec §3).
#[must_use]
pub fn is_draw_by_inactivity(pos: &Position) -> bool {
    pos.is_draw_by_inactivity()
}

/// Searches `root` for up to `time_budget`, using and updating `tt`.
/// Convenience wrapper over [`iterative_deepening`] for callers that don't
/// need per-depth progress information.
#[must_use]
pub fn search(root: &Position, time_budget: Duration, tt: &mut TranspositionTable) -> SearchResult {
    iterative_deepening(root, time_budget, tt, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_is_not_terminal() {
        let pos = initial_position();
        assert!(!is_terminal(&pos));
    }

    #[test]
    fn initial_position_has_legal_moves() {
        let pos = initial_position();
        assert_eq!(generate_moves(&pos).len(), 7);
    }

    #[test]
    fn search_returns_a_move_within_the_time_budget() {
        let pos = initial_position();
        let mut tt = TranspositionTable::default();
        let result = search(&pos, Duration::from_millis(100), &mut tt);
        assert!(result.best.is_some());
    }

    /// The mover has a quiet move (P1 man 17 to 13) that leaves the lone P2
    /// man at 4 with zero legal replies (its only forward square, 8, is
    /// occupied, and the capture landing beyond it, 13, is about to be too),
    /// without capturing anything or reducing P2 to zero pieces. Search must
    /// still find and play it.
    #[test]
    fn search_plays_a_move_that_stalemates_the_opponent() {
        use crate::{bitboard::Bitboard, defs::Side, position::Position};

        let mut p1_men = Bitboard::EMPTY;
        p1_men.set(crate::defs::Square(8));
        p1_men.set(crate::defs::Square(17));
        let mut p2_men = Bitboard::EMPTY;
        p2_men.set(crate::defs::Square(4));
        let pos = Position::from_parts(p1_men, Bitboard::EMPTY, p2_men, Bitboard::EMPTY, Side::P1, 0);

        let mut tt = TranspositionTable::default();
        let result = search(&pos, Duration::from_millis(100), &mut tt);
        let mv = result.best.expect("a move should be found");
        assert_eq!(mv.from(), crate::defs::Square(17));
        assert_eq!(mv.to(), crate::defs::Square(13));
    }
}

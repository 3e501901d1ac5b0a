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

//! The root finisher scan (spec §4.7.2): a shallow, exhaustive verification
//! that some root move forces a win within two or three plies of reply,
//! run before the ordinary recursive search so a short mate isn't lost to
//! the time budget or to an unlucky aspiration window.

use crate::{
    movegen::{apply_move, generate_moves, Move},
    position::Position,
};

/// The score reported for a move the finisher scan confirms (spec §4.7.2).
pub const FINISHER_SCORE: i32 = 900_000;

/// Whether the side to move in `pos` has already lost: no legal moves, or
/// no pieces left to move.
fn is_immediately_won(pos: &Position) -> bool {
    pos.mover_pieces().is_empty() || generate_moves(pos).is_empty()
}

/// Whether the mover can force a win from `pos` (mover to move), allowing
/// `extra_rounds` further opponent-reply/mover-response rounds beyond the
/// first mover move, should the first not finish the game outright.
///
/// Every round is a full (opponent reply, mover response) pair, so the
/// check always lands back on the mover having just moved (the only point
/// at which [`is_immediately_won`] correctly reads "the opponent has lost"
/// rather than "the mover has"). This is the shared recursive core of both
/// [`forces_win_in_2`] (zero extra rounds: the opponent's very next reply
/// must already be answerable by an immediate win) and [`forces_win_in_3`]
/// (one extra round: the mover's answer to the opponent's *first* reply
/// need not itself finish, provided every one of the opponent's further
/// replies does).
fn mover_forces_win(pos: &Position, extra_rounds: u32) -> bool {
    generate_moves(pos).iter().any(|mv| {
        let child = apply_move(pos, mv);
        if is_immediately_won(&child) {
            return true;
        }
        extra_rounds > 0
            && generate_moves(&child)
                .iter()
                .all(|reply| mover_forces_win(&apply_move(&child, reply), extra_rounds - 1))
    })
}

/// Whether playing `mv` from `root` forces a win within two further plies:
/// either the opponent has no reply, or every reply leaves the mover with a
/// move that immediately wins (spec §4.7.2).
#[must_use]
pub fn forces_win_in_2(root: &Position, mv: &Move) -> bool {
    let child = apply_move(root, mv);
    is_immediately_won(&child) || generate_moves(&child).iter().all(|reply| mover_forces_win(&apply_move(&child, reply), 0))
}

/// Whether playing `mv` from `root` forces a win within three further
/// plies: every opponent reply admits a mover response that need not finish
/// the game at once, provided every one of the opponent's subsequent
/// replies from there is answerable by an immediate win (spec §4.7.2),
/// one full reply/response round deeper than [`forces_win_in_2`].
#[must_use]
pub fn forces_win_in_3(root: &Position, mv: &Move) -> bool {
    let child = apply_move(root, mv);
    is_immediately_won(&child) || generate_moves(&child).iter().all(|reply| mover_forces_win(&apply_move(&child, reply), 1))
}

/// Scans every legal root move for a forced win within two or three plies,
/// preferring the shallowest. Returns the first such move found, in
/// move-generation order (deterministic, spec §5).
#[must_use]
pub fn scan(pos: &Position) -> Option<Move> {
    let moves = generate_moves(pos);
    if let Some(mv) = moves.iter().find(|mv| forces_win_in_2(pos, mv)) {
        return Some(*mv);
    }
    moves.iter().find(|mv| forces_win_in_3(pos, mv)).copied()
}

#[cfg(test)]
mod tests {
    use super::{forces_win_in_2, forces_win_in_3, scan};
    use crate::{movegen::generate_moves, notation::from_notation};

    #[test]
    fn finds_an_immediate_capture_of_the_last_enemy_piece() {
        // P1 man at 17 jumps over the lone P2 man at 13, leaving P2 with no
        // pieces: a forced win in one ply, which forces-win-in-2 also
        // detects (the opponent then has no reply at all).
        let mut board = vec![b'.'; 32];
        board[13] = b'M';
        board[17] = b'm';
        let board = String::from_utf8(board).unwrap();
        let pos = from_notation(&format!("{board} w 0")).unwrap();
        let mv = scan(&pos).expect("a forced winning move exists");
        assert_eq!(mv.captured(), &[crate::defs::Square(13)]);
    }

    #[test]
    fn returns_none_when_no_short_forced_win_exists() {
        let pos = crate::position::Position::initial();
        assert!(scan(&pos).is_none());
    }

    #[test]
    fn every_forced_win_in_2_is_also_a_forced_win_in_3() {
        // forces_win_in_3 allows (but doesn't require) one further reply
        // and response round, so it must accept every move forces_win_in_2
        // already accepts.
        let mut board = vec![b'.'; 32];
        board[13] = b'M';
        board[17] = b'm';
        let board = String::from_utf8(board).unwrap();
        let pos = from_notation(&format!("{board} w 0")).unwrap();
        let winning_move = generate_moves(&pos).iter().find(|mv| forces_win_in_2(&pos, mv)).copied().expect("a forces-win-in-2 move exists");
        assert!(forces_win_in_3(&pos, &winning_move));
    }
}

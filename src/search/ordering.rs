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

//! Root move ordering (spec §4.7.3): forced-win bonuses, a mobility-drop
//! heuristic and a deterministic tiebreak, all computed once up front so the
//! root search visits its most promising moves first.

use crate::{
    movegen::{apply_move, generate_moves, Move},
    position::Position,
    search::finisher::{forces_win_in_2, forces_win_in_3},
};

/// Scores and sorts `moves` for root search, most promising first.
#[must_use]
pub fn order_root_moves(pos: &Position, moves: &[Move]) -> Vec<Move> {
    let mut scored: Vec<(i64, Move)> = moves.iter().map(|&mv| (score(pos, mv), mv)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

/// The ordering score for a single root move (higher searched first).
fn score(pos: &Position, mv: Move) -> i64 {
    let is_finisher_2 = forces_win_in_2(pos, &mv);
    let is_finisher_3 = !is_finisher_2 && forces_win_in_3(pos, &mv);

    let mut score: i64 = 0;
    if is_finisher_2 {
        score += 1_000_000;
    } else if is_finisher_3 {
        score += 900_000;
    }

    let child = apply_move(pos, &mv);
    let opponent_replies = generate_moves(&child);

    let kings_only_after_move = child.mover_men().is_empty() && child.opponent_men().is_empty();
    let total_kings = child.mover_kings().popcount() + child.opponent_kings().popcount();
    let mobility_drop = (12_i64 - opponent_replies.len() as i64).max(0);
    let scale = if kings_only_after_move && total_kings <= 3 {
        6
    } else if kings_only_after_move {
        4
    } else {
        2
    };
    score += mobility_drop * scale;

    let leaves_immediate_capture = opponent_replies.iter().any(|reply| reply.is_capture());
    if leaves_immediate_capture && !is_finisher_2 && !is_finisher_3 {
        score -= 200;
    }

    let tiebreak = (pos.hash() ^ u32::from(mv.pack())) & 0b111;
    score += i64::from(tiebreak);

    score
}

#[cfg(test)]
mod tests {
    use super::order_root_moves;
    use crate::{movegen::generate_moves, position::Position};

    #[test]
    fn orders_all_legal_moves_without_dropping_any() {
        let pos = Position::initial();
        let moves = generate_moves(&pos);
        let ordered = order_root_moves(&pos, &moves);
        assert_eq!(ordered.len(), moves.len());
    }
}

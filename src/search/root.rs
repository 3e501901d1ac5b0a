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

//! The root search (spec §4.7.5): the finisher scan, root move ordering, and
//! a PVS loop identical in shape to the interior search but returning both a
//! move and a score.

use crate::{
    movegen::{apply_move, generate_moves, Move},
    position::Position,
    search::{
        alphabeta::{extend_and_reduce, MATE},
        finisher::{self, forces_win_in_2, forces_win_in_3},
        ordering::order_root_moves,
        Worker,
    },
    tt::{Bound, Entry},
};

/// The bonus added to a root move's selection score (not its returned
/// search score) when it's a confirmed short forced win (spec §4.7.5).
const FINISHER_SELECTION_BONUS: i64 = 500;
/// The cap on the mobility-drop bonus added to a root move's selection
/// score (spec §4.7.5).
const MOBILITY_SELECTION_CAP: i64 = 100;

impl Worker<'_> {
    /// Searches every legal root move and returns the best one with its raw
    /// search score, or `None` if the position is terminal.
    pub fn root_search(&mut self, pos: &Position, depth: i32, mut alpha: i32, beta: i32, ext_budget: i32) -> (Option<Move>, i32) {
        if let Some(mv) = finisher::scan(pos) {
            return (Some(mv), finisher::FINISHER_SCORE);
        }

        let original_alpha = alpha;
        let original_beta = beta;
        let key = pos.hash();

        let moves = generate_moves(pos);
        if moves.is_empty() {
            return (None, -MATE);
        }

        let ordered = order_root_moves(pos, &moves);
        let mut best_move = ordered[0];
        let mut best_score = -MATE;
        let mut best_selection = i64::MIN;

        for (index, &mv) in ordered.iter().enumerate() {
            if self.deadline.expired() {
                break;
            }

            let child = apply_move(pos, &mv);
            let child_moves = generate_moves(&child);
            let (d, search_depth, budget) = extend_and_reduce(depth, ext_budget, moves.len(), &mv, &child, &child_moves, index);
            let reduced = search_depth < d;

            let score = if index == 0 {
                -self.alphabeta(&child, search_depth, -beta, -alpha, 1, budget)
            } else {
                let null_window = -self.alphabeta(&child, search_depth, -(alpha + 1), -alpha, 1, budget);
                if null_window > alpha && (reduced || null_window < beta) {
                    -self.alphabeta(&child, d, -beta, -alpha, 1, budget)
                } else {
                    null_window
                }
            };

            let selection = score as i64 + selection_bonus(pos, &mv);
            if selection > best_selection {
                best_selection = selection;
                best_score = score;
                best_move = mv;
            }
            if score > alpha {
                alpha = score;
            }
        }

        let bound = if best_score <= original_alpha {
            Bound::Upper
        } else if best_score >= original_beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(Entry {
            key,
            depth: depth as i8,
            score: best_score,
            best_move: best_move.pack(),
            bound,
        });

        (Some(best_move), best_score)
    }
}

/// The move-selection bonus (spec §4.7.5): finisher confirmation plus a
/// capped mobility-drop term. Never affects the score reported or stored.
fn selection_bonus(pos: &Position, mv: &Move) -> i64 {
    let mut bonus = 0;
    if forces_win_in_2(pos, mv) || forces_win_in_3(pos, mv) {
        bonus += FINISHER_SELECTION_BONUS;
    }
    let child = apply_move(pos, mv);
    let opponent_replies = generate_moves(&child).len() as i64;
    bonus += (12 - opponent_replies).max(0).min(MOBILITY_SELECTION_CAP);
    bonus
}

#[cfg(test)]
mod tests {
    use crate::{
        position::Position,
        search::{time::Deadline, Worker},
        tt::TranspositionTable,
    };

    #[test]
    fn root_search_picks_a_legal_move_from_the_initial_position() {
        let pos = Position::initial();
        let mut tt = TranspositionTable::with_size_power(10);
        let mut worker = Worker::new(&mut tt, Deadline::never());
        let (mv, _) = worker.root_search(&pos, 3, -1_000_000, 1_000_000, 1);
        assert!(mv.is_some());
    }
}

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

//! The alpha-beta search: iterative deepening over the root search, which
//! in turn calls the recursive interior search and quiescence (spec §4.7).
//!
//! A [`Worker`] owns all the mutable state of one invocation (the killer
//! and history tables, the node counter and the deadline) in a single
//! struct, the way a single struct can own one invocation's mutable state
//! instead of threading loose parameters through every call.

mod alphabeta;
mod finisher;
mod ordering;
mod root;
pub mod tables;
pub mod time;

use std::time::Duration;

use tables::{HistoryTable, KillerTable};
use time::Deadline;

use crate::{
    movegen::Move,
    position::Position,
    tt::TranspositionTable,
};

/// An aspiration/full window half-width used before the first widening
/// (spec §4.7.1).
const ASPIRATION_WINDOW: i32 = 80;
/// How much an aspiration window widens on each failed attempt.
const ASPIRATION_WIDEN: i32 = 160;
/// The absolute depth the iterative deepening driver will not exceed (spec
/// §4.7.1).
const MAX_DEPTH: i32 = 22;

/// Owns the mutable state of one search invocation: killer and history move
/// ordering tables, the node counter, and the cancellation deadline.
pub struct Worker<'a> {
    tt: &'a mut TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    nodes: u64,
    deadline: Deadline,
}

impl<'a> Worker<'a> {
    /// Builds a fresh worker: killers and history start empty (spec §5,
    /// "fresh per invocation").
    fn new(tt: &'a mut TranspositionTable, deadline: Deadline) -> Self {
        Self {
            tt,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            nodes: 0,
            deadline,
        }
    }
}

/// The progress event delivered to a caller-supplied callback after each
/// completed iterative-deepening depth (spec §4.8, `onInfo`).
pub struct SearchInfo {
    /// The depth just completed.
    pub depth: i32,
    /// The score of the best move at this depth, from the root's
    /// side-to-move perspective.
    pub score: i32,
    /// The cumulative node count for this invocation.
    pub nodes: u64,
    /// The principal variation, extracted by walking TT move entries from
    /// the root (spec §4.8).
    pub pv: Vec<Move>,
}

/// The result of one `iterative_deepening` invocation (spec §4.8).
pub struct SearchResult {
    /// The best move found, or `None` if the root was terminal before any
    /// depth completed.
    pub best: Option<Move>,
    /// The score of `best`, from the root's side-to-move perspective.
    pub score: i32,
    /// The cumulative node count across every depth searched.
    pub nodes: u64,
    /// The last depth fully completed.
    pub depth: i32,
}

/// Runs iterative deepening from `root` for up to `time_budget`, using and
/// updating `tt`. Invokes `on_info` after each depth that completes within
/// the budget (spec §4.7.1).
#[must_use]
pub fn iterative_deepening(
    root: &Position,
    time_budget: Duration,
    tt: &mut TranspositionTable,
    mut on_info: Option<&mut dyn FnMut(SearchInfo)>,
) -> SearchResult {
    // The inactivity draw is only ever tested at the root: interior nodes
    // never call `is_draw_by_inactivity`, so a position reached briefly
    // in the middle of a line can't falsely collapse a search to zero.
    if root.is_draw_by_inactivity() {
        return SearchResult {
            best: None,
            score: 0,
            nodes: 0,
            depth: 0,
        };
    }

    let deadline = Deadline::from_now(time_budget);
    let mut worker = Worker::new(tt, deadline);

    let initial_budget = if is_kings_only_with_few_kings(root) { 2 } else { 1 };

    let mut best: Option<Move> = None;
    let mut best_score = 0;
    let mut completed_depth = 0;

    let mut depth = 1;
    while depth <= MAX_DEPTH && !deadline.expired() {
        let (mut alpha, mut beta) = if depth == 1 {
            (-1_000_000, 1_000_000)
        } else {
            (best_score - ASPIRATION_WINDOW, best_score + ASPIRATION_WINDOW)
        };

        let (mv, score) = loop {
            let (mv, score) = worker.root_search(root, depth, alpha, beta, initial_budget);
            if deadline.expired() {
                break (mv, score);
            }
            if score <= alpha {
                alpha -= ASPIRATION_WIDEN;
                continue;
            }
            if score >= beta {
                beta += ASPIRATION_WIDEN;
                continue;
            }
            break (mv, score);
        };

        if deadline.expired() && depth > 1 {
            break;
        }

        best = mv.or(best);
        best_score = score;
        completed_depth = depth;

        if let Some(cb) = on_info.as_deref_mut() {
            let pv = extract_pv(root, worker.tt, depth);
            cb(SearchInfo {
                depth,
                score,
                nodes: worker.nodes,
                pv,
            });
        }

        if best.is_none() {
            break;
        }

        depth += 1;
    }

    SearchResult {
        best,
        score: best_score,
        nodes: worker.nodes,
        depth: completed_depth,
    }
}

/// The starting extension budget is raised when the root is a sparse
/// kings-only endgame, where deeper tactical lines are cheap to search
/// (spec §9).
fn is_kings_only_with_few_kings(pos: &Position) -> bool {
    pos.mover_men().is_empty()
        && pos.opponent_men().is_empty()
        && pos.mover_kings().popcount() + pos.opponent_kings().popcount() <= 3
}

/// Walks TT move entries from `root`, stopping at a missing entry, a move
/// not present in the legal set at that position, or `max_len` plies (spec
/// §4.8).
fn extract_pv(root: &Position, tt: &TranspositionTable, max_len: i32) -> Vec<Move> {
    let mut pv = Vec::new();
    let mut pos = *root;
    for _ in 0..max_len {
        let Some(entry) = tt.probe(pos.hash()) else {
            break;
        };
        let moves = crate::movegen::generate_moves(&pos);
        let Some(mv) = moves.iter().find(|mv| mv.pack() == entry.best_move) else {
            break;
        };
        pv.push(*mv);
        pos = crate::movegen::apply_move(&pos, mv);
    }
    pv
}

#[cfg(test)]
mod tests {
    use super::iterative_deepening;
    use crate::{position::Position, tt::TranspositionTable};
    use std::time::Duration;

    #[test]
    fn completes_at_least_depth_one_on_the_initial_position() {
        let pos = Position::initial();
        let mut tt = TranspositionTable::with_size_power(12);
        let result = iterative_deepening(&pos, Duration::from_millis(200), &mut tt, None);
        assert!(result.depth >= 1);
        assert!(result.best.is_some());
    }

    #[test]
    fn finds_the_forced_capture_of_the_last_enemy_piece() {
        let mut board = vec![b'.'; 32];
        board[13] = b'M';
        board[17] = b'm';
        let board = String::from_utf8(board).unwrap();
        let pos = crate::notation::from_notation(&format!("{board} w 0")).unwrap();
        let mut tt = TranspositionTable::with_size_power(12);
        let result = iterative_deepening(&pos, Duration::from_millis(100), &mut tt, None);
        let mv = result.best.expect("a move should be found");
        assert_eq!(mv.captured(), &[crate::defs::Square(13)]);
    }
}

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

#![cfg(test)]

//! Perft timing: a small fixed set of positions, each walked to a chosen
//! depth while timing the walk.
//!
//! Pinning exact expected node counts per position requires capturing them
//! once from a known-correct implementation, which isn't available here
//! (see the "stable, not pinned" perft test in `movegen.rs`), so this module
//! only checks that perft terminates and reports timing; it is a
//! smoke/benchmark harness, not a correctness oracle. Run with `cargo test
//! --release bench -- --nocapture` to see timings.

use std::time::Instant;

use crate::{
    movegen::{apply_move, generate_moves},
    notation::from_notation,
    position::Position,
};

/// One position to walk, and the depth to walk it to.
struct BenchPosition {
    /// A human label, printed alongside the timing.
    label: &'static str,
    /// The position to start from.
    position: Position,
    /// How many plies to walk.
    depth: u32,
}

/// A handful of positions spanning the opening, a midgame with kings on
/// both sides, and a sparse near-endgame, chosen to exercise both the quiet-
/// move and forced-capture branches of the generator.
fn bench_positions() -> Vec<BenchPosition> {
    vec![
        BenchPosition {
            label: "initial position",
            position: Position::initial(),
            depth: 9,
        },
        BenchPosition {
            label: "midgame, kings and men mixed",
            position: from_notation(
                "...M.M.k..m.M...m.......K.m.m.m. w 12",
            )
            .expect("valid notation"),
            depth: 7,
        },
        BenchPosition {
            label: "sparse endgame, kings only",
            position: from_notation(
                "................k.......K......K w 0",
            )
            .expect("valid notation"),
            depth: 11,
        },
    ]
}

/// Counts leaf positions `depth` plies from `pos`, recursing through every
/// legal move at each ply (same recursive shape as `movegen`'s own perft,
/// kept separate so this module doesn't depend on a `#[cfg(test)]` item
/// from another module).
fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves.iter().map(|mv| perft(&apply_move(pos, mv), depth - 1)).sum()
}

#[test]
fn perft_bench() {
    for bench in bench_positions() {
        let start = Instant::now();
        let nodes = perft(&bench.position, bench.depth);
        let elapsed = start.elapsed();
        println!(
            "{}: perft({}) = {nodes} nodes in {elapsed:?} ({:.0} nodes/ms)",
            bench.label,
            bench.depth,
            nodes as f64 / elapsed.as_millis().max(1) as f64,
        );
        assert!(nodes > 0, "{} produced no leaf nodes at depth {}", bench.label, bench.depth);
    }
}

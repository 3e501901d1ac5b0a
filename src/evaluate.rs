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

//! Static evaluation: material, mobility, center control, promotion
//! progress, back-rank guards, king proximity, trapped kings, capture swing
//! and simplification, blended by game phase (spec §4.4).

use crate::{
    bitboard::Bitboard,
    defs::{Direction, Side, Square},
    lookups,
    movegen::capture_stats,
    position::{Position, STARTING_PIECE_COUNT},
};

/// The flat material value of a man.
const W_MAN: i32 = 100;
/// Fixed mobility weight per legal man destination.
const W_MOBILITY_MEN: i32 = 2;
/// Fixed mobility weight per legal king destination.
const W_MOBILITY_KING: i32 = 3;
/// Weight for occupying a center square.
const W_CENTER: i32 = 2;
/// Weight for a man standing on its own back rank.
const W_BACK_RANK_GUARD: i32 = 3;
/// Weight applied to `6 - averageKingDistance`.
const W_KING_PROXIMITY: i32 = 2;
/// Weight (negative) per own king with no legal step.
const W_TRAPPED_KING: i32 = -12;
/// Base weight for the difference in maximal capture-chain length.
const W_CAPTURE_SWING_BASE: i32 = 90;
/// Added to the capture-swing weight once the endgame weight is high.
const W_CAPTURE_SWING_ENDGAME_BONUS: i32 = 20;
/// Base weight for the difference in threatened-square counts.
const W_CAPTURE_TARGETS_BASE: i32 = 45;

/// Returns `pos` evaluated from the side-to-move's perspective, in integer
/// centipawn-like units.
#[must_use]
pub fn evaluate(pos: &Position) -> i32 {
    let total = pos.total_piece_count();
    let gp = (total as f64 / f64::from(STARTING_PIECE_COUNT)).clamp(0.0, 1.0);
    let eg = 1.0 - gp;

    let mover_men = pos.mover_men().popcount();
    let mover_kings = pos.mover_kings().popcount();
    let opp_men = pos.opponent_men().popcount();
    let opp_kings = pos.opponent_kings().popcount();
    let opp_total = opp_men + opp_kings;

    let mover_material = mover_men + 2 * mover_kings;
    let opp_material = opp_men + 2 * opp_kings;
    let leader = mover_material > opp_material;

    let w_king = weight_king(eg, leader, opp_total);
    let w_promote_progress = 6 + round(6.0 * eg);
    let w_simplification = weight_simplification(eg, leader, opp_total);
    let w_capture_swing = W_CAPTURE_SWING_BASE + if eg >= 0.7 { W_CAPTURE_SWING_ENDGAME_BONUS } else { 0 };
    let w_capture_targets = W_CAPTURE_TARGETS_BASE + round(4.0 * eg);

    let mut score = 0;
    score += (mover_men as i32 - opp_men as i32) * W_MAN;
    score += (mover_kings as i32 - opp_kings as i32) * w_king;
    score += mobility_term(pos);
    score += center_term(pos) * W_CENTER;
    score += promotion_progress_term(pos, w_promote_progress);
    score += back_rank_term(pos) * W_BACK_RANK_GUARD;
    score += king_proximity_term(pos) * W_KING_PROXIMITY;
    score += trapped_king_term(pos) * W_TRAPPED_KING;
    score += capture_swing_term(pos, w_capture_swing, w_capture_targets);
    score += simplification_term(total, mover_material, opp_material, w_simplification);
    score += finisher_bonus(leader, opp_total);

    score
}

/// Rounds `x` to the nearest integer, ties away from zero (matches the
/// spec's `round(...)` notation).
fn round(x: f64) -> i32 {
    x.round() as i32
}

/// `W_king`: 210, reduced as the mover's lead solidifies into the endgame
/// (spec §4.4).
fn weight_king(eg: f64, leader: bool, opp_total: u32) -> i32 {
    let mut w = 210;
    if eg >= 0.5 && leader {
        w -= 60;
    }
    if eg >= 0.8 && leader && opp_total <= 2 {
        w -= 90;
    }
    w
}

/// `W_simplification`: rewards trading down once ahead.
fn weight_simplification(eg: f64, leader: bool, opp_total: u32) -> i32 {
    let mut w = 6;
    if leader {
        w += round(8.0 * eg);
        if opp_total <= 2 {
            w += 10;
        }
    }
    w
}

/// Mobility: legal single-step destinations per piece, men and kings
/// weighted separately.
fn mobility_term(pos: &Position) -> i32 {
    let occupied = pos.occupied();

    let men_mobility = |side: Side, men: Bitboard| -> i32 {
        let mut count = 0;
        for from in men {
            for dir in side.forward_directions() {
                if let Some(to) = lookups::step(from, dir) {
                    if !occupied.test(to) {
                        count += 1;
                    }
                }
            }
        }
        count
    };
    let king_mobility = |kings: Bitboard| -> i32 {
        let mut count = 0;
        for from in kings {
            for dir in Direction::ALL {
                if !lookups::walk_empty(from, dir, occupied).is_empty() {
                    count += 1;
                }
            }
        }
        count
    };

    let mover_side = pos.side_to_move();
    let opp_side = mover_side.flip();
    let mover_m = men_mobility(mover_side, pos.mover_men());
    let opp_m = men_mobility(opp_side, pos.opponent_men());
    let mover_k = king_mobility(pos.mover_kings());
    let opp_k = king_mobility(pos.opponent_kings());

    (mover_m - opp_m) * W_MOBILITY_MEN + (mover_k - opp_k) * W_MOBILITY_KING
}

/// Whether `(row, col)` both lie in `[2, 5]`.
fn is_center(square: Square) -> bool {
    let (row, col) = square.row_col();
    (2..=5).contains(&row) && (2..=5).contains(&col)
}

/// Center control: pieces of either side standing on a center square.
fn center_term(pos: &Position) -> i32 {
    let count = |bb: Bitboard| bb.into_iter().filter(|&sq| is_center(sq)).count() as i32;
    count(pos.mover_pieces()) - count(pos.opponent_pieces())
}

/// Distance from `square` to its side's promotion row.
fn distance_to_promotion(side: Side, square: Square) -> i32 {
    let row = i32::from(square.row_col().0);
    if side.0 == Side::P1.0 {
        row
    } else {
        7 - row
    }
}

/// Promotion progress: closer men are worth more, scaled by `weight / 10`.
fn promotion_progress_term(pos: &Position, weight: i32) -> i32 {
    let mover_side = pos.side_to_move();
    let opp_side = mover_side.flip();
    let our_sum: i32 = pos.mover_men().into_iter().map(|sq| distance_to_promotion(mover_side, sq)).sum();
    let their_sum: i32 = pos.opponent_men().into_iter().map(|sq| distance_to_promotion(opp_side, sq)).sum();
    weight * (their_sum - our_sum) / 10
}

/// Back-rank guards: own men still defending their own back rank.
fn back_rank_term(pos: &Position) -> i32 {
    let mover_side = pos.side_to_move();
    let opp_side = mover_side.flip();
    let guards = |side: Side, men: Bitboard| -> i32 {
        men.into_iter()
            .filter(|&sq| {
                if side.0 == Side::P1.0 {
                    sq.is_p2_promotion_row()
                } else {
                    sq.is_p1_promotion_row()
                }
            })
            .count() as i32
    };
    guards(mover_side, pos.mover_men()) - guards(opp_side, pos.opponent_men())
}

/// Chebyshev distance between two squares.
fn chebyshev(a: Square, b: Square) -> i32 {
    let (ar, ac) = a.row_col();
    let (br, bc) = b.row_col();
    (i32::from(ar) - i32::from(br)).abs().max((i32::from(ac) - i32::from(bc)).abs())
}

/// King proximity: `6 - averageDistanceToNearestEnemy`, clamped at 0, for
/// one side's kings against the other's pieces.
fn proximity_value(kings: Bitboard, enemies: Bitboard) -> i32 {
    if kings.is_empty() || enemies.is_empty() {
        return 0;
    }
    let mut total = 0_i64;
    let mut n = 0_i64;
    for king in kings {
        let nearest = enemies.into_iter().map(|e| chebyshev(king, e)).min().unwrap_or(0);
        total += i64::from(nearest);
        n += 1;
    }
    let average = total as f64 / n as f64;
    (6.0 - average).max(0.0).round() as i32
}

/// King proximity term, mover's kings against opponent's kings.
fn king_proximity_term(pos: &Position) -> i32 {
    let mover = proximity_value(pos.mover_kings(), pos.opponent_pieces());
    let opp = proximity_value(pos.opponent_kings(), pos.mover_pieces());
    mover - opp
}

/// Trapped kings: own kings with zero legal single-step exits.
fn trapped_count(kings: Bitboard, occupied: Bitboard) -> i32 {
    kings
        .into_iter()
        .filter(|&king| Direction::ALL.iter().all(|&dir| lookups::step(king, dir).map_or(true, |to| occupied.test(to))))
        .count() as i32
}

/// Trapped-king term, mover's trapped kings against opponent's.
fn trapped_king_term(pos: &Position) -> i32 {
    let occupied = pos.occupied();
    trapped_count(pos.mover_kings(), occupied) - trapped_count(pos.opponent_kings(), occupied)
}

/// Capture swing: the difference in maximal as-if-to-move capture-chain
/// length and in threatened-square counts (spec §4.4).
fn capture_swing_term(pos: &Position, w_swing: i32, w_targets: i32) -> i32 {
    let (our_max, our_threats) = capture_stats(pos);
    let opponent_to_move = flip_side_to_move(pos);
    let (their_max, their_threats) = capture_stats(&opponent_to_move);

    w_swing * (our_max as i32 - their_max as i32) + w_targets * (our_threats.popcount() as i32 - their_threats.popcount() as i32)
}

/// Returns a copy of `pos` with the side to move flipped, keeping the
/// bitboards and clock unchanged. Used only to ask "what could the other
/// side capture from here", never returned to a caller as a real position.
fn flip_side_to_move(pos: &Position) -> Position {
    Position::from_parts(
        pos.p1_men(),
        pos.p1_kings(),
        pos.p2_men(),
        pos.p2_kings(),
        pos.side_to_move().flip(),
        pos.halfmove_clock(),
    )
}

/// Simplification: rewards shedding pieces once materially ahead (sign taken
/// from the material lead, king counted as two men).
fn simplification_term(total: u32, mover_material: u32, opp_material: u32, weight: i32) -> i32 {
    let sign = match mover_material.cmp(&opp_material) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    };
    sign * weight * (STARTING_PIECE_COUNT as i32 - total as i32)
}

/// Endgame finisher bonus: a material lead against a nearly-empty opposing
/// side is worth extra regardless of the other terms.
fn finisher_bonus(leader: bool, opp_total: u32) -> i32 {
    if !leader {
        return 0;
    }
    if opp_total == 1 {
        140
    } else if opp_total <= 2 {
        70
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::notation::from_notation;

    #[test]
    fn symmetric_position_is_roughly_balanced() {
        let pos = crate::position::Position::initial();
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn material_advantage_scores_positive() {
        let board = format!("m{}", ".".repeat(31));
        let pos = from_notation(&format!("{board} w 0")).unwrap();
        assert!(evaluate(&pos) > 0);
    }

    #[test]
    fn being_down_a_man_scores_negative() {
        let board = format!("M{}", ".".repeat(31));
        let pos = from_notation(&format!("{board} w 0")).unwrap();
        assert!(evaluate(&pos) < 0);
    }
}

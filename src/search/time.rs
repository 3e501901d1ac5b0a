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

//! Cooperative, deadline-based cancellation (spec §4.7.7 / §5).
//!
//! There are no background threads: every recursive call and every move
//! iteration polls [`Deadline::expired`], and on exceedance the current
//! frame returns conservatively rather than unwinding with an error.

use std::time::{Duration, Instant};

/// A wall-clock deadline for one search invocation.
#[derive(Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `budget` from now.
    #[must_use]
    pub fn from_now(budget: Duration) -> Self {
        Self(Instant::now() + budget)
    }

    /// A deadline that never expires, for untimed searches (e.g. tests
    /// driving the recursive search directly).
    #[must_use]
    pub fn never() -> Self {
        Self(Instant::now() + Duration::from_secs(365 * 24 * 60 * 60))
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn expired(self) -> bool {
        Instant::now() >= self.0
    }
}

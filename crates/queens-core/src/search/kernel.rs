//! Sequential backtracking kernel.
//!
//! Counts completions of a partial placement by depth-first search over the
//! free-column mask of each row. No sharing, no allocation; recursion depth
//! is bounded by the board size.

use crate::board::BoardState;

/// Count every completed placement reachable from `state`.
///
/// Each recursion step scans the free columns lowest bit first, the same
/// order a bitboard pop loop visits squares.
pub fn count_completions(state: BoardState, n: u32) -> u64 {
    if state.is_complete(n) {
        return 1;
    }

    let mut free = state.free_columns(n);
    let mut found = 0u64;
    while free != 0 {
        let pos = free & free.wrapping_neg();
        found += count_completions(state.place(pos), n);
        free &= free - 1;
    }
    found
}

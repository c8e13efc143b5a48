//! Bounded-concurrency strategies over the sequential kernel.
//!
//! Both strategies cap the number of simultaneously active search units at
//! the configured budget and share the same aggregation contract: a unit
//! owns its accumulator until completion, publishes it exactly once, and the
//! caller never sees a total before every unit that will ever run has both
//! started and finished.
//!
//! - [`level_pool`]: fan out once at a pre-computed recursion depth into a
//!   bounded task channel; await exactly the number of tasks actually
//!   emitted.
//! - [`fork_join`]: decide at every branch point whether to hand the
//!   subtree to the pool, gated by a permit pool; completion is the unique
//!   zero-crossing of an outstanding-task counter.

pub mod fork_join;
pub mod level_pool;

use crate::board::BoardState;
use crate::config::{SolverConfig, Strategy};
use crate::search::kernel;

/// Root of a subtree handed off to a worker.
///
/// Fungible and consumed exactly once; carries no identity beyond the
/// captured board state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchTask {
    pub root: BoardState,
}

/// Run the configured strategy.
///
/// A budget of one has no parallelism to coordinate, so it takes the
/// sequential kernel directly.
pub(crate) fn count(n: u32, config: &SolverConfig) -> u64 {
    let budget = config.budget();
    if budget == 1 {
        return kernel::count_completions(BoardState::EMPTY, n);
    }
    match config.strategy() {
        Strategy::LevelPool => level_pool::count(n, budget),
        Strategy::ForkJoin => fork_join::count(n, budget),
    }
}

//! Solver configuration.
//!
//! The concurrency budget is an explicit value injected into the solver, so
//! harnesses can pin it for deterministic runs. The hardware-derived default
//! is read from the process exactly once.

use once_cell::sync::Lazy;

/// Upper clamp on the concurrency budget.
///
/// The level-pool strategy pre-sizes its task channel to the first power
/// `n^L >= budget`, which stays under `32 * budget`. Budgets past hardware
/// parallelism only add hand-off overhead; the returned count never changes.
pub const MAX_CONCURRENCY_BUDGET: usize = 1024;

/// Default budget: twice the available hardware parallelism.
static DEFAULT_BUDGET: Lazy<usize> = Lazy::new(|| {
    std::thread::available_parallelism()
        .map(|p| p.get() * 2)
        .unwrap_or(2)
        .min(MAX_CONCURRENCY_BUDGET)
});

/// Task-distribution strategy for the parallel search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Fan out once at a pre-computed recursion depth; workers drain a
    /// bounded task channel sized from the branching estimate.
    LevelPool,
    /// Decide live at every branch point whether to hand the subtree to the
    /// pool, gated by a non-blocking permit pool.
    ForkJoin,
}

/// Configuration for one solver invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    budget: usize,
    strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            budget: *DEFAULT_BUDGET,
            strategy: Strategy::ForkJoin,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of simultaneously active search units.
    ///
    /// Clamped to `[1, MAX_CONCURRENCY_BUDGET]`. Affects wall-clock time
    /// only, never the returned count.
    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget.clamp(1, MAX_CONCURRENCY_BUDGET);
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

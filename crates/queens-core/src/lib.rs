//! # queens-core
//!
//! Parallel N-Queens counting solver.
//!
//! Enumerates every solution for board sizes up to 32 and returns the total
//! count, using a bitmask backtracking kernel under bounded parallelism.
//!
//! ## Module map
//!
//! - `board`: bitmask encoding of partial placements
//! - `config`: concurrency budget and strategy selection
//! - `error`: solver error types
//! - `search`: the sequential kernel and the two parallel strategies
//!
//! ## Entry point
//!
//! ```
//! let count = queens_core::solve(8).unwrap();
//! assert_eq!(count, 92);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod search;

mod solver;

pub use board::{BoardState, MAX_BOARD_SIZE};
pub use config::{SolverConfig, Strategy, MAX_CONCURRENCY_BUDGET};
pub use error::{SolveError, SolveResult};
pub use solver::{solve, solve_with};

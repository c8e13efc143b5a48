//! Error types for the solver entry point.

use crate::board::MAX_BOARD_SIZE;

/// Solver errors.
///
/// The search itself is total over its accepted domain; the only failure is
/// rejecting a board size whose diagonal masks cannot be encoded.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Board size exceeds the 64-bit diagonal encoding limit.
    #[error("problem size {0} exceeds limit ({MAX_BOARD_SIZE})")]
    ProblemTooLarge(u32),
}

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_too_large_names_the_limit() {
        let msg = SolveError::ProblemTooLarge(33).to_string();
        assert_eq!(msg, "problem size 33 exceeds limit (32)");
    }
}

//! Known-count and validation tests for the solver entry points.

use queens_core::{solve, solve_with, SolveError, SolverConfig, Strategy, MAX_BOARD_SIZE};

/// Canonical solution counts, OEIS A000170 (with the conventional 1 for the
/// empty board).
const KNOWN_COUNTS: [(u32, u64); 17] = [
    (0, 1),
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
    (9, 352),
    (10, 724),
    (11, 2680),
    (12, 14200),
    (13, 73712),
    (14, 365596),
    (15, 2279184),
    (16, 14772512),
];

/// Larger sizes, minutes to hours of wall clock each.
const SLOW_COUNTS: [(u32, u64); 7] = [
    (17, 95815104),
    (18, 666090624),
    (19, 4968057848),
    (20, 39029188884),
    (21, 314666222712),
    (22, 2691008701644),
    (23, 24233937684440),
];

#[test]
fn level_pool_matches_known_counts() {
    let config = SolverConfig::new().with_budget(4).with_strategy(Strategy::LevelPool);
    for (n, want) in KNOWN_COUNTS.iter().take(14) {
        assert_eq!(solve_with(*n, &config), Ok(*want), "n={n}");
    }
}

#[test]
fn fork_join_matches_known_counts() {
    let config = SolverConfig::new().with_budget(4).with_strategy(Strategy::ForkJoin);
    for (n, want) in KNOWN_COUNTS.iter().take(14) {
        assert_eq!(solve_with(*n, &config), Ok(*want), "n={n}");
    }
}

#[test]
fn default_config_matches_known_counts_through_fifteen() {
    for (n, want) in KNOWN_COUNTS.iter().take(16) {
        assert_eq!(solve(*n), Ok(*want), "n={n}");
    }
}

#[test]
#[ignore = "several seconds even in release"]
fn default_config_matches_sixteen() {
    let (n, want) = KNOWN_COUNTS[16];
    assert_eq!(solve(n), Ok(want));
}

#[test]
#[ignore = "minutes to hours per size"]
fn deep_sizes_match_known_counts() {
    for (n, want) in SLOW_COUNTS {
        assert_eq!(solve(n), Ok(want), "n={n}");
    }
}

#[test]
fn no_placement_exists_on_two_and_three_boards() {
    assert_eq!(solve(2), Ok(0));
    assert_eq!(solve(3), Ok(0));
}

#[test]
fn oversize_boards_are_rejected() {
    for n in [MAX_BOARD_SIZE + 1, 100_000, 99_999_999] {
        assert_eq!(solve(n), Err(SolveError::ProblemTooLarge(n)), "n={n}");
    }
}

#[test]
fn rejection_reports_the_limit() {
    let err = solve(33).unwrap_err();
    assert_eq!(err.to_string(), "problem size 33 exceeds limit (32)");
}

#[test]
fn repeated_calls_are_idempotent() {
    let first = solve(10).unwrap();
    for _ in 0..3 {
        assert_eq!(solve(10).unwrap(), first);
    }
}

//! Level-bounded worker pool.
//!
//! A sequential seeding pass walks the tree down to a pre-computed working
//! level and ships every state reaching that row into a bounded task
//! channel instead of recursing further. Resident workers drain the channel
//! and run the kernel per task, publishing one partial count each.
//!
//! The working level is the shallowest depth whose branching estimate
//! `n^L` reaches the budget. The estimate only sizes the channels; the
//! caller awaits the exact number of tasks the seeding pass actually
//! emitted, so a mis-estimate under heavy pruning cannot stall or
//! over-await the join.

use crossbeam::channel::{bounded, Receiver, Sender};
use log::{trace, warn};
use std::thread;

use super::SearchTask;
use crate::board::BoardState;
use crate::search::kernel;

/// Count all solutions for an `n`-board with a pool of `budget` workers.
pub(crate) fn count(n: u32, budget: usize) -> u64 {
    let Some((level, capacity)) = working_level(n, budget) else {
        // Tree too small to reach any fan-out depth; solve inline.
        return kernel::count_completions(BoardState::EMPTY, n);
    };

    // Channel capacities hold the worst case, so neither side ever blocks:
    // states at the working level number at most n^level, and results come
    // one per task.
    let (task_tx, task_rx) = bounded::<SearchTask>(capacity);
    let (result_tx, result_rx) = bounded::<u64>(capacity);

    let mut workers = Vec::with_capacity(budget);
    for id in 0..budget {
        let task_rx = task_rx.clone();
        let result_tx = result_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("queens-pool-{id}"))
            .spawn(move || worker_loop(n, task_rx, result_tx))
            .expect("spawn pool worker");
        workers.push(handle);
    }
    drop(task_rx);
    drop(result_tx);

    let mut total = 0u64;
    let emitted = seed(BoardState::EMPTY, n, level, &task_tx, &mut total);
    // Closing the task channel lets idle workers exit once it drains.
    drop(task_tx);
    trace!("level_pool: level={level} capacity={capacity} emitted={emitted}");

    for _ in 0..emitted {
        match result_rx.recv() {
            Ok(partial) => total += partial,
            Err(_) => {
                warn!("level_pool: result channel closed before all tasks reported");
                break;
            }
        }
    }

    for handle in workers {
        if handle.join().is_err() {
            warn!("level_pool: worker panicked");
        }
    }

    total
}

/// Shallowest row whose branching estimate reaches the budget, plus that
/// estimate as channel capacity. `None` when no depth of this board fans
/// wide enough, in which case the whole search stays sequential.
fn working_level(n: u32, budget: usize) -> Option<(u32, usize)> {
    let mut estimate: u64 = 1;
    for level in 1..=n {
        estimate = estimate.saturating_mul(n as u64);
        if estimate >= budget as u64 {
            return Some((level, estimate as usize));
        }
    }
    None
}

/// Sequential pass above the working level.
///
/// Ships each state reaching `level` as a task and returns the exact number
/// shipped. Solutions found before the working level (only possible when
/// the board completes above it) go straight into `acc`.
fn seed(state: BoardState, n: u32, level: u32, task_tx: &Sender<SearchTask>, acc: &mut u64) -> usize {
    if state.is_complete(n) {
        *acc += 1;
        return 0;
    }

    let mut free = state.free_columns(n);
    let mut emitted = 0usize;
    while free != 0 {
        let pos = free & free.wrapping_neg();
        let next = state.place(pos);
        if next.row() == level {
            task_tx.send(SearchTask { root: next }).expect("task channel open");
            emitted += 1;
        } else {
            emitted += seed(next, n, level, task_tx, acc);
        }
        free &= free - 1;
    }
    emitted
}

/// Runs tasks to completion with the sequential kernel; no further fan-out.
/// The partial count needs no synchronization while the worker owns it.
fn worker_loop(n: u32, task_rx: Receiver<SearchTask>, result_tx: Sender<u64>) {
    for task in task_rx.iter() {
        let partial = kernel::count_completions(task.root, n);
        let _ = result_tx.send(partial);
    }
}

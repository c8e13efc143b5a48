//! Permit-gated fork-join pool.
//!
//! Resident workers serve a shared task channel. While a worker searches a
//! subtree it may, at any branch point, hand the branch to the pool as a
//! fresh task instead of recursing, provided it wins a permit from a
//! fixed-capacity pool. Permit exhaustion is ordinary control flow: the
//! branch is searched inline, exactly as sequential backtracking would.
//!
//! Termination uses start/finish accounting on an atomic outstanding-task
//! counter. The increment for a forked task happens in its parent before
//! the hand-off, while the parent itself is still counted, so the counter
//! can only reach zero after every task that will ever exist has finished.
//! The unique zero-crossing fires the completion signal the caller blocks
//! on. No acquire ever blocks, so the pool cannot deadlock.

use crossbeam::channel::{bounded, unbounded, Receiver, Sender};
use log::{trace, warn};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use super::SearchTask;
use crate::board::BoardState;

/// Counting permit pool bounding how many subtrees may be in flight as
/// independent tasks. Acquisition never blocks.
pub(crate) struct PermitPool {
    available: AtomicUsize,
}

impl PermitPool {
    pub(crate) fn new(capacity: usize) -> Self {
        PermitPool {
            available: AtomicUsize::new(capacity),
        }
    }

    /// Take one permit if any remain.
    pub(crate) fn try_acquire(&self) -> bool {
        let mut current = self.available.load(Ordering::Relaxed);
        loop {
            if current == 0 {
                return false;
            }
            match self.available.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Acquire,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    pub(crate) fn release(&self) {
        self.available.fetch_add(1, Ordering::Release);
    }

    #[cfg(test)]
    fn available(&self) -> usize {
        self.available.load(Ordering::Relaxed)
    }
}

enum WorkerCommand {
    Run { task: SearchTask, permitted: bool },
    Shutdown,
}

/// State shared by the caller and every worker for one invocation.
struct ForkCtx {
    n: u32,
    task_tx: Sender<WorkerCommand>,
    permits: PermitPool,
    /// Tasks spawned but not yet finished. Seeded at 1 for the root task.
    outstanding: AtomicUsize,
    /// Published partial counts. One add per finished task.
    solutions: AtomicU64,
    done_tx: Sender<()>,
}

/// Count all solutions for an `n`-board with `budget` resident workers.
pub(crate) fn count(n: u32, budget: usize) -> u64 {
    let (task_tx, task_rx) = unbounded::<WorkerCommand>();
    let (done_tx, done_rx) = bounded::<()>(1);

    let ctx = Arc::new(ForkCtx {
        n,
        task_tx: task_tx.clone(),
        permits: PermitPool::new(budget),
        outstanding: AtomicUsize::new(1),
        solutions: AtomicU64::new(0),
        done_tx,
    });

    let mut workers = Vec::with_capacity(budget);
    for id in 0..budget {
        let ctx = Arc::clone(&ctx);
        let task_rx = task_rx.clone();
        let handle = thread::Builder::new()
            .name(format!("queens-fork-{id}"))
            .spawn(move || worker_loop(&ctx, &task_rx))
            .expect("spawn fork worker");
        workers.push(handle);
    }
    drop(task_rx);

    // Seed the root task; its start is the pre-seeded count of 1.
    task_tx
        .send(WorkerCommand::Run {
            task: SearchTask {
                root: BoardState::EMPTY,
            },
            permitted: false,
        })
        .expect("task channel open");

    if done_rx.recv().is_err() {
        warn!("fork_join: completion channel closed before zero-crossing");
    }

    for _ in 0..budget {
        let _ = task_tx.send(WorkerCommand::Shutdown);
    }
    for handle in workers {
        if handle.join().is_err() {
            warn!("fork_join: worker panicked");
        }
    }

    trace!("fork_join: n={n} budget={budget} done");
    ctx.solutions.load(Ordering::Acquire)
}

fn worker_loop(ctx: &ForkCtx, task_rx: &Receiver<WorkerCommand>) {
    for command in task_rx.iter() {
        match command {
            WorkerCommand::Run { task, permitted } => run_task(ctx, task, permitted),
            WorkerCommand::Shutdown => break,
        }
    }
}

/// Search one task's subtree to completion and publish its count once.
fn run_task(ctx: &ForkCtx, task: SearchTask, permitted: bool) {
    let mut local = 0u64;
    descend(ctx, task.root, &mut local);

    if local != 0 {
        ctx.solutions.fetch_add(local, Ordering::Relaxed);
    }
    if permitted {
        ctx.permits.release();
    }
    // AcqRel chains every task's published count into the final load
    // behind the completion signal.
    if ctx.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
        let _ = ctx.done_tx.send(());
    }
}

/// Backtracking step with a live fork decision at every branch.
fn descend(ctx: &ForkCtx, state: BoardState, local: &mut u64) {
    if state.is_complete(ctx.n) {
        *local += 1;
        return;
    }

    let mut free = state.free_columns(ctx.n);
    while free != 0 {
        let pos = free & free.wrapping_neg();
        let next = state.place(pos);
        if ctx.permits.try_acquire() {
            fork(ctx, next, local);
        } else {
            descend(ctx, next, local);
        }
        free &= free - 1;
    }
}

/// Hand a subtree to the pool. The outstanding increment precedes the
/// enqueue, and the parent task is still counted, so the aggregate counter
/// stays positive until the child has finished.
fn fork(ctx: &ForkCtx, root: BoardState, local: &mut u64) {
    ctx.outstanding.fetch_add(1, Ordering::Relaxed);
    let command = WorkerCommand::Run {
        task: SearchTask { root },
        permitted: true,
    };
    if ctx.task_tx.send(command).is_err() {
        // Channel gone means shutdown raced in; fall back to inline so the
        // count stays exact.
        ctx.outstanding.fetch_sub(1, Ordering::AcqRel);
        ctx.permits.release();
        descend(ctx, root, local);
    }
}

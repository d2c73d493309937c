//! Deferred work: the scheduler seam used by every timed behavior, a
//! deterministic clock for driving it in tests, and the two rate limiters
//! used by the scroll handlers.

use std::{cell::RefCell, rc::Rc, time::Duration};

pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler {
    fn after(&self, delay: Duration, task: Task);
}

struct Pending {
    deadline: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

/// Virtual time. Tasks only run when the clock is advanced, in deadline
/// order, ties broken by scheduling order.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    fn pop_due(&self, limit: Option<Duration>) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| limit.is_none_or(|l| p.deadline <= l))
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(i, _)| i)?;
        let next = state.pending.swap_remove(index);
        state.now = state.now.max(next.deadline);
        Some(next.task)
    }

    /// Runs the next queued task, moving the clock to its deadline.
    pub fn run_next(&self) -> bool {
        // borrow released before the task runs so it can reschedule
        let task = self.pop_due(None);
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward, running everything that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(Some(target)) {
            task();
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualClock {
    fn after(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let deadline = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.pending.push(Pending {
            deadline,
            seq,
            task,
        });
    }
}

/// Allows at most one outstanding per-frame recomputation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns true if the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    pub fn release(&mut self) {
        self.ticking = false;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn next(self) -> Ticket {
        Ticket(self.0 + 1)
    }
}

/// Trailing debounce. Every trigger supersedes the previous one; a
/// delayed callback only acts if its ticket is still current.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    latest: Ticket,
}

impl Debounce {
    pub fn trigger(&mut self) -> Ticket {
        self.latest = self.latest.next();
        self.latest
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == ticket
    }
}

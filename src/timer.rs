//! One-shot deferred tasks on a virtual clock.
//!
//! The page is single-threaded: nothing here runs on its own. The page asks
//! for due tasks with [`Scheduler::pop_due`] when it advances time, and the
//! async loop sleeps until [`Scheduler::next_due`]. Tasks are never
//! cancelled; a task that no longer applies is a no-op when it fires.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::dom::node::NodeId;

/// Work deferred to a later turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Write an element's inline opacity (second half of a fade-in).
    SetOpacity { node: NodeId, opacity: f32 },
    /// Sample the smooth-scroll animation with this generation.
    ScrollFrame { generation: u64 },
}

/// Handle returned by [`Scheduler::schedule`], unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    id: TimerId,
    task: Task,
}

// Min-heap on (due, id): earliest first, ties in scheduling order.
impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.id).cmp(&(self.due, self.id))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Scheduled {}

/// Virtual clock plus a queue of pending one-shot tasks.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the page loaded.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        tracing::trace!(?task, ?due, "task scheduled");
        self.queue.push(Scheduled { due, id, task });
        id
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|s| s.due)
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        if self.next_due()? > until {
            return None;
        }
        let scheduled = self.queue.pop()?;
        self.now = self.now.max(scheduled.due);
        Some(scheduled.task)
    }

    /// Move the clock forward to `t`. The clock never runs backwards.
    pub fn advance_clock(&mut self, t: Duration) {
        self.now = self.now.max(t);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

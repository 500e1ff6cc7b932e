//! Deferred tasks driven by the host event loop.
//!
//! Nothing runs on its own: the owner calls `drain_due(now)` from its `tick`
//! and applies whatever came due. Tasks fire in deadline order, ties in
//! scheduling order.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Scheduled<T> {
    deadline: Instant,
    id: TaskId,
    task: T,
}

pub struct Scheduler<T> {
    next_id: u64,
    /// Sorted by `(deadline, id)`.
    queue: Vec<Scheduled<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            queue: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let deadline = now + delay;
        let at = self
            .queue
            .partition_point(|s| (s.deadline, s.id) <= (deadline, id));
        self.queue.insert(at, Scheduled { deadline, id, task });
        id
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.queue.iter().position(|s| s.id == id) {
            Some(index) => {
                self.queue.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns every task whose deadline is at or before `now`.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let due = self.queue.partition_point(|s| s.deadline <= now);
        self.queue.drain(..due).map(|s| s.task).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.queue.iter().any(|s| s.id == id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first().map(|s| s.deadline)
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, MS * 500, "hide");

        assert!(scheduler.drain_due(start + MS * 499).is_empty());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.next_deadline(), Some(start + MS * 500));

        assert_eq!(scheduler.drain_due(start + MS * 500), vec!["hide"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_fires_in_deadline_then_schedule_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, MS * 300, "late");
        scheduler.schedule(start, MS * 100, "first");
        scheduler.schedule(start, MS * 100, "second");

        assert_eq!(
            scheduler.drain_due(start + MS * 1000),
            vec!["first", "second", "late"]
        );
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let kept = scheduler.schedule(start, MS * 10, 1);
        let cancelled = scheduler.schedule(start, MS * 10, 2);

        assert!(scheduler.cancel(cancelled));
        assert!(!scheduler.cancel(cancelled));
        assert!(scheduler.is_pending(kept));
        assert!(!scheduler.is_pending(cancelled));

        assert_eq!(scheduler.drain_due(start + MS * 10), vec![1]);
        assert!(!scheduler.cancel(kept));
    }
}

//! Virtual-time scheduler for deferred visual effects.
//!
//! Everything runs on the caller's thread. Time only moves when the owner
//! advances it, so the app can feed real frame deltas while tests step through
//! an animation deterministically.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle returned by [`Scheduler::schedule`], used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Single-threaded queue of tasks that become due after a delay.
///
/// Tasks with the same due time run in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TaskId), T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule `task` to run `delay` after the current virtual time
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), task);
        id
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let key = self.queue.keys().find(|(_, task_id)| *task_id == id).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drop every pending task
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Pop the earliest task due at or before `deadline`.
    ///
    /// Virtual time moves to the popped task's due time, so anything the
    /// caller schedules while handling it is timed from that instant.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > deadline {
            return None;
        }
        let ((due, _), task) = self.queue.pop_first()?;
        self.now = self.now.max(due);
        Some(task)
    }

    /// Move virtual time forward to `deadline` without running anything
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Advance by `dt` and return every task that became due, in order.
    ///
    /// Unlike [`Scheduler::pop_due`], tasks scheduled by the caller after this
    /// returns are timed from the new current time.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        let deadline = self.now + dt;
        let mut due = Vec::new();
        while let Some(task) = self.pop_due(deadline) {
            due.push(task);
        }
        self.advance_to(deadline);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "c");
        scheduler.schedule(ms(100), "a");
        scheduler.schedule(ms(200), "b");

        assert_eq!(scheduler.advance(ms(150)), vec!["a"]);
        assert_eq!(scheduler.advance(ms(1000)), vec!["b", "c"]);
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.now(), ms(1150));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(50), 1);
        scheduler.schedule(ms(50), 2);
        scheduler.schedule(ms(50), 3);
        assert_eq!(scheduler.advance(ms(50)), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_removes_only_that_task() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule(ms(10), "first");
        scheduler.schedule(ms(20), "second");

        assert!(scheduler.cancel(first));
        assert!(!scheduler.cancel(first));
        assert_eq!(scheduler.advance(ms(100)), vec!["second"]);
    }

    #[test]
    fn test_cancel_all_clears_queue() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), ());
        scheduler.schedule(ms(20), ());
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_pop_due_moves_time_to_task() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "grow");

        let deadline = ms(1000);
        assert_eq!(scheduler.pop_due(deadline), Some("grow"));
        assert_eq!(scheduler.now(), ms(100));

        // chained from the popped task's due time, not from the deadline
        scheduler.schedule(ms(100), "shrink");
        assert_eq!(scheduler.pop_due(deadline), Some("shrink"));
        assert_eq!(scheduler.now(), ms(200));

        assert_eq!(scheduler.pop_due(deadline), None);
        scheduler.advance_to(deadline);
        assert_eq!(scheduler.now(), deadline);
    }

    #[test]
    fn test_nothing_due_before_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), ());
        assert!(scheduler.advance(ms(499)).is_empty());
        assert_eq!(scheduler.advance(ms(1)).len(), 1);
    }
}

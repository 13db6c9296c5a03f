//! Simulated clock for host tests.

use crate::KernelError;
use crate::scheduler::{Scheduler, Tick};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

enum Task {
    Once(Box<dyn FnOnce()>),
    Every { period_ms: u64, task: Box<dyn FnMut() -> Tick> },
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Clock {
    fn push(&mut self, due_ms: u64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due_ms, seq, task });
    }

    /// Removes the earliest task due at or before `until`, ties broken by registration order.
    fn pop_due(&mut self, until: u64) -> Option<Pending> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))?;
        Some(self.pending.swap_remove(pos))
    }
}

/// A [`Scheduler`] driven by [`ManualScheduler::advance`].
///
/// Tasks run on the caller's thread, in due order, and may schedule further tasks.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now_ms", &clock.now_ms)
            .field("pending", &clock.pending.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms() + ms;

        loop {
            let next = self.clock.borrow_mut().pop_due(until);
            let Some(Pending { due_ms, task, .. }) = next else {
                break;
            };
            self.clock.borrow_mut().now_ms = due_ms;

            match task {
                Task::Once(task) => task(),
                Task::Every { period_ms, mut task } => {
                    if task() == Tick::Continue {
                        self.clock
                            .borrow_mut()
                            .push(due_ms + period_ms, Task::Every { period_ms, task });
                    }
                },
            }
        }

        self.clock.borrow_mut().now_ms = until;
    }

    /// Advances until no task is pending, up to `limit_ms`.
    pub fn run_until_idle(&self, limit_ms: u64) {
        let deadline = self.now_ms() + limit_ms;
        while self.pending() > 0 && self.now_ms() < deadline {
            self.advance(1);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), KernelError> {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now_ms + u64::from(delay_ms);
        clock.push(due, Task::Once(task));
        Ok(())
    }

    fn interval(&self, period_ms: u32, task: Box<dyn FnMut() -> Tick>) -> Result<(), KernelError> {
        let period_ms = u64::from(period_ms.max(1));
        let mut clock = self.clock.borrow_mut();
        let due = clock.now_ms + period_ms;
        clock.push(due, Task::Every { period_ms, task });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_timeouts_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = Rc::clone(&log);
            scheduler.timeout(delay, Box::new(move || log.borrow_mut().push(label))).unwrap();
        }

        scheduler.advance(150);
        assert_eq!(*log.borrow(), vec!["a"]);
        scheduler.advance(150);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now_ms(), 300);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_interval_stops_on_request() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);

        scheduler
            .interval(
                16,
                Box::new(move || {
                    counter.set(counter.get() + 1);
                    if counter.get() == 3 { Tick::Stop } else { Tick::Continue }
                }),
            )
            .unwrap();

        scheduler.advance(1000);
        assert_eq!(ticks.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_tasks_may_schedule_tasks() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let inner = scheduler.clone();
        let flag = Rc::clone(&fired);
        scheduler
            .timeout(
                500,
                Box::new(move || {
                    inner.timeout(100, Box::new(move || flag.set(true))).unwrap();
                }),
            )
            .unwrap();

        scheduler.advance(550);
        assert!(!fired.get());
        scheduler.advance(50);
        assert!(fired.get());
    }
}

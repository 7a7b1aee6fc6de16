use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Work the event loop runs once its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    ClearStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// One-shot timers driven by the UI loop.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle;

    /// Returns false when the timer already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Remove and return every task whose deadline has passed, earliest first.
    fn take_due(&mut self) -> Vec<TimerTask>;

    /// Time left until the earliest pending deadline.
    fn until_next(&self) -> Option<Duration>;
}

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct PendingTimer {
    handle: TimerHandle,
    deadline: Instant,
    task: TimerTask,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue<C: Clock = SystemClock> {
    clock: C,
    pending: Vec<PendingTimer>,
    next_id: u64,
}

impl<C: Clock> TimerQueue<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl TimerQueue<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            deadline: self.clock.now() + delay,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    fn take_due(&mut self) -> Vec<TimerTask> {
        let now = self.clock.now();
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|timer| timer.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|timer| (timer.deadline, timer.handle.0));
        due.into_iter().map(|timer| timer.task).collect()
    }

    fn until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .iter()
            .map(|timer| timer.deadline.saturating_duration_since(now))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> (ManualClock, TimerQueue<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), TimerQueue::with_clock(clock))
    }

    #[test]
    fn fires_only_after_deadline() {
        let (clock, mut queue) = queue();
        queue.schedule(Duration::from_millis(3000), TimerTask::ClearStatus);
        clock.advance(Duration::from_millis(2999));
        assert!(queue.take_due().is_empty());
        clock.advance(Duration::from_millis(1));
        assert_eq!(queue.take_due(), vec![TimerTask::ClearStatus]);
        assert!(queue.is_empty());
    }

    #[test]
    fn one_shot_does_not_repeat() {
        let (clock, mut queue) = queue();
        queue.schedule(Duration::from_millis(10), TimerTask::ClearStatus);
        clock.advance(Duration::from_millis(10));
        assert_eq!(queue.take_due().len(), 1);
        clock.advance(Duration::from_millis(100));
        assert!(queue.take_due().is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (clock, mut queue) = queue();
        let handle = queue.schedule(Duration::from_millis(10), TimerTask::ClearStatus);
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        clock.advance(Duration::from_secs(1));
        assert!(queue.take_due().is_empty());
    }

    #[test]
    fn until_next_reports_earliest_deadline() {
        let (clock, mut queue) = queue();
        assert_eq!(queue.until_next(), None);
        queue.schedule(Duration::from_millis(500), TimerTask::ClearStatus);
        queue.schedule(Duration::from_millis(200), TimerTask::ClearStatus);
        clock.advance(Duration::from_millis(50));
        assert_eq!(queue.until_next(), Some(Duration::from_millis(150)));
        clock.advance(Duration::from_secs(1));
        assert_eq!(queue.until_next(), Some(Duration::ZERO));
    }
}

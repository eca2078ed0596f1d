//! Recurring timers driven by an injectable clock.
//!
//! Nothing here fires callbacks on its own: the frame loop asks the
//! [`Scheduler`] which timers came due since the last poll and replays them
//! in chronological order at their due instants.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Used to simulate elapsed time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
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
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// A repeating interval. `next_due` is `None` while cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Duration>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, next_due: None }
    }

    /// (Re)starts the timer; the first tick is one full period after `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    fn due_at_or_before(&self, now: Duration) -> Option<Duration> {
        self.next_due.filter(|due| *due <= now)
    }

    fn reschedule(&mut self) {
        if let Some(due) = self.next_due {
            self.next_due = Some(due + self.period);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Autoplay,
    Progress,
}

/// The carousel's two timers.
#[derive(Debug, Clone)]
pub struct Scheduler {
    autoplay: IntervalTimer,
    progress: IntervalTimer,
}

impl Scheduler {
    pub fn new(slide_interval: Duration, progress_tick: Duration) -> Self {
        Self {
            autoplay: IntervalTimer::new(slide_interval),
            progress: IntervalTimer::new(progress_tick),
        }
    }

    fn timer_mut(&mut self, kind: TimerKind) -> &mut IntervalTimer {
        match kind {
            TimerKind::Autoplay => &mut self.autoplay,
            TimerKind::Progress => &mut self.progress,
        }
    }

    pub fn timer(&self, kind: TimerKind) -> &IntervalTimer {
        match kind {
            TimerKind::Autoplay => &self.autoplay,
            TimerKind::Progress => &self.progress,
        }
    }

    pub fn start(&mut self, kind: TimerKind, now: Duration) {
        self.timer_mut(kind).start(now);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.timer_mut(kind).cancel();
    }

    pub fn is_running(&self, kind: TimerKind) -> bool {
        self.timer(kind).is_running()
    }

    pub fn cancel_all(&mut self) {
        self.autoplay.cancel();
        self.progress.cancel();
    }

    /// Pops the earliest timer tick due at or before `now` and schedules its
    /// next tick. Ties go to the autoplay timer.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerKind, Duration)> {
        let autoplay = self.autoplay.due_at_or_before(now);
        let progress = self.progress.due_at_or_before(now);

        let (kind, at) = match (autoplay, progress) {
            (Some(a), Some(p)) if p < a => (TimerKind::Progress, p),
            (Some(a), _) => (TimerKind::Autoplay, a),
            (None, Some(p)) => (TimerKind::Progress, p),
            (None, None) => return None,
        };

        self.timer_mut(kind).reschedule();
        Some((kind, at))
    }
}

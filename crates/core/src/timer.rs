//! Periodic timer scheduler.
//!
//! Each timer fires its task when more than `period_ms` has elapsed since it
//! last fired. There is no catch-up: a stalled loop fires each due timer once
//! per pass, however many periods were missed.

use arrayvec::ArrayVec;

use crate::error::{GameError, Result};
use crate::types::{ANIMATE_PERIOD_MS, MAX_TIMERS, PHYSICS_PERIOD_MS, SCROLL_PERIOD_MS};

/// Work a timer triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Move obstacles and the title prompt, award points.
    ScrollWorld,
    /// Cycle the bird's wing view.
    AnimateBird,
    /// Poll input and advance physics.
    PhysicsTick,
}

/// A fixed-interval, self-gating trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    pub period_ms: u64,
    pub last_trigger_ms: u64,
    pub task: TimerTask,
}

impl PeriodicTimer {
    pub const fn new(period_ms: u64, task: TimerTask) -> Self {
        Self {
            period_ms,
            last_trigger_ms: 0,
            task,
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_trigger_ms) > self.period_ms
    }
}

/// Bounded set of independent timers.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    timers: ArrayVec<PeriodicTimer, MAX_TIMERS>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three gameplay timers: world scroll, bird animation and physics.
    pub fn with_game_timers() -> Result<Self> {
        let mut scheduler = Self::new();
        scheduler.add(PeriodicTimer::new(SCROLL_PERIOD_MS, TimerTask::ScrollWorld))?;
        scheduler.add(PeriodicTimer::new(ANIMATE_PERIOD_MS, TimerTask::AnimateBird))?;
        scheduler.add(PeriodicTimer::new(PHYSICS_PERIOD_MS, TimerTask::PhysicsTick))?;
        Ok(scheduler)
    }

    pub fn add(&mut self, timer: PeriodicTimer) -> Result<()> {
        self.timers
            .try_push(timer)
            .map_err(|_| GameError::ResourceExhaustion {
                what: "timers",
                capacity: MAX_TIMERS,
            })
    }

    pub fn timers(&self) -> &[PeriodicTimer] {
        &self.timers
    }

    /// Fire every due timer once, in registration order.
    ///
    /// Returns the number of timers fired.
    pub fn run(&mut self, now_ms: u64, mut fire: impl FnMut(TimerTask)) -> usize {
        let mut fired = 0;
        for timer in self.timers.iter_mut() {
            if timer.is_due(now_ms) {
                fire(timer.task);
                timer.last_trigger_ms = now_ms;
                fired += 1;
            }
        }
        fired
    }
}

//! Repeating timers scoped to an owner's lifetime
//!
//! Each timer is a tokio task that sends a [`TimerTick`] on a shared channel
//! every period. The task is registered under a [`TimerId`] and owned through
//! a [`TimerGuard`]; dropping the guard aborts the task and removes it from
//! the registry, so a timer can never outlive the value that started it.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::CarouselError;
use crate::Result;

pub type TimerId = u64;

/// A validated, non-zero timer period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPeriod(Duration);

impl TimerPeriod {
    pub fn new(period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(CarouselError::ZeroPeriod);
        }
        Ok(Self(period))
    }

    pub fn from_millis(millis: u64) -> Result<Self> {
        Self::new(Duration::from_millis(millis))
    }

    pub fn get(&self) -> Duration {
        self.0
    }
}

/// One firing of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub timer_id: TimerId,
}

type Jobs = Arc<Mutex<HashMap<TimerId, JoinHandle<()>>>>;

#[derive(Clone)]
pub struct TimerRuntime {
    handle: Handle,
    ticks: mpsc::UnboundedSender<TimerTick>,
    jobs: Jobs,
    next_id: Arc<AtomicU64>,
}

impl TimerRuntime {
    /// Create a runtime bound to the current tokio runtime.
    ///
    /// Returns the receiving end of the tick channel; the event loop drains it.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<TimerTick>)> {
        let handle = Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;
        let (ticks, rx) = mpsc::unbounded_channel();

        Ok((
            Self {
                handle,
                ticks,
                jobs: Arc::new(Mutex::new(HashMap::new())),
                next_id: Arc::new(AtomicU64::new(1)),
            },
            rx,
        ))
    }

    /// Start a timer that first fires one `period` from now, then every `period`
    pub fn start(&self, period: TimerPeriod) -> TimerGuard {
        let period = period.get();
        let timer_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let ticks = self.ticks.clone();

        let task = self.handle.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if ticks.send(TimerTick { timer_id }).is_err() {
                    // Event loop is gone
                    break;
                }
            }
        });

        self.jobs.lock().insert(timer_id, task);

        tracing::debug!(
            timer_id,
            period_ms = period.as_millis() as u64,
            "Timer started"
        );

        TimerGuard {
            timer_id,
            jobs: Arc::clone(&self.jobs),
        }
    }

    /// Number of timers whose guards are still alive
    pub fn active_timers(&self) -> usize {
        self.jobs.lock().len()
    }

    pub fn is_active(&self, timer_id: TimerId) -> bool {
        self.jobs.lock().contains_key(&timer_id)
    }
}

impl std::fmt::Debug for TimerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRuntime")
            .field("active_timers", &self.active_timers())
            .finish()
    }
}

/// Owner of a running timer. Dropping it cancels the timer.
pub struct TimerGuard {
    timer_id: TimerId,
    jobs: Jobs,
}

impl TimerGuard {
    pub fn id(&self) -> TimerId {
        self.timer_id
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(task) = self.jobs.lock().remove(&self.timer_id) {
            task.abort();
            tracing::debug!(timer_id = self.timer_id, "Timer cancelled");
        }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard")
            .field("timer_id", &self.timer_id)
            .finish()
    }
}

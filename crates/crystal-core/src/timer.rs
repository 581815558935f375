//! Timer system for Crystal widgets.
//!
//! Provides one-shot and repeating timers. The host event loop polls
//! [`TimerManager::process_expired`] (or the thread-safe
//! [`SharedTimerManager`]) and relays the resulting [`CoreEvent`]s to the
//! widgets that own the timers. Animations such as a button's glow fade are
//! driven entirely by repeating timers from this module.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};
use crate::event::CoreEvent;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for a host event loop.
///
/// A repeating timer is re-armed only after its fire event has been produced,
/// so a timer can never be pending twice in the same poll.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to stop the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.start(duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` duration.
    /// Returns the timer ID that can be used to stop the timer.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.start(interval, TimerKind::Repeating)
    }

    fn start(&mut self, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = Instant::now() + interval;

        let data = TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        };

        let id = self.timers.insert(data);
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });

        tracing::trace!(target: "crystal_core::timer", ?id, ?kind, ?interval, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Stopping is idempotent: stopping a timer that is not running (or that
    /// never existed) is a no-op. Returns `true` if a running timer was
    /// actually stopped.
    pub fn stop(&mut self, id: TimerId) -> bool {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            tracing::trace!(target: "crystal_core::timer", ?id, "timer stopped");
            true
        } else {
            false
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the time remaining until the given timer next fires.
    ///
    /// Returns an error if the timer is not running.
    pub fn remaining(&self, id: TimerId) -> Result<Duration> {
        let timer = self
            .timers
            .get(id)
            .filter(|t| t.active)
            .ok_or(TimerError::InvalidTimerId)?;

        let now = Instant::now();
        Ok(if timer.next_fire > now {
            timer.next_fire - now
        } else {
            Duration::ZERO
        })
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Clean up any inactive timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            let now = Instant::now();
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should fire now.
    ///
    /// Returns a list of timer events to dispatch.
    #[tracing::instrument(skip(self), target = "crystal_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<CoreEvent> {
        let now = Instant::now();
        let mut events = Vec::new();

        while let Some(entry) = self.queue.peek() {
            // Check if this timer should fire.
            if entry.fire_time > now {
                break;
            }

            let entry = self.queue.pop().expect("peeked entry must exist");
            let id = entry.id;

            // Check if timer is still active.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };

            if !timer.active {
                continue;
            }

            // Timer has fired.
            tracing::trace!(target: "crystal_core::timer", ?id, "timer fired");
            events.push(CoreEvent::Timer { id });

            match timer.kind {
                TimerKind::OneShot => {
                    // One-shot timers are removed after firing.
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    // Schedule the next fire.
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        events
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around `TimerManager`.
///
/// Widgets hold an `Arc<SharedTimerManager>` and start/stop their animation
/// timers through it; the host polls `process_expired` from its event loop.
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a new shared timer manager.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// Start a one-shot timer. See [`TimerManager::start_one_shot`].
    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    /// Start a repeating timer. See [`TimerManager::start_repeating`].
    pub fn start_repeating(&self, interval: Duration) -> TimerId {
        self.inner.lock().start_repeating(interval)
    }

    /// Stop a timer (idempotent). See [`TimerManager::stop`].
    pub fn stop(&self, id: TimerId) -> bool {
        self.inner.lock().stop(id)
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// Get the time remaining before a timer fires.
    pub fn remaining(&self, id: TimerId) -> Result<Duration> {
        self.inner.lock().remaining(id)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// Process all timers that should fire now.
    pub fn process_expired(&self) -> Vec<CoreEvent> {
        self.inner.lock().process_expired()
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SharedTimerManager: Send, Sync);

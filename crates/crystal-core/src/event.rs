//! Events produced by the Crystal core systems.

use crate::timer::TimerId;

/// Events produced by core services for the host event loop to dispatch.
///
/// The host polls [`TimerManager::process_expired`](crate::TimerManager::process_expired)
/// and relays each `CoreEvent` to the widget that owns the corresponding
/// resource (for timers, the widget whose animator started the timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A timer has fired.
    Timer {
        /// The timer that fired.
        id: TimerId,
    },
}

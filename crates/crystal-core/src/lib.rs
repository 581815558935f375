//! Core systems for Crystal widgets.
//!
//! This crate provides the foundational, host-facing services of the Crystal
//! widget library:
//!
//! - **Signal/Slot System**: Type-safe state-change notification
//! - **Timers**: One-shot and repeating timers driving widget animation
//! - **Core Events**: What the host event loop relays back into widgets
//!
//! # Signal/Slot Example
//!
//! ```
//! use crystal_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id).unwrap();
//! ```
//!
//! # Timer Example
//!
//! ```
//! use crystal_core::{CoreEvent, SharedTimerManager};
//! use std::time::Duration;
//!
//! let timers = SharedTimerManager::new();
//! let id = timers.start_repeating(Duration::from_millis(30));
//!
//! // In the host event loop:
//! for event in timers.process_expired() {
//!     match event {
//!         CoreEvent::Timer { id } => { /* route to the owning widget */ }
//!     }
//! }
//!
//! timers.stop(id);
//! ```

mod error;
mod event;
pub mod signal;
mod timer;

pub use error::{CrystalError, Result, SignalError, TimerError};
pub use event::CoreEvent;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};

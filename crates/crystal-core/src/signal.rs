//! Signal/slot notification for Crystal widgets.
//!
//! A slimmed, direct-invocation signal system: signals are emitted on the
//! single UI thread that delivers all widget events, so every connected slot
//! runs immediately in the emitting call. Widgets use signals to publish
//! state changes (`clicked`, `update_requested`, `geometry_changed`) without
//! knowing who listens.
//!
//! # Example
//!
//! ```
//! use crystal_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//!
//! value_changed.disconnect(conn_id).unwrap();
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SignalError};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`], or wrap it in a [`ConnectionGuard`] to
    /// disconnect automatically on drop.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A signal carrying arguments of type `Args`.
///
/// Cloning a signal produces another handle to the same connection list, so
/// a widget can hand out clones to observers while keeping one itself.
pub struct Signal<Args> {
    slots: Arc<Mutex<SlotMap<ConnectionId, Slot<Args>>>>,
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked with a reference to the emitted arguments each
    /// time [`emit`](Self::emit) is called. Returns a [`ConnectionId`] that
    /// can be used to disconnect.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns an error if the connection ID is unknown or was already
    /// disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.slots.lock().remove(id).is_some() {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection.into())
        }
    }

    /// Emit the signal, invoking every connected slot in connection order.
    ///
    /// Slots connected or disconnected by a running slot take effect from
    /// the next emission; the lock is not held while slots run.
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        for slot in snapshot {
            slot(&args);
        }
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }
}

impl<Args> Clone for Signal<Args> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

/// RAII guard that disconnects a signal connection when dropped.
pub struct ConnectionGuard<Args> {
    signal: Signal<Args>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// Create a guard for an existing connection.
    pub fn new(signal: &Signal<Args>, id: ConnectionId) -> Self {
        Self {
            signal: signal.clone(),
            id,
        }
    }

    /// The guarded connection ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        // Already-removed connections are fine to ignore here.
        let _ = self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);

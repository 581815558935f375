//! Prelude module for Crystal.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use crystal::prelude::*;
//! ```

// ============================================================================
// Signals and Timers
// ============================================================================

pub use crate::{
    ConnectionGuard, ConnectionId, CoreEvent, SharedTimerManager, Signal, TimerId, TimerManager,
};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    ContentAlignment, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{ButtonState, ButtonStyle, CrystalButton};

// ============================================================================
// Geometry and Painting
// ============================================================================

pub use crate::render::{
    Color, CornerRadii, Font, Image, Paint, Path, Point, Rect, Region, Renderer, Size, Stroke,
};

//! Widget system for Crystal.
//!
//! This module provides the foundational widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation for widget functionality
//! - Size hints for layout negotiation
//! - Widget events for input handling and lifecycle
//!
//! # Creating a Widget
//!
//! To create a custom widget:
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Implement `paint()` for rendering
//!
//! ```
//! use crystal::widget::{PaintContext, SizeHint, Widget, WidgetBase};
//! use crystal_render::{Color, Paint, Path};
//!
//! struct Swatch {
//!     base: WidgetBase,
//!     color: Color,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(40.0, 40.0)
//!     }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         let rect = ctx.rect();
//!         ctx.renderer().fill_path(&Path::rect(rect), &Paint::solid(self.color));
//!     }
//! }
//! ```

pub mod alignment;
pub mod base;
pub mod events;
pub mod geometry;
pub mod traits;
pub mod widgets;

pub use alignment::{ContentAlignment, HorizontalAnchor, VerticalAnchor};
pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, MouseReleaseEvent, PaintEvent, ResizeEvent, TimerEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{PaintContext, Widget};

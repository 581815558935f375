//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets: geometry, visibility, enabled state, hover tracking,
//! and repaint scheduling. Widget implementations include this as a field
//! and delegate common operations to it.

use crystal_core::Signal;
use crystal_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// # Example
///
/// ```ignore
/// struct MyWidget {
///     base: WidgetBase,
/// }
///
/// impl Widget for MyWidget {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     // ...
/// }
/// ```
pub struct WidgetBase {
    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the mouse is currently over this widget.
    hovered: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when a repaint is requested.
    ///
    /// Hosts subscribe to this to schedule a redraw; the widget never
    /// paints synchronously.
    pub update_requested: Signal<()>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            hovered: false,
            needs_repaint: true,
            update_requested: Signal::new(),
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position relative to its parent.
    pub fn set_pos(&mut self, pos: Point) {
        if self.geometry.origin != pos {
            self.geometry.origin = pos;
            let geometry = self.geometry;
            self.geometry_changed.emit(geometry);
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.geometry.size != size {
            self.geometry.size = size;
            self.needs_repaint = true;
            let geometry = self.geometry;
            self.geometry_changed.emit(geometry);
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, size: Size) {
        self.set_size(size);
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// Always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Hover State
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (used by the event system).
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    ///
    /// Sets the repaint flag and notifies any subscribed host. Multiple
    /// calls before the next paint are coalesced by the flag.
    pub fn update(&mut self) {
        self.needs_repaint = true;
        self.update_requested.emit(());
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    #[inline]
    pub fn map_to_parent(&self, point: Point) -> Point {
        Point::new(
            point.x + self.geometry.origin.x,
            point.y + self.geometry.origin.y,
        )
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_geometry_change_emits_signal() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::clone(&count);
        base.geometry_changed.connect(move |_| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0)); // no change, no signal
        base.resize(Size::new(120.0, 40.0));

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_repaint_flag() {
        let mut base = WidgetBase::new();
        assert!(base.needs_repaint());
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());
        base.update();
        assert!(base.needs_repaint());
    }

    #[test]
    fn test_update_emits_request() {
        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::clone(&count);
        base.update_requested.connect(move |_| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        base.update();
        base.update();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_coordinate_mapping() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 40.0));

        assert_eq!(base.map_to_parent(Point::new(5.0, 5.0)), Point::new(15.0, 25.0));
        assert_eq!(base.map_from_parent(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
        assert!(base.contains_point(Point::new(50.0, 20.0)));
        assert!(!base.contains_point(Point::new(150.0, 20.0)));
    }
}

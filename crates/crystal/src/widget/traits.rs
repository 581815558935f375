//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait which is the foundation for
//! all UI elements, and [`PaintContext`], the rendering context passed to
//! [`Widget::paint`].

use crystal_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// Wraps a renderer and the widget's local rectangle for convenient
/// access during the paint operation.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The core trait for all widgets.
///
/// Implementors must provide access to their [`WidgetBase`], a
/// [`size_hint`](Self::size_hint) for layout, and a
/// [`paint`](Self::paint) method. Geometry, visibility, and enabled-state
/// methods have default implementations that delegate to the base.
///
/// # Coordinate System
///
/// During `paint` the renderer is already translated so that (0, 0) is
/// the top-left corner of the widget; `ctx.rect()` gives the full bounds.
pub trait Widget: Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle a widget event.
    ///
    /// Return `true` if the event was handled and should not propagate
    /// further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Set the widget's size.
    fn set_size(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Get the widget's width.
    fn width(&self) -> f32 {
        self.widget_base().width()
    }

    /// Get the widget's height.
    fn height(&self) -> f32 {
        self.widget_base().height()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Check if the mouse is currently hovering over this widget.
    fn is_hovered(&self) -> bool {
        self.widget_base().is_hovered()
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point {
        self.widget_base().map_to_parent(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    ///
    /// Widgets with non-rectangular hit areas override this.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }
}

//! Crystal button widget implementation.
//!
//! This module provides [`CrystalButton`], a custom-drawn rounded button
//! with a layered "glassy" look: a tinted background, a top-half
//! highlight gradient, an animated glow halo that fades in and out with
//! hover, and a double outline.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use crystal::widget::widgets::{ButtonStyle, CrystalButton};
//! use crystal_core::SharedTimerManager;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let button = CrystalButton::new("OK", Arc::clone(&timers))
//!     .with_corner_radius(6.0)
//!     .with_button_style(ButtonStyle::Default);
//!
//! button.clicked().connect(|_| {
//!     println!("clicked");
//! });
//! ```

use std::sync::Arc;

use crystal_core::{SharedTimerManager, Signal, TimerId};
use crystal_render::{
    Color, CornerRadii, Font, GradientStop, Image, ImageInterpolation, Paint, Path, Point, Rect,
    Region, Size, Stroke,
};

use crate::widget::alignment::ContentAlignment;
use crate::widget::base::WidgetBase;
use crate::widget::events::{MouseButton, WidgetEvent};
use crate::widget::geometry::SizeHint;
use crate::widget::traits::{PaintContext, Widget};

/// Interaction state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// No interaction.
    #[default]
    None,
    /// The pointer is over the button.
    Hover,
    /// The primary button is held down.
    Pressed,
}

/// How much chrome the button paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    /// Full chrome in every state.
    #[default]
    Default,
    /// Background, highlight, and outlines appear only while the
    /// pointer interacts with the button.
    Flat,
}

/// Milliseconds between glow animation steps.
const FADE_INTERVAL: std::time::Duration = std::time::Duration::from_millis(30);

/// Alpha change per animation step.
const FADE_STEP: u8 = 30;

/// Margin between anchored images and the button edge.
const IMAGE_MARGIN: f32 = 8.0;

/// Drives the glow alpha between 0 and 255 with two repeating timers.
///
/// Only one direction runs at a time; starting one direction stops the
/// other. Reaching either rail stops the running timer. Under
/// [`ButtonStyle::Flat`] a tick forces the alpha to 0 instead of
/// ramping.
struct GlowAnimator {
    timers: Arc<SharedTimerManager>,
    fade_in: Option<TimerId>,
    fade_out: Option<TimerId>,
    alpha: u8,
}

impl GlowAnimator {
    fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self {
            timers,
            fade_in: None,
            fade_out: None,
            alpha: 0,
        }
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Begin ramping toward 255, cancelling any fade-out.
    fn start_fade_in(&mut self) {
        self.stop_fade_out();
        if !self.fade_in.is_some_and(|id| self.timers.is_active(id)) {
            self.fade_in = Some(self.timers.start_repeating(FADE_INTERVAL));
        }
    }

    /// Begin ramping toward 0, cancelling any fade-in.
    fn start_fade_out(&mut self) {
        self.stop_fade_in();
        if !self.fade_out.is_some_and(|id| self.timers.is_active(id)) {
            self.fade_out = Some(self.timers.start_repeating(FADE_INTERVAL));
        }
    }

    fn stop_fade_in(&mut self) {
        if let Some(id) = self.fade_in {
            self.timers.stop(id);
        }
    }

    fn stop_fade_out(&mut self) {
        if let Some(id) = self.fade_out {
            self.timers.stop(id);
        }
    }

    fn stop_all(&mut self) {
        self.stop_fade_in();
        self.stop_fade_out();
    }

    fn is_fading_in(&self) -> bool {
        self.fade_in.is_some_and(|id| self.timers.is_active(id))
    }

    fn is_fading_out(&self) -> bool {
        self.fade_out.is_some_and(|id| self.timers.is_active(id))
    }

    /// The timer id of the fade-in direction, if it has ever started.
    fn fade_in_timer(&self) -> Option<TimerId> {
        self.fade_in
    }

    /// The timer id of the fade-out direction, if it has ever started.
    fn fade_out_timer(&self) -> Option<TimerId> {
        self.fade_out
    }

    fn owns(&self, id: TimerId) -> bool {
        self.fade_in == Some(id) || self.fade_out == Some(id)
    }

    /// Advance the animation for a fired timer.
    ///
    /// Returns `false` if the timer is not one of ours.
    fn tick(&mut self, id: TimerId, style: ButtonStyle) -> bool {
        if self.fade_in == Some(id) {
            if style == ButtonStyle::Flat {
                self.alpha = 0;
                return true;
            }
            if self.alpha as u16 + FADE_STEP as u16 >= 255 {
                self.alpha = 255;
                self.timers.stop(id);
            } else {
                self.alpha += FADE_STEP;
            }
            tracing::trace!(alpha = self.alpha, "glow fade-in tick");
            true
        } else if self.fade_out == Some(id) {
            if style == ButtonStyle::Flat {
                self.alpha = 0;
                return true;
            }
            if self.alpha <= FADE_STEP {
                self.alpha = 0;
                self.timers.stop(id);
            } else {
                self.alpha -= FADE_STEP;
            }
            tracing::trace!(alpha = self.alpha, "glow fade-out tick");
            true
        } else {
            false
        }
    }
}

/// A custom-drawn rounded button with an animated glow.
///
/// The button paints itself entirely from vector paths; its hit area is
/// the rounded outline rather than the bounding rectangle, recomputed on
/// every resize.
///
/// # Hosting
///
/// The button is host-driven: deliver input and timer events through
/// [`Widget::event`], subscribe to `widget_base().update_requested` to
/// schedule repaints, and apply [`hit_region`](Self::hit_region) as the
/// shaped input surface. Timer events come from the
/// [`SharedTimerManager`] passed at construction; route any
/// `CoreEvent::Timer` whose id satisfies [`owns_timer`](Self::owns_timer)
/// back to the button as a `WidgetEvent::Timer`.
///
/// # Signals
///
/// - `clicked`: emitted on release inside the button, or by [`click`](Self::click)
/// - `pressed`: emitted when the primary button goes down
/// - `released`: emitted when the primary button goes up
pub struct CrystalButton {
    base: WidgetBase,

    // Visual configuration
    light_color: Color,
    primary_color: Color,
    glow_color: Color,
    base_color: Color,
    corner_radius: f32,
    button_style: ButtonStyle,

    // Content
    text: String,
    text_color: Color,
    font: Font,
    text_align: ContentAlignment,
    image: Option<Image>,
    image_align: ContentAlignment,
    image_size: Size,
    back_image: Option<Image>,

    // Interaction
    state: ButtonState,
    glow: GlowAnimator,
    hit_region: Region,

    // Signals
    clicked: Signal<()>,
    pressed: Signal<()>,
    released: Signal<()>,
}

impl CrystalButton {
    /// Create a new button with the given text.
    ///
    /// The timer manager drives the glow animation; buttons sharing a
    /// host share one manager.
    pub fn new(text: impl Into<String>, timers: Arc<SharedTimerManager>) -> Self {
        Self {
            base: WidgetBase::new(),
            light_color: Color::WHITE,
            primary_color: Color::from_rgb8(172, 168, 153),
            glow_color: Color::WHITE,
            base_color: Color::from_rgb8(236, 233, 216),
            corner_radius: 3.0,
            button_style: ButtonStyle::Default,
            text: text.into(),
            text_color: Color::BLACK,
            font: Font::default(),
            text_align: ContentAlignment::MiddleCenter,
            image: None,
            image_align: ContentAlignment::BottomCenter,
            image_size: Size::new(24.0, 24.0),
            back_image: None,
            state: ButtonState::None,
            glow: GlowAnimator::new(timers),
            hit_region: Region::empty(),
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Get the highlight and inner outline color.
    pub fn light_color(&self) -> Color {
        self.light_color
    }

    /// Set the highlight and inner outline color.
    pub fn set_light_color(&mut self, color: Color) {
        self.light_color = color;
        self.base.update();
    }

    /// Set the light color using builder pattern.
    pub fn with_light_color(mut self, color: Color) -> Self {
        self.light_color = color;
        self
    }

    /// Get the tint and outer outline color.
    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    /// Set the tint and outer outline color.
    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
        self.base.update();
    }

    /// Set the primary color using builder pattern.
    pub fn with_primary_color(mut self, color: Color) -> Self {
        self.primary_color = color;
        self
    }

    /// Get the glow halo color.
    pub fn glow_color(&self) -> Color {
        self.glow_color
    }

    /// Set the glow halo color.
    pub fn set_glow_color(&mut self, color: Color) {
        self.glow_color = color;
        self.base.update();
    }

    /// Set the glow color using builder pattern.
    pub fn with_glow_color(mut self, color: Color) -> Self {
        self.glow_color = color;
        self
    }

    /// Get the opaque background color.
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Set the opaque background color.
    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        self.base.update();
    }

    /// Set the base color using builder pattern.
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    // =========================================================================
    // Shape and Style
    // =========================================================================

    /// Get the corner radius.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Set the corner radius.
    ///
    /// Radii larger than half the smaller dimension produce a malformed
    /// outline; no clamping is applied.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
        self.base.update();
    }

    /// Set the corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Get the button style.
    pub fn button_style(&self) -> ButtonStyle {
        self.button_style
    }

    /// Set the button style.
    pub fn set_button_style(&mut self, style: ButtonStyle) {
        self.button_style = style;
        self.base.update();
    }

    /// Set the button style using builder pattern.
    pub fn with_button_style(mut self, style: ButtonStyle) -> Self {
        self.button_style = style;
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.update();
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.base.update();
    }

    /// Set the text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.base.update();
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Get the text alignment.
    pub fn text_align(&self) -> ContentAlignment {
        self.text_align
    }

    /// Set the text alignment.
    pub fn set_text_align(&mut self, align: ContentAlignment) {
        self.text_align = align;
        self.base.update();
    }

    /// Set the text alignment using builder pattern.
    pub fn with_text_align(mut self, align: ContentAlignment) -> Self {
        self.text_align = align;
        self
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Get the foreground image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set the foreground image.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
        self.base.update();
    }

    /// Set the foreground image using builder pattern.
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Get the image alignment.
    pub fn image_align(&self) -> ContentAlignment {
        self.image_align
    }

    /// Set the image alignment.
    pub fn set_image_align(&mut self, align: ContentAlignment) {
        self.image_align = align;
        self.base.update();
    }

    /// Set the image alignment using builder pattern.
    pub fn with_image_align(mut self, align: ContentAlignment) -> Self {
        self.image_align = align;
        self
    }

    /// Get the size the foreground image is drawn at.
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Set the size the foreground image is drawn at.
    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = size;
        self.base.update();
    }

    /// Set the image size using builder pattern.
    pub fn with_image_size(mut self, size: Size) -> Self {
        self.image_size = size;
        self
    }

    /// Get the background image, if any.
    pub fn back_image(&self) -> Option<&Image> {
        self.back_image.as_ref()
    }

    /// Set the background image, stretched over the whole button.
    pub fn set_back_image(&mut self, image: Option<Image>) {
        self.back_image = image;
        self.base.update();
    }

    /// Set the background image using builder pattern.
    pub fn with_back_image(mut self, image: Image) -> Self {
        self.back_image = Some(image);
        self
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Get the current interaction state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Get the current glow alpha (0 = invisible, 255 = full).
    pub fn glow_alpha(&self) -> u8 {
        self.glow.alpha()
    }

    /// Check if the glow is currently ramping up.
    pub fn is_fading_in(&self) -> bool {
        self.glow.is_fading_in()
    }

    /// Check if the glow is currently ramping down.
    pub fn is_fading_out(&self) -> bool {
        self.glow.is_fading_out()
    }

    // =========================================================================
    // Host Plumbing
    // =========================================================================

    /// Check whether a timer id belongs to this button's glow animation.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.glow.owns(id)
    }

    /// The fade-in timer id, once the animation has started at least once.
    pub fn fade_in_timer(&self) -> Option<TimerId> {
        self.glow.fade_in_timer()
    }

    /// The fade-out timer id, once the animation has started at least once.
    pub fn fade_out_timer(&self) -> Option<TimerId> {
        self.glow.fade_out_timer()
    }

    /// The shaped hit area: the rounded outline grown by one pixel.
    ///
    /// Empty until the first resize event.
    pub fn hit_region(&self) -> &Region {
        &self.hit_region
    }

    /// The timer manager driving the glow animation.
    pub fn timer_manager(&self) -> &Arc<SharedTimerManager> {
        &self.glow.timers
    }

    // =========================================================================
    // Signal Access
    // =========================================================================

    /// Get the clicked signal.
    ///
    /// Emitted when the primary button is released inside the button.
    pub fn clicked(&self) -> &Signal<()> {
        &self.clicked
    }

    /// Get the pressed signal.
    pub fn pressed(&self) -> &Signal<()> {
        &self.pressed
    }

    /// Get the released signal.
    pub fn released(&self) -> &Signal<()> {
        &self.released
    }

    /// Programmatically click the button.
    pub fn click(&self) {
        if self.base.is_enabled() {
            self.clicked.emit(());
        }
    }

    // =========================================================================
    // Interaction Handlers
    // =========================================================================

    fn handle_enter(&mut self) {
        self.base.set_hovered(true);
        self.state = ButtonState::Hover;
        self.glow.start_fade_in();
        self.base.update();
    }

    fn handle_leave(&mut self) {
        self.base.set_hovered(false);
        self.state = ButtonState::None;
        if self.button_style == ButtonStyle::Flat {
            self.glow.set_alpha(0);
        }
        self.glow.start_fade_out();
        self.base.update();
    }

    fn handle_press(&mut self, button: MouseButton) -> bool {
        if button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }
        self.state = ButtonState::Pressed;
        if self.button_style != ButtonStyle::Flat {
            self.glow.set_alpha(255);
        }
        self.glow.stop_all();
        self.base.update();
        self.pressed.emit(());
        true
    }

    fn handle_release(&mut self, button: MouseButton, pos: Point) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        let was_pressed = self.state == ButtonState::Pressed;
        self.state = ButtonState::Hover;
        self.glow.stop_all();
        self.base.update();
        if was_pressed {
            self.released.emit(());
            if self.contains_point(pos) {
                self.clicked.emit(());
            }
        }
        true
    }

    fn handle_resize(&mut self) {
        let grown = self.base.rect().inflate(1.0);
        let path = Path::rounded_rect(grown, CornerRadii::uniform(self.corner_radius));
        self.hit_region = Region::from_path(&path);
        self.base.update();
    }

    // =========================================================================
    // Private Rendering Helpers
    // =========================================================================

    /// Rounded outline on (0, 0, w-1, h-1), used by the body and the
    /// outer stroke.
    fn body_path(&self) -> Path {
        let r = self.base.rect();
        Path::rounded_rect(
            Rect::new(0.0, 0.0, r.width() - 1.0, r.height() - 1.0),
            CornerRadii::uniform(self.corner_radius),
        )
    }

    /// Rounded outline inset one pixel, used for clipping and the inner
    /// stroke.
    fn inset_path(&self) -> Path {
        let r = self.base.rect();
        Path::rounded_rect(
            Rect::new(1.0, 1.0, r.width() - 3.0, r.height() - 3.0),
            CornerRadii::uniform(self.corner_radius),
        )
    }

    fn is_flat_idle(&self) -> bool {
        self.button_style == ButtonStyle::Flat && self.state == ButtonState::None
    }

    fn draw_background(&self, ctx: &mut PaintContext<'_>) {
        if self.is_flat_idle() {
            return;
        }
        let alpha = if self.state == ButtonState::Pressed {
            204
        } else {
            127
        };
        let body = self.body_path();

        ctx.renderer().fill_path(&body, &Paint::solid(self.base_color));
        if let Some(back) = &self.back_image {
            let full = ctx.rect();
            let clip = self.inset_path();
            ctx.renderer().clip_path(&clip);
            ctx.renderer().draw_image(back, full);
            ctx.renderer().reset_clip();
        }
        ctx.renderer()
            .fill_path(&body, &Paint::solid(self.primary_color.with_alpha8(alpha)));
    }

    fn draw_highlight(&self, ctx: &mut PaintContext<'_>) {
        if self.is_flat_idle() {
            return;
        }
        let alpha = if self.state == ButtonState::Pressed {
            60
        } else {
            150
        };
        let band = Rect::new(0.0, 0.0, ctx.width(), ctx.height() / 2.0);
        let path = Path::rounded_rect(
            band,
            CornerRadii::new(self.corner_radius, self.corner_radius, 0.0, 0.0),
        );
        let gradient = Paint::linear_gradient(
            Point::new(band.left(), band.top()),
            Point::new(band.left(), band.bottom()),
            vec![
                GradientStop::new(0.0, self.light_color.with_alpha8(alpha)),
                GradientStop::new(1.0, self.light_color.with_alpha8(alpha / 3)),
            ],
        );
        ctx.renderer().fill_path(&path, &gradient);
    }

    fn draw_image(&self, ctx: &mut PaintContext<'_>) {
        let Some(image) = &self.image else {
            return;
        };
        let origin = self
            .image_align
            .position(self.image_size, ctx.rect(), IMAGE_MARGIN);
        let dest = Rect::new(origin.x, origin.y, self.image_size.width, self.image_size.height);
        ctx.renderer().draw_image(image, dest);
    }

    fn draw_text(&self, ctx: &mut PaintContext<'_>) {
        let measured = ctx.renderer().measure_text(&self.text, &self.font);
        // The layout rect is off-center on purpose: sits at two thirds of
        // the leftover height, matching the button's historical look.
        let x = ((ctx.width() - measured.width - 1.0) / 2.0).floor();
        let y = ((ctx.height() - measured.height - 1.0) / 3.0 * 2.0).floor();
        let layout = Rect::new(x, y, measured.width.floor() + 1.0, measured.height.floor() + 1.0);

        let origin = self.text_align.position(measured, layout, 0.0);
        ctx.renderer()
            .draw_text(&self.text, &self.font, origin, self.text_color);
    }

    fn draw_glow(&self, ctx: &mut PaintContext<'_>) {
        if self.state == ButtonState::Pressed || self.is_flat_idle() {
            return;
        }
        let (w, h) = (ctx.width(), ctx.height());
        let halo = Rect::new(-5.0, h / 2.0 - 10.0, w + 11.0, h + 11.0);
        let ellipse = Path::ellipse(halo);
        let gradient = Paint::radial_gradient(
            halo.center(),
            halo.width().max(halo.height()) / 2.0,
            vec![
                GradientStop::new(0.0, self.glow_color.with_alpha8(self.glow.alpha())),
                GradientStop::new(1.0, self.glow_color.with_alpha8(0)),
            ],
        );

        let clip = self.inset_path();
        ctx.renderer().clip_path(&clip);
        ctx.renderer().fill_path(&ellipse, &gradient);
        ctx.renderer().reset_clip();
    }

    fn draw_outer_stroke(&self, ctx: &mut PaintContext<'_>) {
        if self.is_flat_idle() {
            return;
        }
        let stroke = Stroke::new(self.primary_color, 1.0);
        ctx.renderer().stroke_path(&self.body_path(), &stroke);
    }

    fn draw_inner_stroke(&self, ctx: &mut PaintContext<'_>) {
        if self.is_flat_idle() {
            return;
        }
        let stroke = Stroke::new(self.light_color, 1.0);
        ctx.renderer().stroke_path(&self.inset_path(), &stroke);
    }
}

impl Widget for CrystalButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(96.0, 32.0).with_minimum(Size::new(16.0, 16.0))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        tracing::trace!(state = ?self.state, alpha = self.glow.alpha(), "painting button");

        ctx.renderer().set_anti_alias(true);
        ctx.renderer()
            .set_image_interpolation(ImageInterpolation::HighQualityBicubic);

        self.draw_background(ctx);
        self.draw_highlight(ctx);
        self.draw_image(ctx);
        self.draw_text(ctx);
        self.draw_glow(ctx);
        self.draw_outer_stroke(ctx);
        self.draw_inner_stroke(ctx);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Enter(_) => {
                self.handle_enter();
                event.accept();
                true
            }
            WidgetEvent::Leave(_) => {
                self.handle_leave();
                event.accept();
                true
            }
            WidgetEvent::MousePress(e) => {
                let handled = self.handle_press(e.button);
                if handled {
                    event.accept();
                }
                handled
            }
            WidgetEvent::MouseRelease(e) => {
                let handled = self.handle_release(e.button, e.local_pos);
                if handled {
                    event.accept();
                }
                handled
            }
            WidgetEvent::Resize(_) => {
                self.handle_resize();
                event.accept();
                true
            }
            WidgetEvent::Timer(e) => {
                let style = self.button_style;
                if self.glow.tick(e.id, style) {
                    self.base.update();
                    event.accept();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn contains_point(&self, point: Point) -> bool {
        if self.hit_region.is_empty() {
            self.base.contains_point(point)
        } else {
            self.hit_region.contains(point)
        }
    }
}

// Ensure CrystalButton is Send + Sync
static_assertions::assert_impl_all!(CrystalButton: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use crystal_render::{DrawCommand, RecordingRenderer};

    use super::*;
    use crate::widget::events::{
        EnterEvent, KeyboardModifiers, LeaveEvent, MousePressEvent, MouseReleaseEvent, ResizeEvent,
        TimerEvent,
    };

    fn make_button() -> CrystalButton {
        let timers = Arc::new(SharedTimerManager::new());
        let mut button = CrystalButton::new("Test", timers);
        button.widget_base_mut().resize(Size::new(100.0, 30.0));
        button
    }

    fn send_enter(button: &mut CrystalButton) {
        let mut event = WidgetEvent::Enter(EnterEvent::new(Point::new(50.0, 15.0)));
        button.event(&mut event);
    }

    fn send_leave(button: &mut CrystalButton) {
        let mut event = WidgetEvent::Leave(LeaveEvent::new());
        button.event(&mut event);
    }

    fn send_press(button: &mut CrystalButton, mouse: MouseButton) -> bool {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            mouse,
            Point::new(50.0, 15.0),
            KeyboardModifiers::NONE,
        ));
        button.event(&mut event)
    }

    fn send_release(button: &mut CrystalButton, pos: Point) -> bool {
        let mut event = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            pos,
            KeyboardModifiers::NONE,
        ));
        button.event(&mut event)
    }

    fn send_tick(button: &mut CrystalButton, id: TimerId) {
        let mut event = WidgetEvent::Timer(TimerEvent::new(id));
        button.event(&mut event);
    }

    fn paint_commands(button: &CrystalButton) -> Vec<DrawCommand> {
        let mut renderer = RecordingRenderer::new();
        let rect = button.rect();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        button.paint(&mut ctx);
        renderer.commands().to_vec()
    }

    fn solid_fill_alphas(commands: &[DrawCommand]) -> Vec<u8> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPath { paint, .. } => paint.as_solid().map(|c| c.alpha8()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_appearance() {
        let button = make_button();
        assert_eq!(button.light_color(), Color::WHITE);
        assert_eq!(button.primary_color(), Color::from_rgb8(172, 168, 153));
        assert_eq!(button.glow_color(), Color::WHITE);
        assert_eq!(button.base_color(), Color::from_rgb8(236, 233, 216));
        assert_eq!(button.corner_radius(), 3.0);
        assert_eq!(button.button_style(), ButtonStyle::Default);
        assert_eq!(button.state(), ButtonState::None);
        assert_eq!(button.glow_alpha(), 0);
        assert_eq!(button.text_align(), ContentAlignment::MiddleCenter);
        assert_eq!(button.image_align(), ContentAlignment::BottomCenter);
        assert_eq!(button.image_size(), Size::new(24.0, 24.0));
    }

    #[test]
    fn enter_starts_fade_in() {
        let mut button = make_button();
        send_enter(&mut button);
        assert_eq!(button.state(), ButtonState::Hover);
        assert!(button.is_hovered());
        assert!(button.is_fading_in());
        assert!(!button.is_fading_out());
    }

    #[test]
    fn fade_in_reaches_full_alpha_in_nine_ticks() {
        let mut button = make_button();
        send_enter(&mut button);
        let id = button.fade_in_timer().unwrap();

        for _ in 0..8 {
            send_tick(&mut button, id);
        }
        assert_eq!(button.glow_alpha(), 240);
        assert!(button.is_fading_in());

        send_tick(&mut button, id);
        assert_eq!(button.glow_alpha(), 255);
        assert!(!button.is_fading_in());
    }

    #[test]
    fn fade_out_returns_to_zero_in_nine_ticks() {
        let mut button = make_button();
        send_enter(&mut button);
        let fade_in = button.fade_in_timer().unwrap();
        for _ in 0..9 {
            send_tick(&mut button, fade_in);
        }

        send_leave(&mut button);
        assert_eq!(button.state(), ButtonState::None);
        assert!(button.is_fading_out());
        let fade_out = button.fade_out_timer().unwrap();

        for _ in 0..8 {
            send_tick(&mut button, fade_out);
        }
        assert_eq!(button.glow_alpha(), 15);

        send_tick(&mut button, fade_out);
        assert_eq!(button.glow_alpha(), 0);
        assert!(!button.is_fading_out());
    }

    #[test]
    fn leave_is_idempotent() {
        let mut button = make_button();
        send_enter(&mut button);
        send_leave(&mut button);
        send_leave(&mut button);
        assert_eq!(button.state(), ButtonState::None);
        assert!(button.is_fading_out());
    }

    #[test]
    fn press_sets_full_glow_and_stops_fades() {
        let mut button = make_button();
        send_enter(&mut button);
        assert!(send_press(&mut button, MouseButton::Left));
        assert_eq!(button.state(), ButtonState::Pressed);
        assert_eq!(button.glow_alpha(), 255);
        assert!(!button.is_fading_in());
        assert!(!button.is_fading_out());
    }

    #[test]
    fn non_left_press_is_ignored() {
        let mut button = make_button();
        send_enter(&mut button);
        assert!(!send_press(&mut button, MouseButton::Right));
        assert_eq!(button.state(), ButtonState::Hover);
    }

    #[test]
    fn disabled_button_ignores_press() {
        let mut button = make_button();
        button.set_enabled(false);
        send_enter(&mut button);
        assert!(!send_press(&mut button, MouseButton::Left));
        assert_eq!(button.state(), ButtonState::Hover);
    }

    #[test]
    fn release_inside_emits_clicked() {
        let mut button = make_button();
        let clicked = Arc::new(AtomicU32::new(0));
        let released = Arc::new(AtomicBool::new(false));
        let clicked_clone = Arc::clone(&clicked);
        let released_clone = Arc::clone(&released);
        button.clicked().connect(move |_| {
            clicked_clone.fetch_add(1, Ordering::SeqCst);
        });
        button.released().connect(move |_| {
            released_clone.store(true, Ordering::SeqCst);
        });

        send_enter(&mut button);
        send_press(&mut button, MouseButton::Left);
        assert!(send_release(&mut button, Point::new(50.0, 15.0)));

        assert_eq!(button.state(), ButtonState::Hover);
        assert_eq!(clicked.load(Ordering::SeqCst), 1);
        assert!(released.load(Ordering::SeqCst));
        assert!(!button.is_fading_in());
        assert!(!button.is_fading_out());
    }

    #[test]
    fn release_outside_skips_clicked() {
        let mut button = make_button();
        let clicked = Arc::new(AtomicU32::new(0));
        let clicked_clone = Arc::clone(&clicked);
        button.clicked().connect(move |_| {
            clicked_clone.fetch_add(1, Ordering::SeqCst);
        });

        send_enter(&mut button);
        send_press(&mut button, MouseButton::Left);
        assert!(send_release(&mut button, Point::new(500.0, 500.0)));
        assert_eq!(clicked.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn release_without_press_lands_in_hover_without_signals() {
        let mut button = make_button();
        let clicked = Arc::new(AtomicU32::new(0));
        let released = Arc::new(AtomicBool::new(false));
        let clicked_clone = Arc::clone(&clicked);
        let released_clone = Arc::clone(&released);
        button.clicked().connect(move |_| {
            clicked_clone.fetch_add(1, Ordering::SeqCst);
        });
        button.released().connect(move |_| {
            released_clone.store(true, Ordering::SeqCst);
        });

        assert!(send_release(&mut button, Point::new(50.0, 15.0)));
        assert_eq!(button.state(), ButtonState::Hover);
        assert_eq!(clicked.load(Ordering::SeqCst), 0);
        assert!(!released.load(Ordering::SeqCst));
    }

    #[test]
    fn release_after_leave_lands_in_hover() {
        let mut button = make_button();
        send_enter(&mut button);
        send_press(&mut button, MouseButton::Left);
        send_leave(&mut button);
        assert!(send_release(&mut button, Point::new(50.0, 15.0)));

        assert_eq!(button.state(), ButtonState::Hover);
        assert!(!button.is_fading_in());
        assert!(!button.is_fading_out());
    }

    #[test]
    fn programmatic_click() {
        let mut button = make_button();
        let clicked = Arc::new(AtomicU32::new(0));
        let clicked_clone = Arc::clone(&clicked);
        button.clicked().connect(move |_| {
            clicked_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.click();
        assert_eq!(clicked.load(Ordering::SeqCst), 1);

        button.set_enabled(false);
        button.click();
        assert_eq!(clicked.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn flat_tick_forces_zero_alpha() {
        let mut button = make_button();
        button.set_button_style(ButtonStyle::Flat);
        send_enter(&mut button);
        let id = button.fade_in_timer().unwrap();
        for _ in 0..5 {
            send_tick(&mut button, id);
        }
        assert_eq!(button.glow_alpha(), 0);
    }

    #[test]
    fn flat_leave_zeroes_alpha() {
        let mut button = make_button();
        send_enter(&mut button);
        let id = button.fade_in_timer().unwrap();
        for _ in 0..3 {
            send_tick(&mut button, id);
        }
        button.set_button_style(ButtonStyle::Flat);
        send_leave(&mut button);
        assert_eq!(button.glow_alpha(), 0);
    }

    #[test]
    fn resize_builds_rounded_hit_region() {
        let mut button = make_button();
        button.set_corner_radius(10.0);
        let mut event = WidgetEvent::Resize(ResizeEvent::new(
            Size::new(100.0, 30.0),
            Size::new(100.0, 30.0),
        ));
        button.event(&mut event);

        assert!(!button.hit_region().is_empty());
        assert!(button.contains_point(Point::new(50.0, 15.0)));
        assert!(!button.contains_point(Point::new(0.5, 0.5)));
    }

    #[test]
    fn contains_point_falls_back_to_rect_before_resize() {
        let button = make_button();
        assert!(button.hit_region().is_empty());
        assert!(button.contains_point(Point::new(1.0, 1.0)));
        assert!(!button.contains_point(Point::new(101.0, 15.0)));
    }

    #[test]
    fn idle_paint_has_full_chrome() {
        let button = make_button();
        let commands = paint_commands(&button);

        let fills = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count();
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count();
        // Body fill, tint overlay, highlight, glow halo; outer and inner
        // outlines.
        assert_eq!(fills, 4);
        assert_eq!(strokes, 2);
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, DrawCommand::DrawText { .. }))
        );
    }

    #[test]
    fn glow_stage_present_after_enter_before_any_tick() {
        let mut button = make_button();
        send_enter(&mut button);
        assert_eq!(button.glow_alpha(), 0);

        let commands = paint_commands(&button);
        let fills = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count();
        assert_eq!(fills, 4);
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, DrawCommand::ClipPath(_)))
        );
    }

    #[test]
    fn idle_overlay_uses_half_alpha() {
        let button = make_button();
        let alphas = solid_fill_alphas(&paint_commands(&button));
        assert!(alphas.contains(&127));
        assert!(!alphas.contains(&204));
    }

    #[test]
    fn pressed_overlay_uses_strong_alpha() {
        let mut button = make_button();
        send_enter(&mut button);
        send_press(&mut button, MouseButton::Left);

        let commands = paint_commands(&button);
        let alphas = solid_fill_alphas(&commands);
        assert!(alphas.contains(&204));
        // Pressed suppresses the glow halo even at full alpha.
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, DrawCommand::ClipPath(_)))
        );
    }

    #[test]
    fn hover_paint_includes_clipped_glow() {
        let mut button = make_button();
        send_enter(&mut button);
        let id = button.fade_in_timer().unwrap();
        send_tick(&mut button, id);
        assert_eq!(button.glow_alpha(), 30);

        let commands = paint_commands(&button);
        let clip_pos = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::ClipPath(_)))
            .unwrap();
        let reset_pos = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::ResetClip))
            .unwrap();
        assert!(clip_pos < reset_pos);
        assert!(matches!(
            commands[clip_pos + 1],
            DrawCommand::FillPath { .. }
        ));
    }

    #[test]
    fn flat_idle_paints_only_content() {
        let mut button = make_button();
        button.set_button_style(ButtonStyle::Flat);
        let commands = paint_commands(&button);

        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, DrawCommand::FillPath { .. }))
        );
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, DrawCommand::StrokePath { .. }))
        );
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, DrawCommand::DrawText { .. }))
        );
    }

    #[test]
    fn flat_hover_paints_full_chrome() {
        let mut button = make_button();
        button.set_button_style(ButtonStyle::Flat);
        send_enter(&mut button);

        let commands = paint_commands(&button);
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count();
        assert_eq!(strokes, 2);
    }

    #[test]
    fn back_image_draw_is_clipped() {
        let mut button = make_button();
        button.set_back_image(Some(Image::solid(4, 4, [10, 20, 30, 255]).unwrap()));
        let commands = paint_commands(&button);

        let image_pos = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::DrawImage { .. }))
            .unwrap();
        assert!(matches!(commands[image_pos - 1], DrawCommand::ClipPath(_)));
        assert!(matches!(commands[image_pos + 1], DrawCommand::ResetClip));

        // Stretched to the full widget rect, not the inset one.
        if let DrawCommand::DrawImage { dest, .. } = &commands[image_pos] {
            assert_eq!(*dest, Rect::new(0.0, 0.0, 100.0, 30.0));
        }
    }

    #[test]
    fn foreground_image_anchors_with_margin() {
        let mut button = make_button();
        button.set_image(Some(Image::solid(4, 4, [10, 20, 30, 255]).unwrap()));
        button.set_image_align(ContentAlignment::TopLeft);
        let commands = paint_commands(&button);

        let dest = commands.iter().find_map(|c| match c {
            DrawCommand::DrawImage { dest, .. } => Some(*dest),
            _ => None,
        });
        assert_eq!(dest, Some(Rect::new(8.0, 8.0, 24.0, 24.0)));
    }

    #[test]
    fn setters_request_repaint() {
        let mut button = make_button();
        button.widget_base_mut().clear_repaint_flag();
        button.set_corner_radius(5.0);
        assert!(button.needs_repaint());
    }

    #[test]
    fn builder_chain() {
        let timers = Arc::new(SharedTimerManager::new());
        let button = CrystalButton::new("Go", timers)
            .with_corner_radius(6.0)
            .with_button_style(ButtonStyle::Flat)
            .with_light_color(Color::from_rgb8(200, 220, 255))
            .with_text_align(ContentAlignment::TopCenter);

        assert_eq!(button.text(), "Go");
        assert_eq!(button.corner_radius(), 6.0);
        assert_eq!(button.button_style(), ButtonStyle::Flat);
        assert_eq!(button.text_align(), ContentAlignment::TopCenter);
    }
}

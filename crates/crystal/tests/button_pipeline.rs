//! End-to-end tests for the button event, animation, and paint pipeline.
//!
//! These drive a [`CrystalButton`] the way a host would: input events in,
//! timer events routed back through `owns_timer`, and frames recorded
//! with a [`RecordingRenderer`].

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crystal::prelude::*;
use crystal::render::{DrawCommand, RecordingRenderer};
use crystal::widget::{
    EnterEvent, KeyboardModifiers, LeaveEvent, MouseButton, MousePressEvent, MouseReleaseEvent,
    ResizeEvent, TimerEvent,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn make_button(width: f32, height: f32, radius: f32) -> CrystalButton {
    init_tracing();
    let timers = Arc::new(SharedTimerManager::new());
    let mut button = CrystalButton::new("Launch", timers);
    button.set_corner_radius(radius);
    button.widget_base_mut().resize(Size::new(width, height));
    let mut resize = WidgetEvent::Resize(ResizeEvent::new(
        Size::ZERO,
        Size::new(width, height),
    ));
    button.event(&mut resize);
    button
}

fn enter(button: &mut CrystalButton) {
    let mut event = WidgetEvent::Enter(EnterEvent::new(Point::new(1.0, 1.0)));
    assert!(button.event(&mut event));
}

fn leave(button: &mut CrystalButton) {
    let mut event = WidgetEvent::Leave(LeaveEvent::new());
    assert!(button.event(&mut event));
}

fn press(button: &mut CrystalButton, pos: Point) {
    let mut event = WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    ));
    button.event(&mut event);
}

fn release(button: &mut CrystalButton, pos: Point) {
    let mut event = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    ));
    button.event(&mut event);
}

/// Drain the timer manager and route expired timers back into the button,
/// the way a host event loop would.
fn pump_timers(button: &mut CrystalButton) -> usize {
    let events = button.timer_manager().clone().process_expired();
    let mut routed = 0;
    for event in events {
        let CoreEvent::Timer { id } = event;
        if button.owns_timer(id) {
            let mut timer_event = WidgetEvent::Timer(TimerEvent::new(id));
            button.event(&mut timer_event);
            routed += 1;
        }
    }
    routed
}

fn record_frame(button: &CrystalButton) -> Vec<DrawCommand> {
    let mut renderer = RecordingRenderer::new();
    let rect = button.rect();
    let mut ctx = PaintContext::new(&mut renderer, rect);
    button.paint(&mut ctx);
    renderer.commands().to_vec()
}

fn count_fills(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
        .count()
}

fn count_strokes(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
        .count()
}

#[test]
fn hover_frame_has_full_chrome() {
    let mut button = make_button(100.0, 30.0, 8.0);
    enter(&mut button);

    // Step the glow once so the halo has a visible alpha.
    let id = button.fade_in_timer().unwrap();
    let mut tick = WidgetEvent::Timer(TimerEvent::new(id));
    button.event(&mut tick);

    let frame = record_frame(&button);
    // Body, tint overlay, highlight, glow halo.
    assert_eq!(count_fills(&frame), 4);
    // Outer and inner outlines.
    assert_eq!(count_strokes(&frame), 2);
    assert!(frame.iter().any(|c| matches!(c, DrawCommand::ClipPath(_))));
    assert!(frame.iter().any(|c| matches!(c, DrawCommand::ResetClip)));
    assert!(frame.iter().any(|c| matches!(c, DrawCommand::DrawText { .. })));
}

#[test]
fn flat_idle_frame_is_content_only() {
    let mut button = make_button(100.0, 30.0, 3.0);
    button.set_button_style(ButtonStyle::Flat);

    let frame = record_frame(&button);
    assert_eq!(count_fills(&frame), 0);
    assert_eq!(count_strokes(&frame), 0);
    assert!(frame.iter().any(|c| matches!(c, DrawCommand::DrawText { .. })));
}

#[test]
fn full_click_cycle_emits_signals_in_order() {
    let mut button = make_button(100.0, 30.0, 3.0);
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

    let o = Arc::clone(&order);
    button.pressed().connect(move |_| o.lock().push("pressed"));
    let o = Arc::clone(&order);
    button.released().connect(move |_| o.lock().push("released"));
    let o = Arc::clone(&order);
    button.clicked().connect(move |_| o.lock().push("clicked"));

    enter(&mut button);
    press(&mut button, Point::new(50.0, 15.0));
    release(&mut button, Point::new(50.0, 15.0));

    assert_eq!(*order.lock(), vec!["pressed", "released", "clicked"]);
    assert_eq!(button.state(), ButtonState::Hover);
}

#[test]
fn glow_ramps_through_timer_manager() {
    let mut button = make_button(100.0, 30.0, 3.0);
    enter(&mut button);
    assert!(button.is_fading_in());

    // The repeating timer fires every 30ms; wait past several intervals
    // and route whatever expired back into the button.
    let mut total = 0;
    for _ in 0..20 {
        std::thread::sleep(std::time::Duration::from_millis(35));
        total += pump_timers(&mut button);
        if !button.is_fading_in() {
            break;
        }
    }

    assert!(total >= 1);
    assert!(button.glow_alpha() > 0);
}

#[test]
fn hover_then_leave_round_trip() {
    let mut button = make_button(100.0, 30.0, 3.0);

    enter(&mut button);
    let fade_in = button.fade_in_timer().unwrap();
    for _ in 0..9 {
        let mut tick = WidgetEvent::Timer(TimerEvent::new(fade_in));
        button.event(&mut tick);
    }
    assert_eq!(button.glow_alpha(), 255);

    leave(&mut button);
    let fade_out = button.fade_out_timer().unwrap();
    for _ in 0..9 {
        let mut tick = WidgetEvent::Timer(TimerEvent::new(fade_out));
        button.event(&mut tick);
    }
    assert_eq!(button.glow_alpha(), 0);
    assert!(!button.is_fading_out());
    assert_eq!(button.state(), ButtonState::None);
}

#[test]
fn rounded_hit_region_rejects_corners() {
    let button = make_button(100.0, 30.0, 10.0);

    assert!(button.contains_point(Point::new(50.0, 15.0)));
    assert!(button.contains_point(Point::new(2.0, 15.0)));
    assert!(!button.contains_point(Point::new(0.5, 0.5)));
    assert!(!button.contains_point(Point::new(99.5, 29.5)));
}

#[test]
fn release_on_clipped_corner_does_not_click() {
    let mut button = make_button(100.0, 30.0, 10.0);
    let clicks = Arc::new(AtomicUsize::new(0));
    let clicks_clone = Arc::clone(&clicks);
    button.clicked().connect(move |_| {
        clicks_clone.fetch_add(1, Ordering::SeqCst);
    });

    enter(&mut button);
    press(&mut button, Point::new(50.0, 15.0));
    release(&mut button, Point::new(0.5, 0.5));

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(button.state(), ButtonState::Hover);
}

#[test]
fn update_requested_fires_on_interaction() {
    let mut button = make_button(100.0, 30.0, 3.0);
    let updates = Arc::new(AtomicUsize::new(0));
    let updates_clone = Arc::clone(&updates);
    button
        .widget_base()
        .update_requested
        .connect(move |_| {
            updates_clone.fetch_add(1, Ordering::SeqCst);
        });

    enter(&mut button);
    press(&mut button, Point::new(50.0, 15.0));
    release(&mut button, Point::new(50.0, 15.0));
    leave(&mut button);

    assert!(updates.load(Ordering::SeqCst) >= 4);
}

#[test]
fn resize_recomputes_hit_region() {
    let mut button = make_button(100.0, 30.0, 10.0);
    assert!(!button.contains_point(Point::new(150.0, 15.0)));

    button.widget_base_mut().resize(Size::new(200.0, 30.0));
    let mut resize = WidgetEvent::Resize(ResizeEvent::new(
        Size::new(100.0, 30.0),
        Size::new(200.0, 30.0),
    ));
    button.event(&mut resize);

    assert!(button.contains_point(Point::new(150.0, 15.0)));
}

//! Crystal - custom-drawn widgets with a glassy, animated look.
//!
//! This is the main umbrella crate. It provides the widget foundation
//! ([`widget::Widget`], [`widget::WidgetBase`]) and the built-in widgets,
//! and re-exports the supporting crates.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use crystal::prelude::*;
//!
//! let timers = Arc::new(SharedTimerManager::new());
//! let mut button = CrystalButton::new("OK", timers).with_corner_radius(6.0);
//! button.widget_base_mut().resize(Size::new(96.0, 32.0));
//!
//! button.clicked().connect(|_| {
//!     println!("clicked");
//! });
//! button.click();
//! ```

pub use crystal_core::*;

/// Graphics rendering module.
pub mod render {
    pub use crystal_render::*;
}

pub mod prelude;
pub mod widget;

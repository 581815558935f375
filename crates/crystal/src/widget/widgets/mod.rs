//! Standard widgets for Crystal.
//!
//! This module provides the built-in widgets:
//!
//! - [`CrystalButton`]: Rounded button with an animated glow

mod crystal_button;

pub use crystal_button::{ButtonState, ButtonStyle, CrystalButton};

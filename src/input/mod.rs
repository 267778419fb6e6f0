//! Pointer input.
//!
//! Window systems report mouse and touch events in canvas pixels. This module
//! keeps one Pointer per contact and the palette used to colour new contacts.
//! The simulation reads the pointers once per frame and clears their moved
//! flags.

mod error;
#[cfg(feature = "window")]
mod glfw_events;
mod palette;
mod pointer;
mod pointer_input;

pub use self::{
    error::InputError,
    palette::{parse_hex, Palette},
    pointer::{Pointer, PointerSet, MAX_POINTERS, MOUSE_SLOT, TOUCH_SLOTS},
    pointer_input::{InputEvent, PointerInput},
};

#[cfg(feature = "window")]
pub use self::glfw_events::translate;

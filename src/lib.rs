//! A desk calculator: keypad, display and the state machine between them.
//!
//! Key presses are classified by the [`panel`] into [`calculator::InputEvent`]s,
//! interpreted by [`calculator::Interpreter`], and routed by the
//! [`widget::Calculator`] to a [`display::DisplayDriver`].

pub mod calculator;
pub mod config;
pub mod display;
mod error;
pub mod panel;
pub mod widget;

pub use error::{Error, Result};

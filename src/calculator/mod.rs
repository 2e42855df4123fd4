//! Calculator core: the input state machine and its arithmetic.
//!
//! This module provides:
//! - Typed key press events and operator codes
//! - The bounded input buffer for the number being typed
//! - The interpreter that turns presses into display updates
//! - IEEE-754 evaluation and number formatting
//! - Copying results to the clipboard

mod buffer;
mod clipboard;
mod evaluation;
mod event;
mod interpreter;

pub use buffer::{InputBuffer, MAX_DIGITS};
pub use clipboard::copy_to_clipboard;
pub use evaluation::{evaluate, format_number};
pub use event::{InputEvent, Operator};
pub use interpreter::{DisplayUpdate, EntryState, EvaluationStep, Interpreter};

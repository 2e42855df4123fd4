//! The calculator widget: one interpreter wired to one display.

use tracing::debug;

use crate::Result;
use crate::calculator::{DisplayUpdate, InputEvent, Interpreter};
use crate::display::DisplayDriver;

/// Text shown on the primary channel after a reset.
pub const RESET_TEXT: &str = "0";

/// Routes key presses through the interpreter and onto a display.
pub struct Calculator<D: DisplayDriver> {
    interpreter: Interpreter,
    display: D,
}

impl<D: DisplayDriver> Calculator<D> {
    /// Create a widget and paint its initial state.
    pub fn new(display: D) -> Result<Self> {
        let mut calculator = Self {
            interpreter: Interpreter::new(),
            display,
        };
        calculator.apply(DisplayUpdate::Reset)?;
        Ok(calculator)
    }

    /// Handle one press. Returns whether the display changed.
    pub fn press(&mut self, event: InputEvent) -> Result<bool> {
        match self.interpreter.handle(event) {
            Some(update) => {
                self.apply(update)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle a sequence of presses in order.
    pub fn press_all(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Result<usize> {
        let mut changed = 0;
        for event in events {
            if self.press(event)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    fn apply(&mut self, update: DisplayUpdate) -> Result<()> {
        match update {
            DisplayUpdate::Primary(text) => self.display.set_primary_text(&text),
            DisplayUpdate::Operation(text) => self.display.set_operation_text(&text),
            DisplayUpdate::Reset => {
                debug!("display reset");
                self.display.set_primary_text(RESET_TEXT)?;
                self.display.set_operation_text("")
            }
        }
    }
}

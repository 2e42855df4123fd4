//! The input state machine.
//!
//! Every key press goes through [`Interpreter::handle`], which decides how
//! the buffer, operands and pending operator change and what, if anything,
//! the display should show next. Presses that are not valid in the current
//! state return `None` and leave every field untouched.

use tracing::{debug, trace, warn};

use super::buffer::InputBuffer;
use super::evaluation::{evaluate, format_number};
use super::event::{InputEvent, Operator};

/// How the next digit or point press is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryState {
    /// Nothing typed since the last clear.
    #[default]
    Init,
    /// Digits typed, no decimal point yet.
    IntegerEntry,
    /// A decimal point has been typed.
    FractionEntry,
    /// A value is shown that the next digit replaces rather than extends.
    Resolved,
}

/// Whether an operator chain is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvaluationStep {
    #[default]
    None,
    AwaitingOperand,
}

/// What the display should change in response to a press.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayUpdate {
    /// New primary text (the buffer or a result).
    Primary(String),
    /// New operation label, e.g. `"5 +"`.
    Operation(String),
    /// Everything was cleared: primary `"0"`, empty operation label.
    Reset,
}

/// Calculator session state.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    state: EntryState,
    buffer: Option<InputBuffer>,
    first: Option<f64>,
    second: Option<f64>,
    pending: Option<Operator>,
    step: EvaluationStep,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn buffer(&self) -> Option<&InputBuffer> {
        self.buffer.as_ref()
    }

    pub fn first(&self) -> Option<f64> {
        self.first
    }

    pub fn second(&self) -> Option<f64> {
        self.second
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn step(&self) -> EvaluationStep {
        self.step
    }

    /// Dispatch a classified press to the matching operation.
    pub fn handle(&mut self, event: InputEvent) -> Option<DisplayUpdate> {
        let update = match event {
            InputEvent::Digit(d) => self.submit_digit(d),
            InputEvent::Decimal => self.submit_decimal_separator(),
            InputEvent::Operation(op) => self.submit_operation(op),
            InputEvent::Clear => Some(self.submit_clear()),
            InputEvent::Backspace => Some(self.submit_backspace()),
            InputEvent::Equals => self.submit_equals(),
        };

        match &update {
            Some(update) => debug!(
                ?event,
                ?update,
                state = ?self.state,
                step = ?self.step,
                "press accepted"
            ),
            None => trace!(?event, state = ?self.state, "press ignored"),
        }

        update
    }

    pub fn submit_digit(&mut self, d: u8) -> Option<DisplayUpdate> {
        if d > 9 {
            return None;
        }

        match self.state {
            EntryState::Init if d == 0 => return None,
            EntryState::Init | EntryState::Resolved => {
                self.start_buffer(InputBuffer::from_digit(d));
            }
            EntryState::IntegerEntry | EntryState::FractionEntry => match self.buffer.as_mut() {
                Some(buffer) => {
                    if !buffer.push_digit(d) {
                        return None;
                    }
                }
                None => self.start_buffer(InputBuffer::from_digit(d)),
            },
        }

        self.primary_from_buffer()
    }

    pub fn submit_decimal_separator(&mut self) -> Option<DisplayUpdate> {
        match self.state {
            EntryState::FractionEntry => return None,
            EntryState::IntegerEntry if self.buffer.is_some() => {
                if !self.buffer.as_mut().is_some_and(InputBuffer::push_point) {
                    return None;
                }
            }
            _ => self.buffer = Some(InputBuffer::leading_point()),
        }
        self.state = EntryState::FractionEntry;

        self.primary_from_buffer()
    }

    pub fn submit_backspace(&mut self) -> DisplayUpdate {
        if matches!(self.state, EntryState::Init | EntryState::Resolved) {
            return self.submit_clear();
        }
        let Some(buffer) = self.buffer.as_mut() else {
            return self.submit_clear();
        };

        if buffer.ends_with_point() && !buffer.has_implicit_zero() {
            buffer.pop();
            self.state = EntryState::IntegerEntry;
        } else if buffer.len() <= 1 {
            return self.submit_clear();
        } else {
            buffer.pop();
        }

        self.primary_from_buffer().unwrap_or(DisplayUpdate::Reset)
    }

    pub fn submit_clear(&mut self) -> DisplayUpdate {
        *self = Self::default();
        DisplayUpdate::Reset
    }

    pub fn submit_operation(&mut self, op: Operator) -> Option<DisplayUpdate> {
        if self.step != EvaluationStep::None {
            return None;
        }

        let first = self.current_value()?;
        self.first = Some(first);
        self.pending = Some(op);
        self.step = EvaluationStep::AwaitingOperand;
        // The shown value becomes an operand: the next digit starts a new number.
        self.buffer = None;
        self.state = EntryState::Resolved;

        Some(DisplayUpdate::Operation(format!(
            "{} {}",
            format_number(first),
            op.symbol()
        )))
    }

    pub fn submit_equals(&mut self) -> Option<DisplayUpdate> {
        let (EvaluationStep::AwaitingOperand, Some(op), Some(a)) =
            (self.step, self.pending, self.first)
        else {
            return None;
        };

        // A freshly typed operand becomes the remembered partner; otherwise
        // a bare equals repeats against the previous one.
        let b = match self.buffer.as_ref() {
            Some(_) => self.current_value()?,
            None => self.second.unwrap_or(a),
        };

        let result = evaluate(a, b, op);
        self.second = Some(b);
        self.first = Some(result);
        self.buffer = None;
        self.state = EntryState::Resolved;

        Some(DisplayUpdate::Primary(format_number(result)))
    }

    /// Value of the buffer, or 0 when nothing is being typed.
    fn current_value(&self) -> Option<f64> {
        let Some(buffer) = self.buffer.as_ref() else {
            return Some(match self.state {
                EntryState::Resolved => self.first.unwrap_or_default(),
                _ => 0.0,
            });
        };

        match buffer.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(buffer = buffer.as_str(), error = %e, "unparseable input buffer");
                None
            }
        }
    }

    fn start_buffer(&mut self, buffer: InputBuffer) {
        self.buffer = Some(buffer);
        self.state = EntryState::IntegerEntry;
    }

    fn primary_from_buffer(&self) -> Option<DisplayUpdate> {
        self.buffer
            .as_ref()
            .map(|buffer| DisplayUpdate::Primary(buffer.as_str().to_string()))
    }
}

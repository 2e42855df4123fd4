//! Typed input events consumed by the interpreter.

/// A binary arithmetic operator selectable on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Symbol used on the keypad and in the operation label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single classified key press.
///
/// The button panel produces these; the interpreter matches on them
/// exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    Decimal,
    Operation(Operator),
    Clear,
    Backspace,
    Equals,
}

impl InputEvent {
    /// Build a digit event, rejecting values outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }
}

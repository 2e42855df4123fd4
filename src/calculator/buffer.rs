//! The in-progress number being typed.

use std::num::ParseFloatError;

/// Maximum number of counted characters in a buffer.
///
/// The decimal point is not counted.
pub const MAX_DIGITS: u8 = 16;

/// Text of the number currently being entered.
///
/// Only digits and at most one decimal point can ever be pushed, so the
/// contents always parse as a float.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBuffer {
    digits: String,
    has_point: bool,
    len: u8,
    /// Started from a bare point, so the leading `0` was never typed.
    implicit_zero: bool,
}

impl InputBuffer {
    /// Start a buffer with a single digit.
    pub fn from_digit(digit: u8) -> Self {
        let mut digits = String::with_capacity(MAX_DIGITS as usize + 1);
        digits.push(digit_char(digit));
        Self {
            digits,
            has_point: false,
            len: 1,
            implicit_zero: false,
        }
    }

    /// Start a buffer from a bare decimal point, shown as `0.`.
    pub fn leading_point() -> Self {
        Self {
            digits: "0.".to_string(),
            has_point: true,
            len: 1,
            implicit_zero: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of counted characters (digits, not the point).
    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_full(&self) -> bool {
        self.len >= MAX_DIGITS
    }

    pub fn has_point(&self) -> bool {
        self.has_point
    }

    /// Whether the buffer began as `0.` from a bare point press.
    pub fn has_implicit_zero(&self) -> bool {
        self.implicit_zero
    }

    pub fn ends_with_point(&self) -> bool {
        self.digits.ends_with('.')
    }

    /// Append a digit. Returns `false` when the buffer is full.
    ///
    /// A lone leading `0` is replaced rather than extended.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if self.digits == "0" {
            self.digits.clear();
            self.len = 0;
        }
        if self.is_full() {
            return false;
        }
        self.digits.push(digit_char(digit));
        self.len += 1;
        true
    }

    /// Append the decimal point. Returns `false` if one is already present.
    pub fn push_point(&mut self) -> bool {
        if self.has_point {
            return false;
        }
        self.digits.push('.');
        self.has_point = true;
        true
    }

    /// Remove the last character.
    ///
    /// Dropping a trailing point leaves the length untouched.
    pub fn pop(&mut self) {
        match self.digits.pop() {
            Some('.') => self.has_point = false,
            Some(_) => self.len = self.len.saturating_sub(1),
            None => {}
        }
    }

    pub fn parse(&self) -> Result<f64, ParseFloatError> {
        self.digits.parse()
    }
}

fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit.min(9))
}

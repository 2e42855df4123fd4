//! The button panel.
//!
//! Turns raw key labels into typed [`InputEvent`]s. The panel holds no
//! state and does no arithmetic; it only knows the keypad layout and which
//! label maps to which event.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::{InputEvent, Operator};
use crate::{Error, Result};

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub event: InputEvent,
}

const fn button(label: &'static str, event: InputEvent) -> Button {
    Button { label, event }
}

/// Digit section, row by row.
pub static DIGIT_ROWS: [&[Button]; 4] = [
    &[
        button("7", InputEvent::Digit(7)),
        button("8", InputEvent::Digit(8)),
        button("9", InputEvent::Digit(9)),
    ],
    &[
        button("4", InputEvent::Digit(4)),
        button("5", InputEvent::Digit(5)),
        button("6", InputEvent::Digit(6)),
    ],
    &[
        button("1", InputEvent::Digit(1)),
        button("2", InputEvent::Digit(2)),
        button("3", InputEvent::Digit(3)),
    ],
    &[button("0", InputEvent::Digit(0)), button(".", InputEvent::Decimal)],
];

/// Function section, row by row.
pub static FUNCTION_ROWS: [&[Button]; 4] = [
    &[
        button("C", InputEvent::Clear),
        button("⌫", InputEvent::Backspace),
    ],
    &[
        button("÷", InputEvent::Operation(Operator::Divide)),
        button("×", InputEvent::Operation(Operator::Multiply)),
    ],
    &[
        button("-", InputEvent::Operation(Operator::Subtract)),
        button("+", InputEvent::Operation(Operator::Add)),
    ],
    &[
        button("^", InputEvent::Operation(Operator::Power)),
        button("=", InputEvent::Equals),
    ],
];

lazy_static! {
    /// One key per match: a multi-letter alias or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"(?i)AC|BS|DEL|\S").unwrap();
}

/// Classify a single key label.
///
/// Accepts the keypad labels plus common ASCII aliases (`*`, `x`, `/`,
/// `AC`, `BS`, `DEL`, `<`, `,`). Letter keys are case-insensitive.
pub fn classify(label: &str) -> Option<InputEvent> {
    let label = label.trim();

    if let Some(event) = all_buttons().find(|b| b.label == label).map(|b| b.event) {
        return Some(event);
    }

    let event = match label.to_ascii_uppercase().as_str() {
        "," => InputEvent::Decimal,
        "*" | "X" => InputEvent::Operation(Operator::Multiply),
        "/" => InputEvent::Operation(Operator::Divide),
        "−" => InputEvent::Operation(Operator::Subtract),
        "C" | "AC" => InputEvent::Clear,
        "BS" | "DEL" | "<" | "←" => InputEvent::Backspace,
        _ => return None,
    };

    Some(event)
}

/// Split a line of compact presses (e.g. `"12.5×3="`) into events.
///
/// Whitespace between keys is optional. The first unknown key aborts
/// the whole line.
pub fn tokenize(line: &str) -> Result<Vec<InputEvent>> {
    KEY_TOKEN
        .find_iter(line)
        .map(|m| {
            classify(m.as_str()).ok_or_else(|| Error::UnknownKey {
                key: m.as_str().to_string(),
            })
        })
        .collect()
}

/// Every button on the keypad.
pub fn all_buttons() -> impl Iterator<Item = &'static Button> {
    DIGIT_ROWS
        .iter()
        .chain(FUNCTION_ROWS.iter())
        .flat_map(|row| row.iter())
}

/// Render the keypad as text, digits on the left and functions on the right.
pub fn render_keypad() -> String {
    let mut out = String::new();

    for (digits, functions) in DIGIT_ROWS.iter().zip(FUNCTION_ROWS.iter()) {
        let left: Vec<String> = digits.iter().map(|b| format!("[{}]", b.label)).collect();
        let right: Vec<String> = functions
            .iter()
            .map(|b| format!("[{}]", b.label))
            .collect();
        out.push_str(&format!("{:<12}  {}\n", left.join(" "), right.join(" ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keypad_labels() {
        assert_eq!(classify("7"), Some(InputEvent::Digit(7)));
        assert_eq!(classify("."), Some(InputEvent::Decimal));
        assert_eq!(classify("×"), Some(InputEvent::Operation(Operator::Multiply)));
        assert_eq!(classify("÷"), Some(InputEvent::Operation(Operator::Divide)));
        assert_eq!(classify("^"), Some(InputEvent::Operation(Operator::Power)));
        assert_eq!(classify("C"), Some(InputEvent::Clear));
        assert_eq!(classify("⌫"), Some(InputEvent::Backspace));
        assert_eq!(classify("="), Some(InputEvent::Equals));
    }

    #[test]
    fn test_classify_aliases() {
        assert_eq!(classify("*"), Some(InputEvent::Operation(Operator::Multiply)));
        assert_eq!(classify("x"), Some(InputEvent::Operation(Operator::Multiply)));
        assert_eq!(classify("/"), Some(InputEvent::Operation(Operator::Divide)));
        assert_eq!(classify("ac"), Some(InputEvent::Clear));
        assert_eq!(classify("BS"), Some(InputEvent::Backspace));
        assert_eq!(classify(" = "), Some(InputEvent::Equals));
    }

    #[test]
    fn test_letter_keys_ignore_case() {
        assert_eq!(classify("c"), Some(InputEvent::Clear));
        assert_eq!(classify("Ac"), Some(InputEvent::Clear));
        assert_eq!(classify("del"), Some(InputEvent::Backspace));
        assert_eq!(
            tokenize("7 c 2").unwrap(),
            vec![InputEvent::Digit(7), InputEvent::Clear, InputEvent::Digit(2)]
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("q"), None);
        assert_eq!(classify("sin"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_tokenize_compact_line() {
        let events = tokenize("12.5×3=").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(1),
                InputEvent::Digit(2),
                InputEvent::Decimal,
                InputEvent::Digit(5),
                InputEvent::Operation(Operator::Multiply),
                InputEvent::Digit(3),
                InputEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_tokenize_spaced_aliases() {
        let events = tokenize("9 BS 4 / 2 = AC").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(9),
                InputEvent::Backspace,
                InputEvent::Digit(4),
                InputEvent::Operation(Operator::Divide),
                InputEvent::Digit(2),
                InputEvent::Equals,
                InputEvent::Clear,
            ]
        );
    }

    #[test]
    fn test_tokenize_unknown_key() {
        let err = tokenize("1+q").unwrap_err();
        assert!(matches!(err, Error::UnknownKey { ref key } if key == "q"));
    }

    #[test]
    fn test_keypad_covers_every_event_kind() {
        let buttons: Vec<_> = all_buttons().collect();
        assert_eq!(buttons.len(), 19);
        for op in Operator::ALL {
            assert!(buttons.iter().any(|b| b.event == InputEvent::Operation(op)));
        }
        for d in 0..=9 {
            assert!(buttons.iter().any(|b| b.event == InputEvent::Digit(d)));
        }
    }

    #[test]
    fn test_render_keypad() {
        let keypad = render_keypad();
        assert_eq!(keypad.lines().count(), 4);
        assert!(keypad.starts_with("[7] [8] [9]"));
        assert!(keypad.contains("[^] [=]"));
    }
}

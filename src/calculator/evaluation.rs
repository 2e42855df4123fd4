//! Arithmetic evaluation and number formatting.
//!
//! Evaluation follows IEEE-754 double semantics throughout: division by
//! zero and out-of-domain powers produce infinities or NaN rather than
//! errors, and those values are displayed like any other result.

use super::Operator;

/// Apply `op` to the operands.
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        Operator::Power => a.powf(b),
    }
}

/// Format a number for the display.
///
/// Whole numbers below 1e15 print without a fractional part, other finite
/// values use the shortest decimal form that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let s = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        s.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate(2.0, 2.0, Operator::Add), 4.0);
        assert_eq!(evaluate(2.0, 5.0, Operator::Subtract), -3.0);
        assert_eq!(evaluate(6.0, 7.0, Operator::Multiply), 42.0);
        assert_eq!(evaluate(1.0, 4.0, Operator::Divide), 0.25);
        assert_eq!(evaluate(2.0, 10.0, Operator::Power), 1024.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(5.0, 0.0, Operator::Divide), f64::INFINITY);
        assert_eq!(evaluate(-5.0, 0.0, Operator::Divide), f64::NEG_INFINITY);
        assert!(evaluate(0.0, 0.0, Operator::Divide).is_nan());
    }

    #[test]
    fn test_power_domain() {
        assert_eq!(evaluate(16.0, 0.5, Operator::Power), 4.0);
        assert_eq!(evaluate(2.0, -1.0, Operator::Power), 0.5);
        assert!(evaluate(-8.0, 0.5, Operator::Power).is_nan());
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}

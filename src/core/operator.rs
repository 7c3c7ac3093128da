//! Binary operators supported by the calculator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four supported binary operators.
///
/// The enum is fieldless and `Copy`; invalid operators cannot be
/// represented, so the state machine never has to validate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

/// Error returned when a character is not one of the recognized operator
/// symbols. Input adapters treat this as "ignore the key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized operator symbol: {0:?}")]
pub struct UnknownOperator(
    /// The rejected character.
    pub char,
);

impl Operator {
    /// Returns the display symbol shown on the keypad and in the
    /// pending-operation line.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Applies the operator to `(lhs, rhs)` in that order.
    ///
    /// Division by zero is not guarded: the result follows IEEE-754
    /// semantics and may be infinite or NaN. Callers display such values,
    /// they do not treat them as failures.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    /// Accepts both the keyboard forms (`*`, `/`) and the display forms
    /// (`×`, `÷`).
    fn try_from(c: char) -> Result<Self, UnknownOperator> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            other => Err(UnknownOperator(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Symbol tests =====

    #[test]
    fn test_symbol_add() {
        assert_eq!(Operator::Add.symbol(), '+');
    }

    #[test]
    fn test_symbol_subtract() {
        assert_eq!(Operator::Subtract.symbol(), '-');
    }

    #[test]
    fn test_symbol_multiply() {
        assert_eq!(Operator::Multiply.symbol(), '×');
    }

    #[test]
    fn test_symbol_divide() {
        assert_eq!(Operator::Divide.symbol(), '÷');
    }

    // ===== Apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), 10.0);
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(9.0, 2.0), 4.5);
    }

    #[test]
    fn test_apply_divide_by_zero_is_infinite() {
        assert!(Operator::Divide.apply(4.0, 0.0).is_infinite());
        assert!(Operator::Divide.apply(-4.0, 0.0).is_infinite());
    }

    #[test]
    fn test_apply_zero_by_zero_is_nan() {
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    // ===== Conversion tests =====

    #[test]
    fn test_try_from_keyboard_symbols() {
        assert_eq!(Operator::try_from('+'), Ok(Operator::Add));
        assert_eq!(Operator::try_from('-'), Ok(Operator::Subtract));
        assert_eq!(Operator::try_from('*'), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from('/'), Ok(Operator::Divide));
    }

    #[test]
    fn test_try_from_display_symbols() {
        assert_eq!(Operator::try_from('×'), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from('÷'), Ok(Operator::Divide));
    }

    #[test]
    fn test_try_from_rejects_other_chars() {
        for c in ['=', '%', '.', '5', 'x', '^', ' '] {
            assert_eq!(Operator::try_from(c), Err(UnknownOperator(c)));
        }
    }

    #[test]
    fn test_unknown_operator_display() {
        let err = UnknownOperator('^');
        assert!(err.to_string().contains("unrecognized operator"));
    }
}

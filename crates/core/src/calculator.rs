//! Integer arithmetic.
//!
//! Dividing by zero is not an error: it yields [`Calculation::Infinity`],
//! which the HTTP surface renders as the string `"Infinity"`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::ConversionError;
use crate::numeric;

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, true quotient
    Divide,
}

impl Operation {
    /// Applies the operation.
    ///
    /// Sums, differences and products are computed in `i128` and cannot overflow.
    pub fn apply(self, a: i64, b: i64) -> Result<Calculation, ConversionError> {
        let (wide_a, wide_b) = (i128::from(a), i128::from(b));

        match self {
            Self::Add => Ok(Calculation::Integer(wide_a + wide_b)),
            Self::Subtract => Ok(Calculation::Integer(wide_a - wide_b)),
            Self::Multiply => Ok(Calculation::Integer(wide_a * wide_b)),
            Self::Divide if b == 0 => Ok(Calculation::Infinity),
            Self::Divide => {
                let quotient = Decimal::from(a)
                    .checked_div(Decimal::from(b))
                    .ok_or(ConversionError::OutOfRange)?;
                numeric::to_f64(quotient).map(Calculation::Quotient)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(ConversionError::InvalidOperation(other.to_string())),
        }
    }
}

/// Result of an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    /// Exact integer result of add, subtract or multiply.
    Integer(i128),
    /// True quotient of a division by a non-zero divisor.
    Quotient(f64),
    /// Division by zero.
    Infinity,
}

impl Calculation {
    /// True for the divide-by-zero sentinel.
    #[must_use]
    pub const fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }
}

impl Serialize for Calculation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(value) => serializer.serialize_i128(*value),
            Self::Quotient(value) => serializer.serialize_f64(*value),
            Self::Infinity => serializer.serialize_str("Infinity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add", Operation::Add)]
    #[case("subtract", Operation::Subtract)]
    #[case("multiply", Operation::Multiply)]
    #[case("divide", Operation::Divide)]
    fn test_parse_wire_name(#[case] name: &str, #[case] op: Operation) {
        assert_eq!(name.parse::<Operation>().unwrap(), op);
    }

    #[rstest]
    #[case("bogus")]
    #[case("Add")]
    #[case("")]
    fn test_unknown_operation(#[case] name: &str) {
        assert_eq!(
            name.parse::<Operation>(),
            Err(ConversionError::InvalidOperation(name.to_string()))
        );
    }

    #[rstest]
    #[case(Operation::Add, 7, 3, Calculation::Integer(10))]
    #[case(Operation::Subtract, 7, 3, Calculation::Integer(4))]
    #[case(Operation::Multiply, 7, 3, Calculation::Integer(21))]
    #[case(Operation::Divide, 6, 3, Calculation::Quotient(2.0))]
    #[case(Operation::Divide, 7, 2, Calculation::Quotient(3.5))]
    #[case(Operation::Divide, -9, 4, Calculation::Quotient(-2.25))]
    #[case(Operation::Divide, 7, 0, Calculation::Infinity)]
    #[case(Operation::Divide, 0, 0, Calculation::Infinity)]
    fn test_apply(
        #[case] op: Operation,
        #[case] a: i64,
        #[case] b: i64,
        #[case] expected: Calculation,
    ) {
        assert_eq!(op.apply(a, b).unwrap(), expected);
    }

    #[test]
    fn test_no_overflow_at_extremes() {
        assert_eq!(
            Operation::Multiply.apply(i64::MAX, i64::MAX).unwrap(),
            Calculation::Integer(i128::from(i64::MAX) * i128::from(i64::MAX))
        );
        assert_eq!(
            Operation::Add.apply(i64::MAX, 1).unwrap(),
            Calculation::Integer(i128::from(i64::MAX) + 1)
        );
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Calculation::Integer(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&Calculation::Quotient(2.0)).unwrap(),
            "2.0"
        );
        assert_eq!(
            serde_json::to_string(&Calculation::Infinity).unwrap(),
            "\"Infinity\""
        );
    }
}

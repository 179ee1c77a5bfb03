//! Binary operator arithmetic
//!
//! Every value is an `f64`. Arithmetic follows IEEE-754 (division by zero
//! yields an infinity or NaN, never an error) and comparisons yield `1.0` for
//! true and `0.0` for false.

use crate::parser::ast::BinOp;

#[inline]
fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Apply `op` to already evaluated operands
#[inline]
pub fn apply_binary(op: BinOp, left: f64, right: f64) -> f64 {
    match op {
        BinOp::Add => left + right,
        BinOp::Sub => left - right,
        BinOp::Mul => left * right,
        BinOp::Div => left / right,
        BinOp::Lt => truth(left < right),
        BinOp::Gt => truth(left > right),
        BinOp::Eq => truth(left == right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply_binary(BinOp::Add, 1.0, 1.0), 2.0);
        assert_eq!(apply_binary(BinOp::Sub, 0.0, 1.0), -1.0);
        assert_eq!(apply_binary(BinOp::Mul, 2.0, 3.0), 6.0);
        assert_eq!(apply_binary(BinOp::Div, 1.0, 2.0), 0.5);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(apply_binary(BinOp::Div, 1.0, 0.0), f64::INFINITY);
        assert_eq!(apply_binary(BinOp::Div, -1.0, 0.0), f64::NEG_INFINITY);
        assert!(apply_binary(BinOp::Div, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply_binary(BinOp::Lt, 1.0, 0.0), 0.0);
        assert_eq!(apply_binary(BinOp::Gt, 1.0, 0.0), 1.0);
        assert_eq!(apply_binary(BinOp::Eq, 2.0, 2.0), 1.0);
        assert_eq!(apply_binary(BinOp::Eq, f64::NAN, f64::NAN), 0.0);
    }
}

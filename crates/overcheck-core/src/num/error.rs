// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Failure reporting for checked arithmetic.
//!
//! The checked operations themselves only report a pass/fail bit. When a caller
//! wants more than that, an [`ArithmeticError`] pairs the failed [`Operation`]
//! with the operands it was applied to, and reconstructs the [`FaultKind`] from
//! them on demand. The operands are all that is needed: each operation fails in
//! exactly one direction for a given sign pattern of its inputs.

use crate::num::width::FixedWidth;

/// The arithmetic operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Truncated division, with or without the remainder.
    Div,
}

impl Operation {
    /// Returns the infix symbol of the operation.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Sub => write!(f, "sub"),
            Self::Mul => write!(f, "mul"),
            Self::Div => write!(f, "div"),
        }
    }
}

/// Why a checked operation could not produce an exact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The true result is greater than the type's maximum.
    Overflow,
    /// The true result is less than the type's minimum.
    /// For unsigned types this is a borrow below zero.
    Underflow,
    /// The divisor was zero.
    DivideByZero,
    /// Signed division of the minimum value by `-1`.
    IrrepresentableQuotient,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f, "overflow"),
            Self::Underflow => write!(f, "underflow"),
            Self::DivideByZero => write!(f, "division by zero"),
            Self::IrrepresentableQuotient => write!(f, "irrepresentable quotient"),
        }
    }
}

/// A checked operation that did not produce an exact result.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::error::{ArithmeticError, FaultKind, Operation};
/// let err = ArithmeticError::new(Operation::Add, 200u8, 100u8);
/// assert_eq!(err.kind(), FaultKind::Overflow);
/// assert_eq!(err.to_string(), "overflow: 200 + 100 in u8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithmeticError<T> {
    operation: Operation,
    lhs: T,
    rhs: T,
}

impl<T> ArithmeticError<T>
where
    T: FixedWidth,
{
    /// Creates an error for `lhs <operation> rhs`.
    ///
    /// The caller is responsible for only constructing errors for operand pairs
    /// that actually fail; `kind` assumes it.
    #[inline]
    pub fn new(operation: Operation, lhs: T, rhs: T) -> Self {
        Self {
            operation,
            lhs,
            rhs,
        }
    }

    /// The attempted operation.
    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The left operand (the dividend for division).
    #[inline]
    pub fn lhs(&self) -> T {
        self.lhs
    }

    /// The right operand (the divisor for division).
    #[inline]
    pub fn rhs(&self) -> T {
        self.rhs
    }

    /// Classifies the failure from the operation and its operands.
    pub fn kind(&self) -> FaultKind {
        let (lhs, rhs) = (self.lhs, self.rhs);
        match self.operation {
            Operation::Add if rhs < T::ZERO => FaultKind::Underflow,
            Operation::Add => FaultKind::Overflow,
            Operation::Sub if rhs < T::ZERO => FaultKind::Overflow,
            Operation::Sub => FaultKind::Underflow,
            Operation::Mul if (lhs < T::ZERO) != (rhs < T::ZERO) => FaultKind::Underflow,
            Operation::Mul => FaultKind::Overflow,
            Operation::Div if rhs == T::ZERO => FaultKind::DivideByZero,
            Operation::Div => FaultKind::IrrepresentableQuotient,
        }
    }
}

impl<T> std::fmt::Display for ArithmeticError<T>
where
    T: FixedWidth,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} {} in {}",
            self.kind(),
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            T::TYPE_NAME
        )
    }
}

impl<T> std::error::Error for ArithmeticError<T> where T: FixedWidth {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbol_and_name() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Sub.symbol(), "-");
        assert_eq!(Operation::Mul.symbol(), "*");
        assert_eq!(Operation::Div.symbol(), "/");
        assert_eq!(Operation::Mul.to_string(), "mul");
    }

    #[test]
    fn test_kind_add() {
        assert_eq!(
            ArithmeticError::new(Operation::Add, i8::MAX, 1).kind(),
            FaultKind::Overflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Add, i8::MIN, -1).kind(),
            FaultKind::Underflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Add, u32::MAX, 1).kind(),
            FaultKind::Overflow
        );
    }

    #[test]
    fn test_kind_sub() {
        assert_eq!(
            ArithmeticError::new(Operation::Sub, i16::MAX, -1).kind(),
            FaultKind::Overflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Sub, i16::MIN, 1).kind(),
            FaultKind::Underflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Sub, 0u8, 1).kind(),
            FaultKind::Underflow
        );
    }

    #[test]
    fn test_kind_mul() {
        assert_eq!(
            ArithmeticError::new(Operation::Mul, 100i8, 2).kind(),
            FaultKind::Overflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Mul, -100i8, -2).kind(),
            FaultKind::Overflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Mul, -100i8, 2).kind(),
            FaultKind::Underflow
        );
        assert_eq!(
            ArithmeticError::new(Operation::Mul, 16u8, 16).kind(),
            FaultKind::Overflow
        );
    }

    #[test]
    fn test_kind_div() {
        assert_eq!(
            ArithmeticError::new(Operation::Div, 42i32, 0).kind(),
            FaultKind::DivideByZero
        );
        assert_eq!(
            ArithmeticError::new(Operation::Div, 0u64, 0).kind(),
            FaultKind::DivideByZero
        );
        assert_eq!(
            ArithmeticError::new(Operation::Div, i64::MIN, -1).kind(),
            FaultKind::IrrepresentableQuotient
        );
    }

    #[test]
    fn test_display() {
        let err = ArithmeticError::new(Operation::Sub, 0u16, 1);
        assert_eq!(err.to_string(), "underflow: 0 - 1 in u16");

        let err = ArithmeticError::new(Operation::Div, i8::MIN, -1);
        assert_eq!(err.to_string(), "irrepresentable quotient: -128 / -1 in i8");

        let err = ArithmeticError::new(Operation::Div, 7u32, 0);
        assert_eq!(err.to_string(), "division by zero: 7 / 0 in u32");
    }

    #[test]
    fn test_accessors() {
        let err = ArithmeticError::new(Operation::Mul, -3i64, 7);
        assert_eq!(err.operation(), Operation::Mul);
        assert_eq!(err.lhs(), -3);
        assert_eq!(err.rhs(), 7);
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ArithmeticError::new(Operation::Add, 1u8, 255));
    }
}

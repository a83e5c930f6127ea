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

//! `Result`-returning forms of the checked operations.
//!
//! These bridge the exactness flag to `?`-style error propagation: a non-exact
//! outcome becomes an [`ArithmeticError`] carrying the operation and operands.

use crate::num::{
    error::{ArithmeticError, Operation},
    ops::checked_arithmetic::{checked_add, checked_div_rem, checked_mul, checked_sub},
    width::FixedWidth,
};

/// Adds two integers, failing if the sum is not representable.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::fallible::try_add;
/// # use overcheck_core::num::error::FaultKind;
/// assert_eq!(try_add(1u8, 2), Ok(3));
/// assert_eq!(try_add(i8::MIN, -1).unwrap_err().kind(), FaultKind::Underflow);
/// ```
#[inline]
pub fn try_add<T>(a: T, b: T) -> Result<T, ArithmeticError<T>>
where
    T: FixedWidth,
{
    checked_add(a, b).into_result(Operation::Add, a, b)
}

/// Subtracts `b` from `a`, failing if the difference is not representable.
#[inline]
pub fn try_sub<T>(a: T, b: T) -> Result<T, ArithmeticError<T>>
where
    T: FixedWidth,
{
    checked_sub(a, b).into_result(Operation::Sub, a, b)
}

/// Multiplies two integers, failing if the product is not representable.
#[inline]
pub fn try_mul<T>(a: T, b: T) -> Result<T, ArithmeticError<T>>
where
    T: FixedWidth,
{
    checked_mul(a, b).into_result(Operation::Mul, a, b)
}

/// Truncated division returning `(quotient, remainder)`.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::fallible::try_div_rem;
/// # use overcheck_core::num::error::FaultKind;
/// assert_eq!(try_div_rem(7i16, -3), Ok((-2, 1)));
/// assert_eq!(try_div_rem(5u16, 0).unwrap_err().kind(), FaultKind::DivideByZero);
/// ```
#[inline]
pub fn try_div_rem<T>(dividend: T, divisor: T) -> Result<(T, T), ArithmeticError<T>>
where
    T: FixedWidth,
{
    checked_div_rem(dividend, divisor).into_result(dividend, divisor)
}

/// Truncated division returning the quotient only.
#[inline]
pub fn try_div<T>(dividend: T, divisor: T) -> Result<T, ArithmeticError<T>>
where
    T: FixedWidth,
{
    try_div_rem(dividend, divisor).map(|(quotient, _)| quotient)
}

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

//! Outcome types of the checked operations.
//!
//! [`Checked`] carries the result of addition, subtraction, multiplication and
//! quotient-only division; [`DivRem`] carries the result of a combined
//! division. Both pair the computed value with an `exact` flag. A value that is
//! not exact must not be interpreted: for addition, subtraction and
//! multiplication it is the result wrapped modulo `2^W`, which by construction
//! never equals the true result, and for division it is zero.

use crate::num::{
    error::{ArithmeticError, Operation},
    width::FixedWidth,
};

/// A value produced by a checked operation together with its exactness.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_add;
/// let sum = checked_add(200u8, 100);
/// assert!(!sum.is_exact());
/// assert_eq!(sum.value(), 44); // 300 mod 256
/// assert_eq!(sum.ok(), None);
///
/// let sum = checked_add(200u8, 55);
/// assert_eq!(sum.ok(), Some(255));
/// ```
///
/// Outcomes only come from checked operations; an exactness flag cannot be
/// forged from outside the crate:
///
/// ```compile_fail
/// # use overcheck_core::num::outcome::Checked;
/// let forged = Checked::new(44u8, true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checked<T> {
    value: T,
    exact: bool,
}

impl<T> Checked<T>
where
    T: Copy,
{
    /// Creates a new outcome.
    #[inline(always)]
    pub(crate) const fn new(value: T, exact: bool) -> Self {
        Self { value, exact }
    }

    /// Returns the computed value, exact or not.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns `true` if the value equals the true mathematical result.
    #[inline(always)]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns the value if it is exact.
    #[inline(always)]
    pub fn ok(self) -> Option<T> {
        if self.exact { Some(self.value) } else { None }
    }

    /// Splits the outcome into `(value, exact)`.
    #[inline(always)]
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.exact)
    }
}

impl<T> Checked<T>
where
    T: FixedWidth,
{
    /// Converts the outcome into a `Result`, attaching the operation and its
    /// operands to the error.
    #[inline]
    pub fn into_result(self, operation: Operation, lhs: T, rhs: T) -> Result<T, ArithmeticError<T>> {
        if self.exact {
            Ok(self.value)
        } else {
            Err(ArithmeticError::new(operation, lhs, rhs))
        }
    }
}

impl<T> From<Checked<T>> for (T, bool)
where
    T: Copy,
{
    #[inline]
    fn from(checked: Checked<T>) -> Self {
        checked.into_parts()
    }
}

impl<T> std::fmt::Display for Checked<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exact {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} (inexact)", self.value)
        }
    }
}

/// The quotient and remainder of a checked truncated division.
///
/// When exact, `dividend == divisor * quotient + remainder`, the remainder is
/// smaller in magnitude than the divisor and carries the dividend's sign (or
/// is zero). When not exact, quotient and remainder are both zero.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_div_rem;
/// let dr = checked_div_rem(-7i32, 3);
/// assert_eq!(dr.ok(), Some((-2, -1)));
///
/// let dr = checked_div_rem(i32::MIN, -1);
/// assert!(!dr.is_exact());
/// assert_eq!((dr.quotient(), dr.remainder()), (0, 0));
/// ```
///
/// ```compile_fail
/// # use overcheck_core::num::outcome::DivRem;
/// let forged = DivRem::<i32>::failed();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivRem<T> {
    quotient: T,
    remainder: T,
    exact: bool,
}

impl<T> DivRem<T>
where
    T: FixedWidth,
{
    /// Creates an exact outcome.
    #[inline(always)]
    pub(crate) fn new(quotient: T, remainder: T) -> Self {
        Self {
            quotient,
            remainder,
            exact: true,
        }
    }

    /// Creates the outcome of a division that has no representable result.
    #[inline(always)]
    pub(crate) fn failed() -> Self {
        Self {
            quotient: T::ZERO,
            remainder: T::ZERO,
            exact: false,
        }
    }

    /// Returns the quotient, rounded toward zero.
    #[inline(always)]
    pub fn quotient(&self) -> T {
        self.quotient
    }

    /// Returns the remainder.
    #[inline(always)]
    pub fn remainder(&self) -> T {
        self.remainder
    }

    /// Returns `true` if the division had a representable result.
    #[inline(always)]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns `(quotient, remainder)` if the division succeeded.
    #[inline(always)]
    pub fn ok(self) -> Option<(T, T)> {
        self.exact.then_some((self.quotient, self.remainder))
    }

    /// Splits the outcome into `(quotient, remainder, exact)`.
    #[inline(always)]
    pub fn into_parts(self) -> (T, T, bool) {
        (self.quotient, self.remainder, self.exact)
    }

    /// Drops the remainder.
    #[inline(always)]
    pub fn into_quotient(self) -> Checked<T> {
        Checked::new(self.quotient, self.exact)
    }

    /// Converts the outcome into a `Result`, attaching the operands to the error.
    #[inline]
    pub fn into_result(self, dividend: T, divisor: T) -> Result<(T, T), ArithmeticError<T>> {
        self.ok()
            .ok_or_else(|| ArithmeticError::new(Operation::Div, dividend, divisor))
    }
}

impl<T> From<DivRem<T>> for (T, T, bool)
where
    T: FixedWidth,
{
    #[inline]
    fn from(div_rem: DivRem<T>) -> Self {
        div_rem.into_parts()
    }
}

impl<T> std::fmt::Display for DivRem<T>
where
    T: FixedWidth,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exact {
            write!(f, "quotient {} remainder {}", self.quotient, self.remainder)
        } else {
            write!(f, "no representable quotient")
        }
    }
}

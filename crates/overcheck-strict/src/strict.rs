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

//! Strict arithmetic: return the exact result or panic.
//!
//! Every function delegates to the `Result` form in
//! `overcheck_core::num::ops::fallible` and turns an `Err` into a panic whose
//! message is the error's display text, for example
//! `overflow: 255 + 1 in u8`. All functions are `#[track_caller]`, so the
//! panic points at the call site rather than into this crate.

use overcheck_core::num::{
    error::ArithmeticError,
    ops::fallible::{try_add, try_div, try_div_rem, try_mul, try_sub},
    width::FixedWidth,
};

#[cold]
#[inline(never)]
#[track_caller]
fn fault<T>(error: ArithmeticError<T>) -> !
where
    T: FixedWidth,
{
    #[cfg(feature = "tracing")]
    tracing::error!(
        operation = %error.operation(),
        lhs = %error.lhs(),
        rhs = %error.rhs(),
        kind = %error.kind(),
        ty = T::TYPE_NAME,
        "strict arithmetic failed"
    );
    panic!("{error}")
}

/// Adds two integers, panicking if the sum is not representable.
///
/// # Panics
///
/// Panics on overflow or underflow.
///
/// # Examples
///
/// ```rust
/// # use overcheck_strict::strict::strict_add;
/// assert_eq!(strict_add(254u8, 1), 255);
/// ```
///
/// ```rust,should_panic
/// # use overcheck_strict::strict::strict_add;
/// strict_add(255u8, 1); // panics: overflow: 255 + 1 in u8
/// ```
#[inline]
#[track_caller]
pub fn strict_add<T>(a: T, b: T) -> T
where
    T: FixedWidth,
{
    match try_add(a, b) {
        Ok(value) => value,
        Err(error) => fault(error),
    }
}

/// Subtracts `b` from `a`, panicking if the difference is not representable.
///
/// # Panics
///
/// Panics on overflow or underflow, including any unsigned `a < b`.
#[inline]
#[track_caller]
pub fn strict_sub<T>(a: T, b: T) -> T
where
    T: FixedWidth,
{
    match try_sub(a, b) {
        Ok(value) => value,
        Err(error) => fault(error),
    }
}

/// Multiplies two integers, panicking if the product is not representable.
///
/// # Panics
///
/// Panics on overflow or underflow.
#[inline]
#[track_caller]
pub fn strict_mul<T>(a: T, b: T) -> T
where
    T: FixedWidth,
{
    match try_mul(a, b) {
        Ok(value) => value,
        Err(error) => fault(error),
    }
}

/// Truncated division returning the quotient.
///
/// # Panics
///
/// Panics if `divisor` is zero, or for signed types if `dividend` is the
/// minimum value and `divisor` is `-1`.
///
/// # Examples
///
/// ```rust
/// # use overcheck_strict::strict::strict_div;
/// assert_eq!(strict_div(-128i8, 2), -64);
/// ```
///
/// ```rust,should_panic
/// # use overcheck_strict::strict::strict_div;
/// strict_div(i8::MIN, -1); // panics: irrepresentable quotient: -128 / -1 in i8
/// ```
#[inline]
#[track_caller]
pub fn strict_div<T>(dividend: T, divisor: T) -> T
where
    T: FixedWidth,
{
    match try_div(dividend, divisor) {
        Ok(quotient) => quotient,
        Err(error) => fault(error),
    }
}

/// Truncated division returning `(quotient, remainder)`.
///
/// # Panics
///
/// Same conditions as [`strict_div`].
#[inline]
#[track_caller]
pub fn strict_div_rem<T>(dividend: T, divisor: T) -> (T, T)
where
    T: FixedWidth,
{
    match try_div_rem(dividend, divisor) {
        Ok(parts) => parts,
        Err(error) => fault(error),
    }
}

/// Method-call access to the strict operations.
///
/// # Examples
///
/// ```rust
/// # use overcheck_strict::strict::StrictArithmetic;
/// let total = 40u32.mul_or_panic(1000).add_or_panic(7);
/// assert_eq!(total, 40_007);
/// ```
pub trait StrictArithmetic: FixedWidth {
    /// See [`strict_add`].
    fn add_or_panic(self, rhs: Self) -> Self;
    /// See [`strict_sub`].
    fn sub_or_panic(self, rhs: Self) -> Self;
    /// See [`strict_mul`].
    fn mul_or_panic(self, rhs: Self) -> Self;
    /// See [`strict_div`].
    fn div_or_panic(self, rhs: Self) -> Self;
    /// See [`strict_div_rem`].
    fn div_rem_or_panic(self, rhs: Self) -> (Self, Self);
}

impl<T> StrictArithmetic for T
where
    T: FixedWidth,
{
    #[inline(always)]
    #[track_caller]
    fn add_or_panic(self, rhs: Self) -> Self {
        strict_add(self, rhs)
    }

    #[inline(always)]
    #[track_caller]
    fn sub_or_panic(self, rhs: Self) -> Self {
        strict_sub(self, rhs)
    }

    #[inline(always)]
    #[track_caller]
    fn mul_or_panic(self, rhs: Self) -> Self {
        strict_mul(self, rhs)
    }

    #[inline(always)]
    #[track_caller]
    fn div_or_panic(self, rhs: Self) -> Self {
        strict_div(self, rhs)
    }

    #[inline(always)]
    #[track_caller]
    fn div_rem_or_panic(self, rhs: Self) -> (Self, Self) {
        strict_div_rem(self, rhs)
    }
}

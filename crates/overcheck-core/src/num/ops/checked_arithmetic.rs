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

//! Overflow-detecting arithmetic over every [`FixedWidth`] integer.
//!
//! Each operation is implemented once. The predicates are phrased in terms of
//! the wrapped result and the operands' signs, so they hold for signed and
//! unsigned types alike and never need an intermediate wider than the operands.
//! That keeps the 64-bit path identical to the 8-bit one.

use crate::num::{
    outcome::{Checked, DivRem},
    width::FixedWidth,
};

/// Adds two integers, reporting whether the sum is representable.
///
/// On overflow the value is the sum wrapped modulo `2^W`.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_add;
/// assert_eq!(checked_add(100i8, 27).into_parts(), (127, true));
/// assert_eq!(checked_add(100i8, 28).into_parts(), (-128, false));
/// assert_eq!(checked_add(200u8, 100).into_parts(), (44, false));
/// ```
#[inline]
pub fn checked_add<T>(a: T, b: T) -> Checked<T>
where
    T: FixedWidth,
{
    let value = a.wrapping_add(&b);
    // A non-negative addend can only move the sum up; a wrap shows as a decrease.
    let wrapped = if b < T::ZERO { value > a } else { value < a };
    Checked::new(value, !wrapped)
}

/// Subtracts `b` from `a`, reporting whether the difference is representable.
///
/// For unsigned types this fails exactly when `a < b`. On failure the value is
/// the difference wrapped modulo `2^W`.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_sub;
/// assert_eq!(checked_sub(5u8, 3).into_parts(), (2, true));
/// assert_eq!(checked_sub(0u8, 1).into_parts(), (255, false));
/// assert_eq!(checked_sub(i16::MIN, 1).into_parts(), (i16::MAX, false));
/// ```
#[inline]
pub fn checked_sub<T>(a: T, b: T) -> Checked<T>
where
    T: FixedWidth,
{
    let value = a.wrapping_sub(&b);
    let wrapped = if b < T::ZERO { value < a } else { value > a };
    Checked::new(value, !wrapped)
}

/// Multiplies two integers, reporting whether the product is representable.
///
/// The product is verified by dividing it back, so no wider type is involved.
/// On overflow the value is the product wrapped modulo `2^W`.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_mul;
/// assert_eq!(checked_mul(15u8, 17).into_parts(), (255, true));
/// assert_eq!(checked_mul(16u8, 16).into_parts(), (0, false));
/// assert_eq!(checked_mul(-1i64, i64::MIN).into_parts(), (i64::MIN, false));
/// ```
#[inline]
pub fn checked_mul<T>(a: T, b: T) -> Checked<T>
where
    T: FixedWidth,
{
    let value = a.wrapping_mul(&b);
    let exact = if a == T::ZERO {
        true
    } else if a.is_minus_one() {
        // -MIN is the only negation without a representation, and MIN / -1
        // would trap below.
        b != T::MIN
    } else {
        // |value - a*b| is a nonzero multiple of 2^W on overflow, which is
        // larger than any |a| here, so truncation cannot recover b.
        value / a == b
    };
    Checked::new(value, exact)
}

/// Divides `dividend` by `divisor`, truncating toward zero, and returns both
/// quotient and remainder.
///
/// Fails when the divisor is zero and, for signed types, when dividing the
/// minimum value by `-1`. A failed division yields zero for both parts.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_div_rem;
/// assert_eq!(checked_div_rem(7i8, -3).into_parts(), (-2, 1, true));
/// assert_eq!(checked_div_rem(-7i8, -3).into_parts(), (2, -1, true));
/// assert_eq!(checked_div_rem(i8::MIN, i8::MIN).into_parts(), (1, 0, true));
/// assert_eq!(checked_div_rem(i8::MIN, -1).into_parts(), (0, 0, false));
/// assert_eq!(checked_div_rem(0u32, 0).into_parts(), (0, 0, false));
/// ```
#[inline]
pub fn checked_div_rem<T>(dividend: T, divisor: T) -> DivRem<T>
where
    T: FixedWidth,
{
    if divisor == T::ZERO || (dividend == T::MIN && divisor.is_minus_one()) {
        return DivRem::failed();
    }
    DivRem::new(dividend / divisor, dividend % divisor)
}

/// Divides `dividend` by `divisor`, truncating toward zero, and discards the
/// remainder.
///
/// Same failure conditions as [`checked_div_rem`]; a failed division yields zero.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::checked_div;
/// assert_eq!(checked_div(-128i8, 3).ok(), Some(-42));
/// assert_eq!(checked_div(10u16, 0).ok(), None);
/// ```
#[inline]
pub fn checked_div<T>(dividend: T, divisor: T) -> Checked<T>
where
    T: FixedWidth,
{
    checked_div_rem(dividend, divisor).into_quotient()
}

/// Method-call access to the checked operations by value.
///
/// Implemented for every [`FixedWidth`] type.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::ops::checked_arithmetic::CheckedArithmetic;
/// assert!(250u8.exact_add(5).is_exact());
/// assert!(!250u8.exact_add(6).is_exact());
/// assert_eq!(i32::MIN.exact_div_rem(i32::MIN).ok(), Some((1, 0)));
/// ```
pub trait CheckedArithmetic: FixedWidth {
    /// See [`checked_add`].
    fn exact_add(self, rhs: Self) -> Checked<Self>;
    /// See [`checked_sub`].
    fn exact_sub(self, rhs: Self) -> Checked<Self>;
    /// See [`checked_mul`].
    fn exact_mul(self, rhs: Self) -> Checked<Self>;
    /// See [`checked_div`].
    fn exact_div(self, rhs: Self) -> Checked<Self>;
    /// See [`checked_div_rem`].
    fn exact_div_rem(self, rhs: Self) -> DivRem<Self>;
}

impl<T> CheckedArithmetic for T
where
    T: FixedWidth,
{
    #[inline(always)]
    fn exact_add(self, rhs: Self) -> Checked<Self> {
        checked_add(self, rhs)
    }

    #[inline(always)]
    fn exact_sub(self, rhs: Self) -> Checked<Self> {
        checked_sub(self, rhs)
    }

    #[inline(always)]
    fn exact_mul(self, rhs: Self) -> Checked<Self> {
        checked_mul(self, rhs)
    }

    #[inline(always)]
    fn exact_div(self, rhs: Self) -> Checked<Self> {
        checked_div(self, rhs)
    }

    #[inline(always)]
    fn exact_div_rem(self, rhs: Self) -> DivRem<Self> {
        checked_div_rem(self, rhs)
    }
}

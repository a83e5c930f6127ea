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

use overcheck_core::num::ops::checked_arithmetic::{
    checked_add, checked_div, checked_div_rem, checked_mul, checked_sub,
};
use proptest::prelude::*;

// The standard library's overflowing and checked primitives act as the oracle
// for widths too large to enumerate.
macro_rules! agrees_with_std {
    ($name:ident, $t:ty) => {
        proptest! {
            #[test]
            fn $name(a in any::<$t>(), b in any::<$t>()) {
                let (wrapped, overflowed) = a.overflowing_add(b);
                prop_assert_eq!(checked_add(a, b).into_parts(), (wrapped, !overflowed));

                let (wrapped, overflowed) = a.overflowing_sub(b);
                prop_assert_eq!(checked_sub(a, b).into_parts(), (wrapped, !overflowed));

                let (wrapped, overflowed) = a.overflowing_mul(b);
                prop_assert_eq!(checked_mul(a, b).into_parts(), (wrapped, !overflowed));

                prop_assert_eq!(checked_div(a, b).ok(), a.checked_div(b));
                let expected = a.checked_div(b).zip(a.checked_rem(b));
                prop_assert_eq!(checked_div_rem(a, b).ok(), expected);
            }
        }
    };
}

agrees_with_std!(prop_i16_agrees_with_std, i16);
agrees_with_std!(prop_i32_agrees_with_std, i32);
agrees_with_std!(prop_i64_agrees_with_std, i64);
agrees_with_std!(prop_isize_agrees_with_std, isize);
agrees_with_std!(prop_u16_agrees_with_std, u16);
agrees_with_std!(prop_u32_agrees_with_std, u32);
agrees_with_std!(prop_u64_agrees_with_std, u64);
agrees_with_std!(prop_usize_agrees_with_std, usize);

// Uniform sampling rarely lands on small products; bias toward them.
proptest! {
    #[test]
    fn prop_i64_mul_near_boundary(a in -(1i64 << 32)..(1i64 << 32), b in -(1i64 << 32)..(1i64 << 32)) {
        let wide = i128::from(a) * i128::from(b);
        let fits = i64::try_from(wide).is_ok();
        let (value, exact) = checked_mul(a, b).into_parts();
        prop_assert_eq!(exact, fits);
        if exact {
            prop_assert_eq!(i128::from(value), wide);
        } else {
            prop_assert_ne!(i128::from(value), wide);
        }
    }

    #[test]
    fn prop_u64_mul_near_boundary(a in 0u64..(1u64 << 33), b in 0u64..(1u64 << 33)) {
        let wide = u128::from(a) * u128::from(b);
        let (value, exact) = checked_mul(a, b).into_parts();
        prop_assert_eq!(exact, wide <= u128::from(u64::MAX));
        prop_assert_eq!(u128::from(value), wide % (1u128 << 64));
    }

    #[test]
    fn prop_i32_division_identity(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0 && !(a == i32::MIN && b == -1));
        let (q, r, exact) = checked_div_rem(a, b).into_parts();
        prop_assert!(exact);
        prop_assert_eq!(i64::from(b) * i64::from(q) + i64::from(r), i64::from(a));
        prop_assert!(i64::from(r).abs() < i64::from(b).abs());
        prop_assert!(r == 0 || (r < 0) == (a < 0));
    }
}

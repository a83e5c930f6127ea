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

//! Width and signedness descriptors for the primitive integers.
//!
//! Every checked operation in this crate is written once against
//! [`FixedWidth`]. The trait captures what the overflow predicates need to know
//! about a type: its bit width, whether it is signed, its range bounds, and the
//! small constants `0`, `1` and `-1`. Supporting another primitive is a single
//! line in the `impl_fixed_width!` invocation at the bottom of this file.

use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::{Debug, Display};

/// Whether a width's range is symmetric around zero or non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's-complement range `[-2^(W-1), 2^(W-1) - 1]`.
    Signed,
    /// Range `[0, 2^W - 1]`.
    Unsigned,
}

impl std::fmt::Display for Signedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// A fixed-width primitive integer the checked operations can be instantiated for.
///
/// # Examples
///
/// ```rust
/// # use overcheck_core::num::width::{FixedWidth, Signedness};
/// assert_eq!(<i8 as FixedWidth>::MIN, -128);
/// assert_eq!(<u16 as FixedWidth>::MAX, 65_535);
/// assert_eq!(<i32 as FixedWidth>::MINUS_ONE, Some(-1));
/// assert_eq!(<u32 as FixedWidth>::MINUS_ONE, None);
/// assert_eq!(<u64 as FixedWidth>::signedness(), Signedness::Unsigned);
/// ```
pub trait FixedWidth:
    PrimInt + WrappingAdd + WrappingSub + WrappingMul + Debug + Display + Send + Sync + 'static
{
    /// The number of bits in the representation.
    const BITS: u32;
    /// `true` for two's-complement types.
    const SIGNED: bool;
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
    /// The constant `0`.
    const ZERO: Self;
    /// The constant `1`.
    const ONE: Self;
    /// The constant `-1`, or `None` if the type cannot represent it.
    const MINUS_ONE: Option<Self>;
    /// The Rust name of the type, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Returns the signedness of the type.
    #[inline(always)]
    fn signedness() -> Signedness {
        if Self::SIGNED {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        }
    }

    /// Returns `true` if `self` is the constant `-1`.
    ///
    /// Always `false` for unsigned types.
    #[inline(always)]
    fn is_minus_one(self) -> bool {
        Self::MINUS_ONE == Some(self)
    }
}

macro_rules! impl_fixed_width {
    (signed: $($s:ty),*; unsigned: $($u:ty),* $(;)?) => {
        $(impl_fixed_width!(@impl $s, true, Some(-1));)*
        $(impl_fixed_width!(@impl $u, false, None);)*
    };
    (@impl $t:ty, $signed:expr, $minus_one:expr) => {
        impl FixedWidth for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MINUS_ONE: Option<Self> = $minus_one;
            const TYPE_NAME: &'static str = stringify!($t);
        }
    };
}

impl_fixed_width! {
    signed: i8, i16, i32, i64, isize;
    unsigned: u8, u16, u32, u64, usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<T: FixedWidth>() -> (T, T) {
        (T::MIN, T::MAX)
    }

    #[test]
    fn test_bounds_match_primitives() {
        assert_eq!(bounds::<i8>(), (i8::MIN, i8::MAX));
        assert_eq!(bounds::<i16>(), (i16::MIN, i16::MAX));
        assert_eq!(bounds::<i32>(), (i32::MIN, i32::MAX));
        assert_eq!(bounds::<i64>(), (i64::MIN, i64::MAX));
        assert_eq!(bounds::<u8>(), (0, u8::MAX));
        assert_eq!(bounds::<u16>(), (0, u16::MAX));
        assert_eq!(bounds::<u32>(), (0, u32::MAX));
        assert_eq!(bounds::<u64>(), (0, u64::MAX));
    }

    #[test]
    fn test_bits() {
        assert_eq!(<i8 as FixedWidth>::BITS, 8);
        assert_eq!(<u16 as FixedWidth>::BITS, 16);
        assert_eq!(<i32 as FixedWidth>::BITS, 32);
        assert_eq!(<u64 as FixedWidth>::BITS, 64);
        assert_eq!(<usize as FixedWidth>::BITS, usize::BITS);
    }

    #[test]
    fn test_signedness() {
        assert_eq!(<i16 as FixedWidth>::signedness(), Signedness::Signed);
        assert_eq!(<isize as FixedWidth>::signedness(), Signedness::Signed);
        assert_eq!(<u8 as FixedWidth>::signedness(), Signedness::Unsigned);
        assert_eq!(Signedness::Signed.to_string(), "signed");
        assert_eq!(Signedness::Unsigned.to_string(), "unsigned");
    }

    #[test]
    fn test_is_minus_one() {
        assert!(FixedWidth::is_minus_one(-1i8));
        assert!(!FixedWidth::is_minus_one(1i64));
        // All-ones is MAX for unsigned types, never -1.
        assert!(!FixedWidth::is_minus_one(u8::MAX));
        assert!(!FixedWidth::is_minus_one(usize::MAX));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(<i8 as FixedWidth>::TYPE_NAME, "i8");
        assert_eq!(<u64 as FixedWidth>::TYPE_NAME, "u64");
        assert_eq!(<isize as FixedWidth>::TYPE_NAME, "isize");
    }
}

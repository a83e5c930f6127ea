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

//! # Overcheck Core
//!
//! Checked fixed-width integer arithmetic. Addition, subtraction,
//! multiplication and truncated division for `i8`..`i64`, `u8`..`u64`,
//! `isize` and `usize`, where every operation tells the caller whether the
//! true mathematical result fits the type instead of wrapping silently or
//! trapping.
//!
//! ## Modules
//!
//! - `num`: The `FixedWidth` abstraction, the outcome and error types, and the
//!   checked operations implemented once over all widths and signednesses.
//!
//! ## Guarantees
//!
//! - Operations are pure, allocation-free and branch on comparisons only; no
//!   operation loops over its operands.
//! - A non-exact result never equals the true result. Addition, subtraction
//!   and multiplication return the value wrapped modulo `2^W`; failed
//!   divisions return zero for quotient and remainder.
//! - No intermediate wider than the operand type is used, so 64-bit and
//!   pointer-width operations share the 8-bit code path.
//!
//! ## Example
//!
//! ```rust
//! use overcheck_core::num::ops::checked_arithmetic::{checked_div_rem, checked_mul};
//!
//! assert_eq!(checked_mul(16u8, 16).into_parts(), (0, false));
//! assert_eq!(checked_div_rem(7i64, -3).into_parts(), (-2, 1, true));
//! ```

pub mod num;

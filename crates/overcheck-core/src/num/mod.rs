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

//! # Numeric Foundations
//!
//! Fixed-width integer arithmetic that reports whether a result is exact.
//!
//! ## Submodules
//!
//! - `width`: The `FixedWidth` trait describing bit width, signedness, range
//!   bounds and the constants `0`, `1`, `-1` of every supported primitive.
//! - `outcome`: `Checked<T>` and `DivRem<T>`, the value-plus-exactness results
//!   of the checked operations.
//! - `error`: `ArithmeticError<T>`, `Operation` and `FaultKind` for callers that
//!   want to propagate or explain a failure.
//! - `ops`: The operations themselves.

pub mod error;
pub mod ops;
pub mod outcome;
pub mod width;

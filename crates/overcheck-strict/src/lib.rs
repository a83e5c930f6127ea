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

//! # Overcheck Strict
//!
//! Panicking counterparts of the checked operations in `overcheck-core`. Use
//! these where a non-representable result is a programming error and the
//! process should stop loudly rather than continue with a wrong number.
//!
//! ## Modules
//!
//! - `strict`: `strict_add`, `strict_sub`, `strict_mul`, `strict_div` and
//!   `strict_div_rem`, plus the `StrictArithmetic` method trait.
//!
//! ## Features
//!
//! - `tracing` (default): emits a `tracing` error event with the operation,
//!   operands and failure kind right before panicking, so the fault is visible
//!   to whatever subscriber the application installed.

pub mod strict;

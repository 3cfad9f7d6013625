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

//! # DigitFold
//!
//! Remainders of arbitrarily long decimal numbers by a machine-word divisor,
//! computed straight from the digit string without ever building the number.
//!
//! ```rust
//! use digitfold::compute_mod;
//!
//! let digits = "41646849849849161654198498498498498498498498465416515151564651189198484000084984987496874984984984894984984984984981";
//! let r = compute_mod(digits, 97).unwrap();
//! assert!((0..97).contains(&r));
//! ```
//!
//! ## Modules
//!
//! - `fold`: the left-to-right fold (`ModFold`) and the one-shot helpers
//!   `compute_mod` / `compute_mod_str`.
//! - `divisor`: `Divisor<T>`, a strictly positive divisor of any primitive
//!   integer type, parsed from text or checked from a value.
//! - `digits`: `DigitSequence`, a validated dividend that can be reduced by
//!   many divisors.
//! - `error`: `ModError` and its two halves, `DivisorError` and
//!   `DigitSequenceError`.
//!
//! ## Validation
//!
//! A dividend is a non-empty sequence of `'0'..='9'`. Signs, whitespace and
//! separators are rejected; leading zeros are allowed and do not affect the
//! result. A divisor must be strictly positive. Every rejection is a `ModError`,
//! never a panic, and no partial result is ever returned.
//!
//! ## Diagnostics
//!
//! `compute_mod` and `compute_mod_str` emit `tracing` events: `debug` for
//! rejected input and `trace` for successful reductions. No subscriber is
//! installed by this crate.

pub mod digits;
pub mod divisor;
pub mod error;
pub mod fold;

pub use digits::DigitSequence;
pub use divisor::{Divisor, DivisorInt};
pub use error::{DigitSequenceError, DivisorError, ErrorKind, ModError};
pub use fold::{compute_mod, compute_mod_str, ModFold};

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

//! # Modular Steps
//!
//! Arithmetic on residues, i.e. values `x` with `0 <= x < m` for a strictly
//! positive modulus `m`. Every operation stays within the range of the
//! implementing type for any such `m`, including `m == T::MAX`.
//!
//! The hot path of the digit fold is `shift_in_mod`, which computes
//! `(acc * 10 + residue) mod m`. While `acc * 10 + residue` fits the type, it
//! is a single checked multiply-add followed by a remainder. Once the modulus
//! is too close to `T::MAX` for that, the step is assembled from modular
//! additions instead: `10 * acc = 8 * acc + 2 * acc`, with each doubling
//! reduced on the fly.
//!
//! # Examples
//!
//! ```rust
//! # use digitfold_core::num::modular::ModularStep;
//! // (12 * 10 + 5) mod 7 == 125 mod 7 == 6
//! assert_eq!((12i32 % 7).shift_in_mod(5, 7), 6);
//!
//! // Works right at the edge of the type.
//! let m = u8::MAX;
//! assert_eq!(254u8.mul_ten_mod(m), ((254u16 * 10) % 255) as u8);
//! ```

use crate::num::{
    constants::{Ten, Zero},
    ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal, CheckedRemVal},
};
use core::ops::Sub;

/// Overflow-free arithmetic on residues of a strictly positive modulus.
///
/// All operands are required to already be reduced, `0 <= x < modulus`.
/// This is checked with `debug_assert!` only.
pub trait ModularStep: Sized + Copy {
    /// Returns `(self + rhs) mod modulus`.
    fn add_mod(self, rhs: Self, modulus: Self) -> Self;

    /// Returns `(2 * self) mod modulus`.
    #[inline]
    fn double_mod(self, modulus: Self) -> Self {
        self.add_mod(self, modulus)
    }

    /// Returns `(10 * self) mod modulus`.
    fn mul_ten_mod(self, modulus: Self) -> Self;

    /// Returns `(10 * self + residue) mod modulus`, where `residue` is the
    /// reduced value of the digit being shifted in.
    fn shift_in_mod(self, residue: Self, modulus: Self) -> Self;
}

impl<T> ModularStep for T
where
    T: Copy
        + PartialOrd
        + Zero
        + Ten
        + Sub<Output = Self>
        + CheckedAddVal
        + CheckedMulVal
        + CheckedRemVal,
{
    #[inline]
    fn add_mod(self, rhs: Self, modulus: Self) -> Self {
        debug_assert!(T::ZERO < modulus, "modulus must be strictly positive");
        debug_assert!(T::ZERO <= self && self < modulus, "lhs must be reduced");
        debug_assert!(T::ZERO <= rhs && rhs < modulus, "rhs must be reduced");

        // `modulus - rhs` is in `(0, modulus]`, so it cannot overflow.
        let gap = modulus - rhs;
        if self >= gap {
            self - gap
        } else {
            self + rhs
        }
    }

    #[inline]
    fn mul_ten_mod(self, modulus: Self) -> Self {
        match self
            .checked_mul_val(T::TEN)
            .and_then(|v| v.checked_rem_val(modulus))
        {
            Some(r) => r,
            None => {
                let twice = self.double_mod(modulus);
                let eight = twice.double_mod(modulus).double_mod(modulus);
                eight.add_mod(twice, modulus)
            }
        }
    }

    #[inline]
    fn shift_in_mod(self, residue: Self, modulus: Self) -> Self {
        match self
            .checked_mul_val(T::TEN)
            .and_then(|v| v.checked_add_val(residue))
            .and_then(|v| v.checked_rem_val(modulus))
        {
            Some(r) => r,
            None => self.mul_ten_mod(modulus).add_mod(residue, modulus),
        }
    }
}

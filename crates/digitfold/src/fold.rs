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

//! The digit fold.
//!
//! A dividend `d_0 d_1 ... d_{k-1}` (most significant digit first) is reduced
//! modulo `m` by carrying only the remainder of each prefix:
//!
//! ```text
//! acc_0     = 0
//! acc_{i+1} = (acc_i * 10 + d_i) mod m
//! ```
//!
//! Since `(a * 10 + b) mod m == ((a mod m) * 10 + b) mod m`, the last
//! accumulator is the remainder of the whole dividend. The accumulator is
//! always below `m`, so no value wider than the divisor's own type is ever
//! formed; see `digitfold_core::num::modular` for how the step stays inside
//! the type when `m` is close to `T::MAX`.
//!
//! `ModFold` keeps the accumulator between calls, so a dividend may be fed in
//! as many chunks as the caller likes. `compute_mod` and `compute_mod_str` are
//! one-shot wrappers around it.

use crate::{
    divisor::{Divisor, DivisorInt},
    error::{DigitSequenceError, ModError},
};
use digitfold_core::num::modular::ModularStep;

/// Resumable remainder of a decimal digit stream.
///
/// # Examples
///
/// ```rust
/// # use digitfold::{divisor::Divisor, fold::ModFold};
/// let mut fold = ModFold::new(Divisor::new(32i32).unwrap());
/// fold.push_str("777").unwrap();
/// fold.push_str("635").unwrap();
/// assert_eq!(fold.remainder(), Ok(3));
/// assert_eq!(fold.digits_consumed(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModFold<T> {
    divisor: Divisor<T>,
    // `residues[d] == d mod divisor`
    residues: [T; 10],
    acc: T,
    consumed: usize,
}

impl<T> ModFold<T>
where
    T: DivisorInt,
{
    /// Creates an empty fold for `divisor`.
    pub fn new(divisor: Divisor<T>) -> Self {
        let modulus = divisor.get();
        let unit = divisor.unit_residue();

        let mut residues = [T::ZERO; 10];
        for digit in 1..residues.len() {
            residues[digit] = residues[digit - 1].add_mod(unit, modulus);
        }

        Self {
            divisor,
            residues,
            acc: T::ZERO,
            consumed: 0,
        }
    }

    /// Returns the divisor this fold reduces by.
    #[inline]
    pub fn divisor(&self) -> Divisor<T> {
        self.divisor
    }

    /// Returns the number of digits folded so far.
    #[inline]
    pub fn digits_consumed(&self) -> usize {
        self.consumed
    }

    /// Returns `true` if no digit has been folded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// Returns the remainder of the digits folded so far.
    ///
    /// Fails with `DigitSequenceError::Empty` if nothing was pushed, since an
    /// empty sequence does not denote a number.
    #[inline]
    pub fn remainder(&self) -> Result<T, DigitSequenceError> {
        if self.is_empty() {
            Err(DigitSequenceError::Empty)
        } else {
            Ok(self.acc)
        }
    }

    /// Folds a single ASCII digit.
    #[inline]
    pub fn push_digit(&mut self, byte: u8) -> Result<(), DigitSequenceError> {
        self.push_bytes(&[byte])
    }

    /// Folds a chunk of ASCII digits.
    ///
    /// The push is all-or-nothing: if the chunk contains a byte outside
    /// `b'0'..=b'9'` the fold is left unchanged and the error carries the
    /// byte, read as a Latin-1 character, and its absolute position.
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Result<(), DigitSequenceError> {
        match self.fold_chunk(chunk) {
            Ok(acc) => {
                self.commit(acc, chunk.len());
                Ok(())
            }
            Err(offset) => Err(DigitSequenceError::InvalidCharacter {
                character: char::from(chunk[offset]),
                position: self.consumed + offset,
            }),
        }
    }

    /// Folds a chunk of digits given as text.
    ///
    /// Same as `push_bytes`, except that a non-ASCII offender is reported as
    /// the full character rather than its first byte.
    pub fn push_str(&mut self, chunk: &str) -> Result<(), DigitSequenceError> {
        match self.fold_chunk(chunk.as_bytes()) {
            Ok(acc) => {
                self.commit(acc, chunk.len());
                Ok(())
            }
            // Every byte before `offset` is an ASCII digit, so `offset` is a
            // character boundary.
            Err(offset) => Err(DigitSequenceError::InvalidCharacter {
                character: chunk[offset..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                position: self.consumed + offset,
            }),
        }
    }

    /// Folds `chunk` into a copy of the accumulator, returning the new
    /// accumulator or the offset of the first non-digit byte.
    #[inline]
    fn fold_chunk(&self, chunk: &[u8]) -> Result<T, usize> {
        let modulus = self.divisor.get();
        let mut acc = self.acc;
        for (offset, &byte) in chunk.iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(offset);
            }
            let residue = self.residues[usize::from(byte - b'0')];
            acc = acc.shift_in_mod(residue, modulus);
        }
        Ok(acc)
    }

    /// Folds bytes already known to be ASCII digits.
    #[inline]
    pub(crate) fn push_validated(&mut self, chunk: &[u8]) {
        debug_assert!(chunk.iter().all(u8::is_ascii_digit));
        let modulus = self.divisor.get();
        let mut acc = self.acc;
        for &byte in chunk {
            acc = acc.shift_in_mod(self.residues[usize::from(byte - b'0')], modulus);
        }
        self.commit(acc, chunk.len());
    }

    #[inline]
    fn commit(&mut self, acc: T, digits: usize) {
        self.acc = acc;
        self.consumed += digits;
    }
}

/// Computes `digits mod divisor` for an arbitrarily long decimal dividend.
///
/// The divisor is checked first: zero or negative divisors are rejected with
/// `ModError::InvalidDivisor` before the dividend is looked at. The dividend
/// must be a non-empty run of `'0'..='9'`; anything else is rejected with
/// `ModError::InvalidDigitSequence`.
///
/// # Examples
///
/// ```rust
/// # use digitfold::{compute_mod, error::ErrorKind};
/// assert_eq!(compute_mod("777635", 32), Ok(3));
/// assert_eq!(compute_mod("491984984", 978), Ok(128));
///
/// let err = compute_mod("12a3", 7).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidDigitSequence);
///
/// let err = compute_mod("123", 0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidDivisor);
/// ```
pub fn compute_mod<T>(digits: &str, divisor: T) -> Result<T, ModError>
where
    T: DivisorInt,
{
    let result = Divisor::new(divisor)
        .map_err(ModError::from)
        .and_then(|divisor| reduce(digits, divisor));
    traced(digits, result)
}

/// Computes `digits mod divisor` where the divisor is itself given as text.
///
/// The divisor is parsed as a base-10 `T` and then handled exactly like
/// `compute_mod`.
///
/// # Examples
///
/// ```rust
/// # use digitfold::{compute_mod_str, error::ErrorKind};
/// assert_eq!(compute_mod_str::<i32>("999999", "68"), Ok(59));
///
/// let err = compute_mod_str::<i32>("123", "abc").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidDivisor);
/// ```
pub fn compute_mod_str<T>(digits: &str, divisor: &str) -> Result<T, ModError>
where
    T: DivisorInt,
{
    let result = Divisor::<T>::parse(divisor)
        .map_err(ModError::from)
        .and_then(|divisor| reduce(digits, divisor));
    traced(digits, result)
}

#[inline]
fn reduce<T>(digits: &str, divisor: Divisor<T>) -> Result<T, ModError>
where
    T: DivisorInt,
{
    let mut fold = ModFold::new(divisor);
    fold.push_str(digits)?;
    Ok(fold.remainder()?)
}

fn traced<T>(digits: &str, result: Result<T, ModError>) -> Result<T, ModError>
where
    T: DivisorInt,
{
    match &result {
        Ok(remainder) => {
            tracing::trace!(digits = digits.len(), %remainder, "reduced digit sequence")
        }
        Err(err) => tracing::debug!(%err, kind = %err.kind(), "rejected modulo input"),
    }
    result
}

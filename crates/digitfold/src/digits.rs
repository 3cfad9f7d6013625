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

//! Validated dividends.

use crate::{
    divisor::{Divisor, DivisorInt},
    error::DigitSequenceError,
    fold::ModFold,
};

/// A non-empty run of ASCII decimal digits, most significant digit first.
///
/// Validating once up front lets the same dividend be reduced by any number
/// of divisors without checking its characters again.
///
/// # Examples
///
/// ```rust
/// # use digitfold::{digits::DigitSequence, divisor::Divisor};
/// let n = DigitSequence::new("00042").unwrap();
/// assert_eq!(n.significant_digits(), "42");
/// assert_eq!(n.rem(Divisor::new(5u8).unwrap()), 2);
/// assert_eq!(n.rem(Divisor::new(40i64).unwrap()), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSequence<'a>(&'a str);

impl<'a> DigitSequence<'a> {
    /// Validates `digits` as a dividend.
    pub fn new(digits: &'a str) -> Result<Self, DigitSequenceError> {
        if digits.is_empty() {
            return Err(DigitSequenceError::Empty);
        }
        match digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            Some((position, character)) => Err(DigitSequenceError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(Self(digits)),
        }
    }

    /// Returns the digits as text.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the number of digits, leading zeros included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an empty sequence is rejected on construction.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the digits without leading zeros, or `"0"` if every digit is zero.
    pub fn significant_digits(&self) -> &'a str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            &self.0[self.0.len() - 1..]
        } else {
            trimmed
        }
    }

    /// Returns `true` if the sequence denotes zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0')
    }

    /// Returns `self mod divisor`. Infallible, both operands being validated.
    pub fn rem<T>(&self, divisor: Divisor<T>) -> T
    where
        T: DivisorInt,
    {
        let mut fold = ModFold::new(divisor);
        fold.push_validated(self.0.as_bytes());
        fold.remainder()
            .expect("a validated digit sequence holds at least one digit")
    }
}

impl<'a> TryFrom<&'a str> for DigitSequence<'a> {
    type Error = DigitSequenceError;

    #[inline]
    fn try_from(digits: &'a str) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl AsRef<str> for DigitSequence<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl std::fmt::Display for DigitSequence<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

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

//! Error types for the digit fold.
//!
//! Every failure belongs to exactly one of two kinds: the divisor was
//! rejected (`DivisorError`) or the dividend was rejected
//! (`DigitSequenceError`). `ModError` joins both so the top-level functions
//! can report either through a single `Result`.

use thiserror::Error;

/// The divisor could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DivisorError {
    /// The divisor was supplied as text that is not a base-10 integer of the
    /// requested type.
    #[error("divider must be an integer: could not parse '{input}' as {type_name}")]
    NotAnInteger {
        /// The text that failed to parse.
        input: String,
        /// The integer type the text was parsed into.
        type_name: &'static str,
    },
    /// The divisor is zero or negative.
    #[error("divisor must be strictly positive")]
    NotPositive,
}

/// The dividend is not a non-empty sequence of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitSequenceError {
    /// No digits were supplied.
    #[error("number sequence must contain at least one digit")]
    Empty,
    /// A character outside `'0'..='9'` was found.
    #[error("invalid character in number sequence: {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character from the start of the dividend.
        position: usize,
    },
}

/// The error type of `compute_mod` and `compute_mod_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModError {
    #[error("invalid divisor: {0}")]
    InvalidDivisor(#[from] DivisorError),
    #[error("invalid digit sequence: {0}")]
    InvalidDigitSequence(#[from] DigitSequenceError),
}

/// Coarse classification of a `ModError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDivisor,
    InvalidDigitSequence,
}

impl ErrorKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDivisor => "InvalidDivisor",
            Self::InvalidDigitSequence => "InvalidDigitSequence",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ModError {
    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDivisor(_) => ErrorKind::InvalidDivisor,
            Self::InvalidDigitSequence(_) => ErrorKind::InvalidDigitSequence,
        }
    }
}

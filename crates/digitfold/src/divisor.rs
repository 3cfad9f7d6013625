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

//! Validated divisors.
//!
//! A `Divisor<T>` is a strictly positive value of a primitive integer type.
//! Holding one is proof that reducing a dividend by it can neither divide by
//! zero nor produce a negative remainder, so the fold itself has no divisor
//! checks left to make.

use crate::error::DivisorError;
use digitfold_core::num::{
    constants::{PlusOne, Zero},
    modular::ModularStep,
};
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Integer types a dividend can be reduced by.
///
/// Implemented for every primitive integer, signed and unsigned.
pub trait DivisorInt: PrimInt + ModularStep + Zero + PlusOne + Debug + Display {}

impl<T> DivisorInt for T where T: PrimInt + ModularStep + Zero + PlusOne + Debug + Display {}

/// A strictly positive divisor.
///
/// # Examples
///
/// ```rust
/// # use digitfold::divisor::Divisor;
/// let d = Divisor::new(97i32).unwrap();
/// assert_eq!(d.get(), 97);
///
/// assert!(Divisor::new(0i32).is_err());
/// assert!(Divisor::new(-3i64).is_err());
///
/// let parsed: Divisor<u16> = "978".parse().unwrap();
/// assert_eq!(parsed.get(), 978);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Divisor<T>(T);

impl<T> Divisor<T>
where
    T: DivisorInt,
{
    /// Creates a divisor, rejecting zero and negative values.
    #[inline]
    pub fn new(value: T) -> Result<Self, DivisorError> {
        if value > T::ZERO {
            Ok(Self(value))
        } else {
            Err(DivisorError::NotPositive)
        }
    }

    /// Parses a base-10 divisor and validates it.
    ///
    /// The text is handed to the type's own radix parser unchanged, so a
    /// leading `+` is accepted while whitespace and separators are not.
    /// Surrounding whitespace is rejected too; callers reading padded input
    /// should trim it first.
    /// Values outside the range of `T` are reported as
    /// `DivisorError::NotAnInteger`.
    pub fn parse(input: &str) -> Result<Self, DivisorError> {
        let value = T::from_str_radix(input, 10).map_err(|_| DivisorError::NotAnInteger {
            input: input.to_string(),
            type_name: std::any::type_name::<T>(),
        })?;
        Self::new(value)
    }

    /// Returns the divisor value.
    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    /// Returns `1 mod divisor`, i.e. `0` for a divisor of one and `1` otherwise.
    #[inline]
    pub(crate) fn unit_residue(&self) -> T {
        if self.0 == T::PLUS_ONE {
            T::ZERO
        } else {
            T::PLUS_ONE
        }
    }
}

impl<T> FromStr for Divisor<T>
where
    T: DivisorInt,
{
    type Err = DivisorError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Display for Divisor<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

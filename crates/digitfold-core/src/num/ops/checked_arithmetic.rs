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

use core::ops::{Add, Mul, Rem};

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use digitfold_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 250;
/// assert_eq!(a.checked_add_val(9), None);
/// assert_eq!(a.checked_add_val(5), Some(255));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; u8, u16, u32, u64, u128, usize);
checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; i8, i16, i32, i64, i128, isize);

/// A trait for types that support checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use digitfold_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: i8 = 13;
/// assert_eq!(a.checked_mul_val(10), None); // 130 > i8::MAX
/// assert_eq!(a.checked_mul_val(9), Some(117));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; u8, u16, u32, u64, u128, usize);
checked_impl_val!(CheckedMulVal, checked_mul_val, checked_mul; i8, i16, i32, i64, i128, isize);

/// A trait for types that support checked remainder by value.
///
/// # Examples
///
/// ```rust
/// # use digitfold_core::num::ops::checked_arithmetic::CheckedRemVal;
/// let a: i32 = 777635;
/// assert_eq!(a.checked_rem_val(0), None); // Division by zero
/// assert_eq!(a.checked_rem_val(32), Some(3));
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` if the divisor is
    /// zero or the operation overflows (`MIN % -1` for signed types).
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedRemVal, checked_rem_val, checked_rem; u8, u16, u32, u64, u128, usize);
checked_impl_val!(CheckedRemVal, checked_rem_val, checked_rem; i8, i16, i32, i64, i128, isize);

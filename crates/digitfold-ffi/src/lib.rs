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

//! # DigitFold FFI
//!
//! C-compatible entry points for reducing decimal digit strings modulo a
//! 64-bit divisor, for hosts such as C, C++, C# or Python.
//!
//! ## Conventions
//!
//! 1.  **Status codes**: every reduction returns a `DigitFoldFfiStatus`. The
//!     remainder is written through the `out_remainder` pointer only when the
//!     status is `Ok`; on failure the pointee is left untouched.
//! 2.  **Borrowed strings**: input strings are NUL-terminated and only read for
//!     the duration of the call. Nothing is allocated that the host must free.
//! 3.  **Fail-Fast Safety**: passing `NULL` for any pointer panics. The entry
//!     points cannot unwind into the host, so the panic aborts the process
//!     instead of invoking undefined behavior.

use digitfold::{Divisor, DivisorError, ErrorKind, ModError, ModFold};
use libc::c_char;
use std::ffi::CStr;

/// FFI-compatible outcome of a reduction.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitFoldFfiStatus {
    Ok = 0,
    InvalidDivisor = 1,
    InvalidDigitSequence = 2,
}

impl DigitFoldFfiStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::InvalidDivisor => "InvalidDivisor",
            Self::InvalidDigitSequence => "InvalidDigitSequence",
        }
    }

    /// Maps a raw status code coming from the host, `None` if it is unknown.
    #[inline]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::InvalidDivisor),
            2 => Some(Self::InvalidDigitSequence),
            _ => None,
        }
    }

    #[inline]
    fn as_c_str(&self) -> &'static CStr {
        match self {
            Self::Ok => c"Ok",
            Self::InvalidDivisor => c"InvalidDivisor",
            Self::InvalidDigitSequence => c"InvalidDigitSequence",
        }
    }
}

impl From<ErrorKind> for DigitFoldFfiStatus {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidDivisor => DigitFoldFfiStatus::InvalidDivisor,
            ErrorKind::InvalidDigitSequence => DigitFoldFfiStatus::InvalidDigitSequence,
        }
    }
}

impl std::fmt::Display for DigitFoldFfiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Panics unless `ptr` is non-null. Kept outside the `extern "C"` entry points
/// so the check itself is an ordinary, unwinding Rust function.
#[inline]
fn require_non_null<T>(ptr: *const T, function: &str, argument: &str) {
    assert!(
        !ptr.is_null(),
        "called `{function}` with null `{argument}`"
    );
}

/// Reduces raw dividend bytes. Non-UTF-8 input is fine here; any byte that is
/// not an ASCII digit is rejected by the fold.
fn reduce_bytes(
    digits: &[u8],
    divisor: Result<Divisor<i64>, DivisorError>,
) -> Result<i64, ModError> {
    let mut fold = ModFold::new(divisor?);
    fold.push_bytes(digits)?;
    Ok(fold.remainder()?)
}

/// Writes the remainder on success and maps the outcome to a status code.
///
/// # Safety
///
/// `out_remainder` must be valid for writes.
#[inline]
unsafe fn store(result: Result<i64, ModError>, out_remainder: *mut i64) -> DigitFoldFfiStatus {
    match result {
        Ok(remainder) => {
            *out_remainder = remainder;
            DigitFoldFfiStatus::Ok
        }
        Err(err) => err.kind().into(),
    }
}

/// Computes `digits mod divisor`.
///
/// # Panics
///
/// This function will panic, aborting the process, if `digits` or
/// `out_remainder` is null.
///
/// # Safety
///
/// `digits` must point to a valid NUL-terminated string and `out_remainder`
/// must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn digitfold_compute_mod(
    digits: *const c_char,
    divisor: i64,
    out_remainder: *mut i64,
) -> DigitFoldFfiStatus {
    require_non_null(digits, "digitfold_compute_mod", "digits");
    require_non_null(out_remainder.cast_const(), "digitfold_compute_mod", "out_remainder");

    let digits = CStr::from_ptr(digits).to_bytes();
    store(reduce_bytes(digits, Divisor::new(divisor)), out_remainder)
}

/// Computes `digits mod divisor`, with the divisor given as a base-10 string.
///
/// # Panics
///
/// This function will panic, aborting the process, if any pointer is null.
///
/// # Safety
///
/// `digits` and `divisor` must point to valid NUL-terminated strings and
/// `out_remainder` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn digitfold_compute_mod_str(
    digits: *const c_char,
    divisor: *const c_char,
    out_remainder: *mut i64,
) -> DigitFoldFfiStatus {
    require_non_null(digits, "digitfold_compute_mod_str", "digits");
    require_non_null(divisor, "digitfold_compute_mod_str", "divisor");
    require_non_null(out_remainder.cast_const(), "digitfold_compute_mod_str", "out_remainder");

    let digits = CStr::from_ptr(digits).to_bytes();
    let divisor = CStr::from_ptr(divisor);
    let divisor = match divisor.to_str() {
        Ok(text) => Divisor::parse(text),
        Err(_) => Err(DivisorError::NotAnInteger {
            input: divisor.to_string_lossy().into_owned(),
            type_name: "i64",
        }),
    };
    store(reduce_bytes(digits, divisor), out_remainder)
}

/// Returns the name of the status code `status` as a static C string, or
/// `"Unknown"` for a code that is not a `DigitFoldFfiStatus`.
/// The pointer is valid for the lifetime of the program and must not be freed.
#[no_mangle]
pub extern "C" fn digitfold_status_str(status: i32) -> *const c_char {
    DigitFoldFfiStatus::from_code(status)
        .map_or(c"Unknown", |status| status.as_c_str())
        .as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn cstr(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn call(digits: &str, divisor: i64) -> (DigitFoldFfiStatus, i64) {
        let digits = cstr(digits);
        let mut out = -1;
        let status = digitfold_compute_mod(digits.as_ptr(), divisor, &mut out);
        (status, out)
    }

    unsafe fn call_str(digits: &str, divisor: &str) -> (DigitFoldFfiStatus, i64) {
        let digits = cstr(digits);
        let divisor = cstr(divisor);
        let mut out = -1;
        let status = digitfold_compute_mod_str(digits.as_ptr(), divisor.as_ptr(), &mut out);
        (status, out)
    }

    #[test]
    fn test_compute_mod_ok() {
        unsafe {
            assert_eq!(call("777635", 32), (DigitFoldFfiStatus::Ok, 3));
            assert_eq!(call("999999", 68), (DigitFoldFfiStatus::Ok, 59));
            assert_eq!(call("491984984", 978), (DigitFoldFfiStatus::Ok, 128));
            assert_eq!(call("9223372036854775808", i64::MAX), (DigitFoldFfiStatus::Ok, 1));
        }
    }

    #[test]
    fn test_compute_mod_str_ok() {
        unsafe {
            assert_eq!(call_str("777635", "32"), (DigitFoldFfiStatus::Ok, 3));
            assert_eq!(call_str("00042", "5"), (DigitFoldFfiStatus::Ok, 2));
        }
    }

    #[test]
    fn test_failures_leave_output_untouched() {
        unsafe {
            assert_eq!(call("123", 0), (DigitFoldFfiStatus::InvalidDivisor, -1));
            assert_eq!(call("123", -9), (DigitFoldFfiStatus::InvalidDivisor, -1));
            assert_eq!(call("12a3", 7), (DigitFoldFfiStatus::InvalidDigitSequence, -1));
            assert_eq!(call("", 7), (DigitFoldFfiStatus::InvalidDigitSequence, -1));
            assert_eq!(call_str("123", "abc"), (DigitFoldFfiStatus::InvalidDivisor, -1));
            assert_eq!(call_str("1 2", "7"), (DigitFoldFfiStatus::InvalidDigitSequence, -1));
        }
    }

    #[test]
    fn test_non_utf8_input() {
        let digits = CString::new(vec![b'1', 0xc3, b'2']).unwrap();
        let divisor = CString::new(vec![b'7', 0xff]).unwrap();
        let twelve = cstr("12");
        let mut out = -1;
        unsafe {
            assert_eq!(
                digitfold_compute_mod(digits.as_ptr(), 7, &mut out),
                DigitFoldFfiStatus::InvalidDigitSequence
            );
            assert_eq!(
                digitfold_compute_mod_str(twelve.as_ptr(), divisor.as_ptr(), &mut out),
                DigitFoldFfiStatus::InvalidDivisor
            );
        }
        assert_eq!(out, -1);
    }

    #[test]
    fn test_status_str() {
        for status in [
            DigitFoldFfiStatus::Ok,
            DigitFoldFfiStatus::InvalidDivisor,
            DigitFoldFfiStatus::InvalidDigitSequence,
        ] {
            let name = unsafe { CStr::from_ptr(digitfold_status_str(status as i32)) };
            assert_eq!(name.to_str().unwrap(), status.as_str());
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_status_discriminants() {
        assert_eq!(DigitFoldFfiStatus::Ok as i32, 0);
        assert_eq!(DigitFoldFfiStatus::InvalidDivisor as i32, 1);
        assert_eq!(DigitFoldFfiStatus::InvalidDigitSequence as i32, 2);
    }

    #[test]
    fn test_status_str_unknown_code() {
        for code in [-1, 3, i32::MAX, i32::MIN] {
            assert_eq!(DigitFoldFfiStatus::from_code(code), None);
            let name = unsafe { CStr::from_ptr(digitfold_status_str(code)) };
            assert_eq!(name.to_str().unwrap(), "Unknown");
        }
    }

    #[test]
    fn test_from_code_round_trips_discriminants() {
        assert_eq!(DigitFoldFfiStatus::from_code(0), Some(DigitFoldFfiStatus::Ok));
        assert_eq!(
            DigitFoldFfiStatus::from_code(2),
            Some(DigitFoldFfiStatus::InvalidDigitSequence)
        );
    }

    #[test]
    #[should_panic(expected = "called `digitfold_compute_mod` with null `digits`")]
    fn test_require_non_null_rejects_null() {
        require_non_null(std::ptr::null::<c_char>(), "digitfold_compute_mod", "digits");
    }

    #[test]
    fn test_require_non_null_accepts_valid_pointer() {
        let digits = cstr("7");
        require_non_null(digits.as_ptr(), "digitfold_compute_mod", "digits");
    }
}

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

//! Checks the digit fold against arbitrary-precision arithmetic.

use digitfold::{compute_mod, compute_mod_str, DigitSequence, Divisor, ErrorKind, ModFold};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CASES_PER_TYPE: usize = 500;
const MAX_DIGITS: usize = 160;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn random_digits(rng: &mut impl Rng) -> String {
    let len = rng.random_range(1..=MAX_DIGITS);
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn big(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).expect("reference parse of a valid digit string")
}

macro_rules! reference_test {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let mut rng = rng();
            let edges: [$t; 4] = [1, 2, <$t>::MAX - 1, <$t>::MAX];

            for case in 0..CASES_PER_TYPE {
                let digits = random_digits(&mut rng);
                let m: $t = if case < edges.len() {
                    edges[case]
                } else {
                    rng.random_range(1..=<$t>::MAX)
                };

                let r = compute_mod(&digits, m).expect("valid input");
                assert!((0..m).contains(&r), "{r} out of range for divisor {m}");

                let expected = big(&digits) % BigUint::from(u128::try_from(m).unwrap());
                assert_eq!(
                    BigUint::from(u128::try_from(r).unwrap()),
                    expected,
                    "{digits} mod {m}"
                );
            }
        }
    };
}

reference_test!(test_reference_u8, u8);
reference_test!(test_reference_i8, i8);
reference_test!(test_reference_u16, u16);
reference_test!(test_reference_i32, i32);
reference_test!(test_reference_u64, u64);
reference_test!(test_reference_i64, i64);
reference_test!(test_reference_usize, usize);
reference_test!(test_reference_i128, i128);
reference_test!(test_reference_u128, u128);

#[test]
fn test_small_divisors_exhaustive() {
    let mut rng = rng();
    for _ in 0..50 {
        let digits = random_digits(&mut rng);
        let n = big(&digits);
        for m in 1..=1_000u32 {
            let expected = &n % BigUint::from(m);
            assert_eq!(BigUint::from(compute_mod(&digits, m).unwrap()), expected);
        }
    }
}

#[test]
fn test_leading_zeros_do_not_change_remainder() {
    let mut rng = rng();
    for _ in 0..200 {
        let digits = random_digits(&mut rng);
        let padded = format!("{}{}", "0".repeat(rng.random_range(1..20)), digits);
        let m = rng.random_range(1..=i64::MAX);
        assert_eq!(compute_mod(&padded, m), compute_mod(&digits, m));
    }
}

#[test]
fn test_string_divisor_equivalence() {
    let mut rng = rng();
    for _ in 0..200 {
        let digits = random_digits(&mut rng);
        let m = rng.random_range(1..=i32::MAX);
        assert_eq!(compute_mod_str::<i32>(&digits, &m.to_string()), compute_mod(&digits, m));
    }
}

#[test]
fn test_chunked_fold_matches_reference() {
    let mut rng = rng();
    for _ in 0..100 {
        let digits = random_digits(&mut rng);
        let m = rng.random_range(1..=u64::MAX);

        let mut fold = ModFold::new(Divisor::new(m).unwrap());
        let mut rest = digits.as_str();
        while !rest.is_empty() {
            let (chunk, tail) = rest.split_at(rng.random_range(1..=rest.len()));
            fold.push_str(chunk).unwrap();
            rest = tail;
        }

        let expected = big(&digits) % BigUint::from(m);
        assert_eq!(BigUint::from(fold.remainder().unwrap()), expected);
    }
}

#[test]
fn test_digit_sequence_reused_across_divisors() {
    let mut rng = rng();
    let digits = random_digits(&mut rng);
    let n = DigitSequence::new(&digits).unwrap();
    let reference = big(&digits);
    for _ in 0..200 {
        let m = rng.random_range(1..=u32::MAX);
        assert_eq!(
            BigUint::from(n.rem(Divisor::new(m).unwrap())),
            &reference % BigUint::from(m)
        );
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(compute_mod_str::<i32>("777635", "32"), Ok(3));
    assert_eq!(compute_mod_str::<i32>("999999", "68"), Ok(59));
    assert_eq!(compute_mod_str::<i32>("491984984", "978"), Ok(128));

    let long = "41646849849849161654198498498498498498498498465416515151564651189198484000084984987496874984984984894984984984984981";
    let r = compute_mod_str::<i32>(long, "97").unwrap();
    assert!(r < 97);
    assert_eq!(BigUint::from(r as u32), big(long) % BigUint::from(97u32));
}

#[test]
fn test_rejections() {
    let kind = |r: Result<i32, digitfold::ModError>| r.unwrap_err().kind();
    assert_eq!(kind(compute_mod_str("123", "abc")), ErrorKind::InvalidDivisor);
    assert_eq!(kind(compute_mod("123", 0)), ErrorKind::InvalidDivisor);
    assert_eq!(kind(compute_mod("123", -1)), ErrorKind::InvalidDivisor);
    assert_eq!(kind(compute_mod("12a3", 7)), ErrorKind::InvalidDigitSequence);
    assert_eq!(kind(compute_mod("", 7)), ErrorKind::InvalidDigitSequence);
}

#[test]
fn test_rejection_messages() {
    let err = compute_mod_str::<i32>("123", "abc").unwrap_err();
    assert!(err.to_string().contains("divider must be an integer"), "{err}");

    let err = compute_mod("12a3", 7).unwrap_err();
    assert!(err.to_string().contains("invalid character in number sequence"), "{err}");
}

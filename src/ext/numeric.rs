//! Extension traits for integers and floats.
//!
//! Division helpers pair a floored quotient (`div`) with Rust's native truncated remainder
//! (`modulo`, the sign follows the dividend), so `divmod` is exactly `(div, %)`. A zero divisor is
//! reported as [`Error::DivisionByZero`] instead of panicking.

use crate::constants::ordinal;
use crate::error::{Error, Result};

/// Extension trait for signed integers.
pub trait IntegerExt: Sized + Copy {
    fn is_even(self) -> bool;
    fn is_odd(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_nonzero(self) -> bool;
    /// `None` for zero, `Some(self)` otherwise.
    fn nonzero(self) -> Option<Self>;
    /// Inclusive range test; `a` must not exceed `b`.
    fn is_between(self, a: Self, b: Self) -> bool;
    /// `self + 1`.
    ///
    /// # Errors
    /// * `Error::Overflow` - For `MAX.next()`
    fn next(self) -> Result<Self>;
    /// # Errors
    /// * `Error::Overflow` - If the square does not fit in `Self`
    fn squared(self) -> Result<Self>;
    /// # Errors
    /// * `Error::Overflow` - If the cube does not fit in `Self`
    fn cubed(self) -> Result<Self>;

    /// English ordinal suffix: `"st"`, `"nd"`, `"rd"` or `"th"`.
    ///
    /// # Examples
    /// ```
    /// use garnish::ext::IntegerExt;
    ///
    /// assert_eq!(1.ordinal(), "st");
    /// assert_eq!(112.ordinal(), "th");
    /// assert_eq!(23.ordinalize(), "23rd");
    /// ```
    fn ordinal(self) -> &'static str;
    fn ordinalize(self) -> String;

    /// Decimal digits of the absolute value, most significant first.
    fn digits(self) -> Vec<u8>;
    /// Positive divisors of the absolute value, ascending. Zero has none.
    ///
    /// Divisors that do not fit in `Self` are left out, so `MIN.factors()` stops short of
    /// `|MIN|` itself.
    fn factors(self) -> Vec<Self>;
    fn is_prime(self) -> bool;

    /// `self, self + 1, ..., n`; empty when `self > n`.
    fn upto(self, n: Self) -> Vec<Self>;
    fn upto_each<F: FnMut(Self)>(self, n: Self, f: F);
    /// Calls `f(0)` through `f(self - 1)`.
    fn times<F: FnMut(Self)>(self, f: F);

    /// Quotient rounded toward negative infinity.
    ///
    /// # Errors
    /// * `Error::DivisionByZero` - If `n` is zero
    /// * `Error::Overflow` - For `MIN.div(-1)`
    fn div(self, n: Self) -> Result<Self>;
    /// Remainder with the sign of `self`, exactly like `%`.
    ///
    /// # Errors
    /// * `Error::DivisionByZero` - If `n` is zero
    fn modulo(self, n: Self) -> Result<Self>;
    fn divmod(self, n: Self) -> Result<(Self, Self)>;
    /// Greatest common divisor, never negative; `gcd(0, 0)` is zero.
    fn gcd(self, n: Self) -> Result<Self>;
    /// Least common multiple, never negative.
    ///
    /// # Errors
    /// * `Error::DivisionByZero` - If both operands are zero
    /// * `Error::Overflow` - If the result does not fit in `Self`
    fn lcm(self, n: Self) -> Result<Self>;
}

fn ordinal_suffix(n: u128) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => ordinal::TH,
        (_, 1) => ordinal::ST,
        (_, 2) => ordinal::ND,
        (_, 3) => ordinal::RD,
        _ => ordinal::TH,
    }
}

fn digits_of(n: u128) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

fn factors_of(n: u128) -> Vec<u128> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i: u128 = 1;
    while i * i <= n {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

fn is_prime_u128(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i: u128 = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

fn gcd_u128(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd_u128(b, a % b)
    }
}

macro_rules! impl_integer_ext {
    ($($t:ty),*) => {$(
        impl IntegerExt for $t {
            fn is_even(self) -> bool {
                self % 2 == 0
            }

            fn is_odd(self) -> bool {
                self % 2 != 0
            }

            fn is_zero(self) -> bool {
                self == 0
            }

            fn is_nonzero(self) -> bool {
                self != 0
            }

            fn nonzero(self) -> Option<Self> {
                (self != 0).then_some(self)
            }

            fn is_between(self, a: Self, b: Self) -> bool {
                a <= self && self <= b
            }

            fn next(self) -> Result<Self> {
                self.checked_add(1)
                    .ok_or_else(|| Error::Overflow(format!("{self}.next()")))
            }

            fn squared(self) -> Result<Self> {
                self.checked_mul(self)
                    .ok_or_else(|| Error::Overflow(format!("{self}.squared()")))
            }

            fn cubed(self) -> Result<Self> {
                self.checked_mul(self)
                    .and_then(|sq| sq.checked_mul(self))
                    .ok_or_else(|| Error::Overflow(format!("{self}.cubed()")))
            }

            fn ordinal(self) -> &'static str {
                ordinal_suffix(self.unsigned_abs() as u128)
            }

            fn ordinalize(self) -> String {
                format!("{self}{}", self.ordinal())
            }

            fn digits(self) -> Vec<u8> {
                digits_of(self.unsigned_abs() as u128)
            }

            fn factors(self) -> Vec<Self> {
                factors_of(self.unsigned_abs() as u128)
                    .into_iter()
                    .filter_map(|f| <$t>::try_from(f).ok())
                    .collect()
            }

            fn is_prime(self) -> bool {
                self >= 2 && is_prime_u128(self as u128)
            }

            fn upto(self, n: Self) -> Vec<Self> {
                (self..=n).collect()
            }

            fn upto_each<F: FnMut(Self)>(self, n: Self, f: F) {
                (self..=n).for_each(f)
            }

            fn times<F: FnMut(Self)>(self, f: F) {
                (0..self).for_each(f)
            }

            fn div(self, n: Self) -> Result<Self> {
                if n == 0 {
                    return Err(Error::DivisionByZero(format!("{self}.div(0)")));
                }
                let q = self
                    .checked_div(n)
                    .ok_or_else(|| Error::Overflow(format!("{self}.div({n})")))?;
                // Truncated quotient is one too high when the signs differ and it is inexact.
                if self % n != 0 && ((self < 0) != (n < 0)) {
                    Ok(q - 1)
                } else {
                    Ok(q)
                }
            }

            fn modulo(self, n: Self) -> Result<Self> {
                if n == 0 {
                    return Err(Error::DivisionByZero(format!("{self}.modulo(0)")));
                }
                Ok(self.wrapping_rem(n))
            }

            fn divmod(self, n: Self) -> Result<(Self, Self)> {
                Ok((IntegerExt::div(self, n)?, IntegerExt::modulo(self, n)?))
            }

            fn gcd(self, n: Self) -> Result<Self> {
                let g = gcd_u128(self.unsigned_abs() as u128, n.unsigned_abs() as u128);
                <$t>::try_from(g)
                    .map_err(|_| Error::Overflow(format!("gcd({self}, {n}) = {g}")))
            }

            fn lcm(self, n: Self) -> Result<Self> {
                let (a, b) = (self.unsigned_abs() as u128, n.unsigned_abs() as u128);
                let g = gcd_u128(a, b);
                if g == 0 {
                    return Err(Error::DivisionByZero(format!("lcm({self}, {n})")));
                }
                (a / g)
                    .checked_mul(b)
                    .and_then(|l| <$t>::try_from(l).ok())
                    .ok_or_else(|| Error::Overflow(format!("lcm({self}, {n})")))
            }
        }
    )*};
}

impl_integer_ext!(i8, i16, i32, i64, i128, isize);

/// Extension trait for floating point numbers.
pub trait FloatExt: Sized + Copy {
    /// Finite with no fractional part.
    fn is_integer(self) -> bool;
    fn is_even(self) -> bool;
    /// Only integral values can be odd.
    fn is_odd(self) -> bool;
    fn is_positive(self) -> bool;
    fn is_negative(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_nonzero(self) -> bool;
    fn nonzero(self) -> Option<Self>;
    fn is_between(self, a: Self, b: Self) -> bool;
    fn next(self) -> Self;
    fn squared(self) -> Self;
    fn cubed(self) -> Self;
    /// `(self / n).floor()`.
    fn div(self, n: Self) -> Result<Self>;
    fn modulo(self, n: Self) -> Result<Self>;
    fn divmod(self, n: Self) -> Result<(Self, Self)>;
}

macro_rules! impl_float_ext {
    ($($t:ty),*) => {$(
        impl FloatExt for $t {
            fn is_integer(self) -> bool {
                self.is_finite() && self.fract() == 0.0
            }

            fn is_even(self) -> bool {
                self % 2.0 == 0.0
            }

            fn is_odd(self) -> bool {
                (self % 2.0).abs() == 1.0
            }

            fn is_positive(self) -> bool {
                self > 0.0
            }

            fn is_negative(self) -> bool {
                self < 0.0
            }

            fn is_zero(self) -> bool {
                self == 0.0
            }

            fn is_nonzero(self) -> bool {
                self != 0.0
            }

            fn nonzero(self) -> Option<Self> {
                (self != 0.0).then_some(self)
            }

            fn is_between(self, a: Self, b: Self) -> bool {
                a <= self && self <= b
            }

            fn next(self) -> Self {
                self + 1.0
            }

            fn squared(self) -> Self {
                self * self
            }

            fn cubed(self) -> Self {
                self * self * self
            }

            fn div(self, n: Self) -> Result<Self> {
                if n == 0.0 {
                    return Err(Error::DivisionByZero(format!("{self}.div(0)")));
                }
                Ok((self / n).floor())
            }

            fn modulo(self, n: Self) -> Result<Self> {
                if n == 0.0 {
                    return Err(Error::DivisionByZero(format!("{self}.modulo(0)")));
                }
                Ok(self % n)
            }

            fn divmod(self, n: Self) -> Result<(Self, Self)> {
                Ok((FloatExt::div(self, n)?, FloatExt::modulo(self, n)?))
            }
        }
    )*};
}

impl_float_ext!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (102, "102nd"),
            (111, "111th"),
            (0, "0th"),
            (-1, "-1st"),
        ];
        for (n, expected) in cases {
            assert_eq!(n.ordinalize(), expected, "ordinalize({n})");
        }
    }

    #[test]
    fn test_digits_and_factors() {
        assert_eq!(1234.digits(), vec![1, 2, 3, 4]);
        assert_eq!((-907).digits(), vec![9, 0, 7]);
        assert_eq!(0.digits(), vec![0]);
        assert_eq!(12.factors(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!((-9).factors(), vec![1, 3, 9]);
        assert_eq!(16.factors(), vec![1, 2, 4, 8, 16]);
        assert!(0.factors().is_empty());
        assert_eq!(i8::MIN.digits(), vec![1, 2, 8]);
        assert_eq!(i8::MIN.factors(), vec![1, 2, 4, 8, 16, 32, 64]);
        assert_eq!(i8::MAX.factors(), vec![1, 127]);
    }

    #[test]
    fn test_growth_helpers_report_overflow() {
        assert_eq!(9_i64.next().unwrap(), 10);
        assert_eq!(i32::MAX.next().ok(), None);
        assert!(matches!(i32::MAX.next(), Err(Error::Overflow(_))));
        assert_eq!(11_i8.squared().unwrap(), 121);
        assert!(matches!(12_i8.squared(), Err(Error::Overflow(_))));
        assert_eq!((-5_i8).cubed().unwrap(), -125);
        assert!(matches!(6_i8.cubed(), Err(Error::Overflow(_))));
        assert!(matches!(i64::MIN.squared(), Err(Error::Overflow(_))));
    }

    #[test]
    fn test_primes() {
        let primes: Vec<i32> = (-5..30_i32).filter(|n| n.is_prime()).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(7919_i64.is_prime());
        assert!(!7917_i64.is_prime());
    }

    #[test]
    fn test_division_matches_native_remainder() {
        for a in -9..=9_i64 {
            for b in [-4, -3, -1, 1, 2, 5_i64] {
                let (q, r) = a.divmod(b).unwrap();
                assert_eq!(q, (a as f64 / b as f64).floor() as i64, "{a} div {b}");
                assert_eq!(r, a % b, "{a} mod {b}");
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(7_i32.div(0), Err(Error::DivisionByZero(_))));
        assert!(matches!(7_i32.modulo(0), Err(Error::DivisionByZero(_))));
        assert!(matches!(7.5_f64.divmod(0.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(i32::MIN.div(-1), Err(Error::Overflow(_))));
        assert_eq!(i32::MIN.modulo(-1).unwrap(), 0);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(12.gcd(8).unwrap(), 4);
        assert_eq!(12.lcm(8).unwrap(), 24);
        assert_eq!((-12).gcd(8).unwrap(), 4);
        assert_eq!((-4).lcm(6).unwrap(), 12);
        assert_eq!(0.gcd(0).unwrap(), 0);
        assert_eq!(5.gcd(0).unwrap(), 5);
        assert_eq!(5.lcm(0).unwrap(), 0);
        assert!(matches!(0.lcm(0), Err(Error::DivisionByZero(_))));
        assert!(matches!(i8::MIN.gcd(0), Err(Error::Overflow(_))));
        assert!(matches!(100_i8.lcm(99), Err(Error::Overflow(_))));
    }

    #[test]
    fn test_iteration_helpers() {
        assert_eq!(3.upto(6), vec![3, 4, 5, 6]);
        assert!(6.upto(3).is_empty());

        let mut seen = Vec::new();
        4.times(|i| seen.push(i));
        assert_eq!(seen, vec![0, 1, 2, 3]);

        let mut calls = 0;
        (-2).times(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_float_predicates() {
        assert!(4.0_f64.is_integer());
        assert!(!4.5_f64.is_integer());
        assert!(!f64::INFINITY.is_integer());
        assert!((-3.0_f64).is_odd());
        assert!(!2.5_f64.is_odd());
        assert!(!2.5_f64.is_even());
        assert_eq!(0.0_f64.nonzero(), None);
        assert_eq!(7.5_f64.div(2.0).unwrap(), 3.0);
        assert_eq!((-7.5_f64).divmod(2.0).unwrap(), (-4.0, -1.5));
    }
}

// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

use crate::context::Rounding;
use crate::error::{InvalidExponentError, ParseDecimalError, TryIntoDecimalError};

/// Returns `10^n` as a big integer.
pub(crate) fn pow10(n: u64) -> BigInt {
    Pow::pow(BigInt::from(10), n)
}

/// Converts `coef` from `from_exp` to `to_exp`, preserving the denoted value
/// as closely as the target exponent allows.
///
/// Refining (`to_exp < from_exp`) is exact. Coarsening rounds the coefficient
/// with the given algorithm.
pub(crate) fn scale_coef(coef: &BigInt, from_exp: i64, to_exp: i64, rounding: Rounding) -> BigInt {
    match to_exp.cmp(&from_exp) {
        Ordering::Less => coef * pow10((from_exp - to_exp) as u64),
        Ordering::Equal => coef.clone(),
        Ordering::Greater => rounding.round_quotient(coef, &pow10((to_exp - from_exp) as u64)),
    }
}

/// Like [`scale_coef`], but refuses to lose precision: coarsening succeeds
/// only when the coefficient is an exact multiple of the scale difference.
pub(crate) fn scale_coef_exact(coef: &BigInt, from_exp: i64, to_exp: i64) -> Option<BigInt> {
    match to_exp.cmp(&from_exp) {
        Ordering::Less => Some(coef * pow10((from_exp - to_exp) as u64)),
        Ordering::Equal => Some(coef.clone()),
        Ordering::Greater => {
            let (q, r) = coef.div_rem(&pow10((to_exp - from_exp) as u64));
            if r.is_zero() {
                Some(q)
            } else {
                None
            }
        }
    }
}

/// An exact decimal number.
///
/// A decimal is an immutable pair of an arbitrary-precision signed
/// coefficient and a power-of-ten exponent, denoting
/// `coefficient * 10^exponent`. No canonicalization is performed:
/// `12 * 10^0` and `120 * 10^-1` denote the same number through distinct
/// representations. Comparison (and the equality derived from it) is numeric
/// and therefore representation-independent; [`Decimal::to_parts`] exposes
/// the raw representation.
///
/// Addition, subtraction, and multiplication are always exact and are
/// available through the standard operators:
///
/// ```
/// use decfmt::Decimal;
///
/// let x: Decimal = "0.1".parse()?;
/// let y: Decimal = "0.2".parse()?;
/// assert_eq!((x + y).to_string(), "0.3");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// Division and rescaling can lose precision, so they live on
/// [`Context`](crate::Context), which carries the rounding algorithm.
#[derive(Clone)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i64,
}

impl Decimal {
    /// The largest exponent a decimal may carry.
    ///
    /// The bound leaves enough headroom that combining the exponents of any
    /// two decimals in arithmetic cannot overflow an `i64`.
    pub const EXPONENT_MAX: i64 = 999_999_999;

    /// The smallest exponent a decimal may carry.
    pub const EXPONENT_MIN: i64 = -999_999_999;

    pub(crate) fn exponent_in_range(exponent: i64) -> bool {
        (Decimal::EXPONENT_MIN..=Decimal::EXPONENT_MAX).contains(&exponent)
    }

    /// Constructs a decimal from a coefficient and an exponent.
    ///
    /// Errors if the exponent is outside the supported range.
    pub fn from_parts<C>(coefficient: C, exponent: i64) -> Result<Decimal, InvalidExponentError>
    where
        C: Into<BigInt>,
    {
        if !Decimal::exponent_in_range(exponent) {
            return Err(InvalidExponentError);
        }
        Ok(Decimal {
            coefficient: coefficient.into(),
            exponent,
        })
    }

    pub(crate) fn from_raw_parts(coefficient: BigInt, exponent: i64) -> Decimal {
        Decimal {
            coefficient,
            exponent,
        }
    }

    /// Parses a decimal from a string, returning `None` if the string does
    /// not match the decimal grammar.
    ///
    /// The grammar is `sign? digits? (. digits?)? ((e|E) sign? digits)?`,
    /// with at least one digit before or after the point. The exponent of
    /// the result is the suffix exponent minus the number of fractional
    /// digits, so `"1.25e3"` parses as coefficient `125` with exponent `1`.
    ///
    /// For an error value instead of `None`, parse via [`FromStr`].
    pub fn parse(s: &str) -> Option<Decimal> {
        let bytes = s.as_bytes();
        let mut i = 0;

        let negative = match bytes.first() {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };

        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let int_digits = &s[int_start..i];

        let mut frac_digits = "";
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            frac_digits = &s[frac_start..i];
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let mut suffix_exp = 0i64;
        if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
            i += 1;
            let exp_start = i;
            if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
                i += 1;
            }
            let digit_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == digit_start {
                return None;
            }
            suffix_exp = s[exp_start..i].parse().ok()?;
        }

        if i != bytes.len() {
            return None;
        }

        let exponent = suffix_exp.checked_sub(frac_digits.len() as i64)?;
        if !Decimal::exponent_in_range(exponent) {
            return None;
        }

        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        let mut coefficient = BigInt::parse_bytes(digits.as_bytes(), 10)?;
        if negative {
            coefficient = -coefficient;
        }

        Some(Decimal {
            coefficient,
            exponent,
        })
    }

    /// Returns an equal decimal with the requested exponent.
    ///
    /// This is an exact retagging: it never rounds. Errors if the value is
    /// not an exact integer multiple of `10^exponent`, or if the exponent is
    /// out of range. For a rounding conversion, use
    /// [`Context::rescale`](crate::Context::rescale).
    pub fn with_exponent(&self, exponent: i64) -> Result<Decimal, TryIntoDecimalError> {
        if !Decimal::exponent_in_range(exponent) {
            return Err(TryIntoDecimalError);
        }
        match scale_coef_exact(&self.coefficient, self.exponent, exponent) {
            Some(coefficient) => Ok(Decimal {
                coefficient,
                exponent,
            }),
            None => Err(TryIntoDecimalError),
        }
    }

    /// Returns the coefficient of the decimal.
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Returns the exponent of the decimal.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns the raw representation of the decimal.
    pub fn to_parts(&self) -> (BigInt, i64) {
        (self.coefficient.clone(), self.exponent)
    }

    /// Reports whether the decimal is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Reports whether the decimal is less than zero.
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Reports whether the decimal denotes an integer.
    ///
    /// A decimal with a negative exponent still denotes an integer if its
    /// fractional digits are all zero, so `1200 * 10^-2` is an integer while
    /// `1230 * 10^-2` is not.
    pub fn is_integer(&self) -> bool {
        scale_coef_exact(&self.coefficient, self.exponent, 0).is_some()
    }

    /// Converts the decimal to an `f64`.
    ///
    /// The conversion is lossy for values that exceed `f64`'s precision or
    /// range.
    pub fn to_f64(&self) -> f64 {
        let coef = self.coefficient.to_f64().unwrap_or(f64::NAN);
        coef * 10f64.powi(self.exponent as i32)
    }

    /// Compares two decimals numerically.
    ///
    /// Also available through the [`Ord`] and [`PartialOrd`] impls. Distinct
    /// representations of the same number compare equal.
    pub fn compare(&self, other: &Decimal) -> Ordering {
        let (a, b, _) = align(self, other);
        a.cmp(&b)
    }
}

/// Aligns both coefficients to the smaller of the two exponents.
///
/// The smaller exponent is the target precisely because reaching it only
/// ever refines, so the alignment is always exact.
fn align(x: &Decimal, y: &Decimal) -> (BigInt, BigInt, i64) {
    let exp = x.exponent.min(y.exponent);
    let a = &x.coefficient * pow10((x.exponent - exp) as u64);
    let b = &y.coefficient * pow10((y.exponent - exp) as u64);
    (a, b, exp)
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficient.is_zero() {
            return f.write_str("0");
        }
        if self.exponent >= 0 {
            let n = &self.coefficient * pow10(self.exponent as u64);
            return write!(f, "{}", n);
        }

        if self.coefficient.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.coefficient.magnitude().to_string();
        let scale = -self.exponent as usize;
        if digits.len() > scale {
            let split = digits.len() - scale;
            write!(f, "{}.{}", &digits[..split], &digits[split..])
        } else {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The representation is observable, so show it rather than the
        // rendered number.
        write!(f, "Decimal({}, {})", self.coefficient, self.exponent)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        Decimal::parse(s).ok_or(ParseDecimalError)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(n: $t) -> Decimal {
                Decimal {
                    coefficient: BigInt::from(n),
                    exponent: 0,
                }
            }
        }
    )*};
}

from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl From<BigInt> for Decimal {
    fn from(coefficient: BigInt) -> Decimal {
        Decimal {
            coefficient,
            exponent: 0,
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        self.compare(other)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            coefficient: -self.coefficient,
            exponent: self.exponent,
        }
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            coefficient: -&self.coefficient,
            exponent: self.exponent,
        }
    }
}

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn add(self, other: &'b Decimal) -> Decimal {
        let (a, b, exponent) = align(self, other);
        Decimal {
            coefficient: a + b,
            exponent,
        }
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn sub(self, other: &'b Decimal) -> Decimal {
        let (a, b, exponent) = align(self, other);
        Decimal {
            coefficient: a - b,
            exponent,
        }
    }
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn mul(self, other: &'b Decimal) -> Decimal {
        Decimal {
            coefficient: &self.coefficient * &other.coefficient,
            exponent: self.exponent + other.exponent,
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                $imp::$method(&self, &other)
            }
        }

        impl<'a> $imp<&'a Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: &'a Decimal) -> Decimal {
                $imp::$method(&self, other)
            }
        }

        impl<'a> $imp<Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                $imp::$method(self, &other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl AddAssign<Decimal> for Decimal {
    fn add_assign(&mut self, other: Decimal) {
        *self = &*self + &other;
    }
}

impl SubAssign<Decimal> for Decimal {
    fn sub_assign(&mut self, other: Decimal) {
        *self = &*self - &other;
    }
}

impl MulAssign<Decimal> for Decimal {
    fn mul_assign(&mut self, other: Decimal) {
        *self = &*self * &other;
    }
}

impl Sum for Decimal {
    fn sum<I>(iter: I) -> Decimal
    where
        I: Iterator<Item = Decimal>,
    {
        iter.fold(Decimal::from(0), |sum, d| sum + d)
    }
}

impl Product for Decimal {
    fn product<I>(iter: I) -> Decimal
    where
        I: Iterator<Item = Decimal>,
    {
        iter.fold(Decimal::from(1), |product, d| product * d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

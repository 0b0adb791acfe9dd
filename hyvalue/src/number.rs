//! Arbitrary-precision numbers.
//!
//! Finite numbers are stored as exact decimals, so `0.1` is exactly one tenth and
//! never picks up binary floating-point artifacts.
use std::{fmt::Write, str::FromStr};

use bigdecimal::{BigDecimal, FromPrimitive};
use num_bigint::{BigInt, Sign};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Decimal exponents in `[MIN_PLAIN_EXPONENT, MAX_PLAIN_EXPONENT)` are printed
/// positionally, everything else in scientific notation.
const MIN_PLAIN_EXPONENT: i64 = -4;
const MAX_PLAIN_EXPONENT: i64 = 6;

/// A number value.
///
/// Variants are declared in ascending order so the derived ordering is the numeric
/// one: `-inf < finite < +inf`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    NegInfinity,
    Finite(BigDecimal),
    PosInfinity,
}

impl Number {
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Number::Finite(_))
    }

    /// The exact decimal payload, [`None`] for infinities.
    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Number::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Render the shortest text that reads back as the same number, in general
    /// notation.
    ///
    /// Trailing zeros are never printed. Numbers whose leading digit sits at a decimal
    /// exponent below `-4` or at `6` and above switch to scientific notation with at
    /// least two exponent digits.
    ///
    /// ```rust
    /// # use hyvalue::number::Number;
    /// let n: Number = "3.0".parse().unwrap();
    /// assert_eq!(n.to_general_string(), "3");
    /// let n: Number = "0.1".parse().unwrap();
    /// assert_eq!(n.to_general_string(), "0.1");
    /// assert_eq!(Number::from(1_000_000).to_general_string(), "1e+06");
    /// ```
    pub fn to_general_string(&self) -> String {
        match self {
            Number::NegInfinity => "-Inf".to_string(),
            Number::PosInfinity => "+Inf".to_string(),
            Number::Finite(value) => general_decimal(value),
        }
    }
}

fn general_decimal(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.normalized().into_bigint_and_exponent();
    if mantissa.sign() == Sign::NoSign {
        return "0".to_string();
    }

    let digits = mantissa.magnitude().to_string();
    // value = 0.<digits> * 10^(len - scale), so the leading digit sits at len - 1 - scale
    let exponent = digits.len() as i64 - 1 - scale;

    let mut out = String::with_capacity(digits.len() + 8);
    if mantissa.sign() == Sign::Minus {
        out.push('-');
    }

    if !(MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", sign, exponent.unsigned_abs());
    } else if exponent < 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-exponent - 1) as usize));
        out.push_str(&digits);
    } else {
        let integral_len = exponent as usize + 1;
        if digits.len() <= integral_len {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', integral_len - digits.len()));
        } else {
            out.push_str(&digits[..integral_len]);
            out.push('.');
            out.push_str(&digits[integral_len..]);
        }
    }

    out
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_general_string())
    }
}

macro_rules! number_from_int {
    ($($typ:ty),*) => {
        $(
            impl From<$typ> for Number {
                fn from(value: $typ) -> Self {
                    Number::Finite(BigDecimal::from(value))
                }
            }
        )*
    };
}

number_from_int! { i8, i16, i32, i64, u8, u16, u32, u64 }

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Finite(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::Finite(value)
    }
}

impl TryFrom<f64> for Number {
    type Error = ValueError;

    /// Convert a Rust `f64`, keeping the shortest decimal that reads back as the same
    /// float (so `0.1_f64` becomes exactly `0.1`).
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(ValueError::NotANumber);
        }
        if value.is_infinite() {
            return Ok(if value > 0.0 {
                Number::PosInfinity
            } else {
                Number::NegInfinity
            });
        }

        let shortest = format!("{value:e}");
        match BigDecimal::from_str(&shortest) {
            Ok(decimal) => Ok(Number::Finite(decimal)),
            // The shortest representation always parses; keep the exact binary value otherwise.
            Err(_) => BigDecimal::from_f64(value)
                .map(Number::Finite)
                .ok_or(ValueError::NotANumber),
        }
    }
}

impl TryFrom<f32> for Number {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(ValueError::NotANumber);
        }
        // Go through the f32 shortest form, widening first would expose binary noise.
        let shortest: f64 = format!("{value:e}")
            .parse()
            .map_err(|_| ValueError::NotANumber)?;
        Number::try_from(shortest)
    }
}

impl FromStr for Number {
    type Err = ValueError;

    /// Parse decimal or scientific text exactly. `inf`, `+inf`, `-inf` and
    /// `infinity` (any case) produce the infinite numbers.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let (negative, magnitude) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if magnitude.eq_ignore_ascii_case("inf") || magnitude.eq_ignore_ascii_case("infinity") {
            return Ok(if negative {
                Number::NegInfinity
            } else {
                Number::PosInfinity
            });
        }
        if magnitude.eq_ignore_ascii_case("nan") {
            return Err(ValueError::NotANumber);
        }

        BigDecimal::from_str(trimmed)
            .map(Number::Finite)
            .map_err(|e| ValueError::InvalidNumber {
                text: text.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general(text: &str) -> String {
        text.parse::<Number>().unwrap().to_general_string()
    }

    #[test]
    fn general_notation_strips_trailing_zeros() {
        assert_eq!(general("3.0"), "3");
        assert_eq!(general("2.50"), "2.5");
        assert_eq!(general("100"), "100");
        assert_eq!(general("0"), "0");
        assert_eq!(general("-0.000"), "0");
        assert_eq!(general("123.456"), "123.456");
        assert_eq!(general("-42"), "-42");
    }

    #[test]
    fn general_notation_switches_to_exponent_form() {
        assert_eq!(general("999999"), "999999");
        assert_eq!(general("1000000"), "1e+06");
        assert_eq!(general("1234567"), "1.234567e+06");
        assert_eq!(general("0.0001"), "0.0001");
        assert_eq!(general("0.00001"), "1e-05");
        assert_eq!(general("-0.000015"), "-1.5e-05");
        assert_eq!(general("1e100"), "1e+100");
    }

    #[test]
    fn decimal_text_is_exact() {
        assert_eq!(general("0.1"), "0.1");
        assert_eq!(
            general("3.14159265358979323846264338327950288"),
            "3.14159265358979323846264338327950288"
        );
        assert_eq!(Number::try_from(0.1_f64).unwrap().to_general_string(), "0.1");
        assert_eq!(Number::try_from(0.1_f32).unwrap().to_general_string(), "0.1");
    }

    #[test]
    fn infinities_and_nan() {
        assert_eq!(general("inf"), "+Inf");
        assert_eq!(general("-Infinity"), "-Inf");
        assert_eq!(Number::try_from(f64::NEG_INFINITY), Ok(Number::NegInfinity));
        assert_eq!(Number::try_from(f64::NAN), Err(ValueError::NotANumber));
        assert!("nan".parse::<Number>().unwrap_err().is_not_a_number());
        assert!("twelve".parse::<Number>().unwrap_err().is_invalid_number());
    }

    #[test]
    fn ordering_is_numeric() {
        let one: Number = "1.0".parse().unwrap();
        assert_eq!(one, Number::from(1));
        assert!(Number::NegInfinity < Number::from(-1_000_000));
        assert!(Number::from(5) < "5.5".parse().unwrap());
        assert!(Number::PosInfinity > Number::from(u64::MAX));
    }
}

//! Numeric values produced by the expression evaluator.
//!
//! Integers are arbitrary precision and stay exact until an operation needs a
//! real (`/`, a negative exponent, a real operand).

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::errors::CalculationError;

/// Largest integer power result, in bits, computed exactly.
const MAX_POW_BITS: u64 = 1 << 20;

/// Reals whose decimal exponent falls outside `[-4, 16)` render in exponent form.
const MIN_POSITIONAL_EXP: i32 = -4;
const MAX_POSITIONAL_EXP: i32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Real(f64),
}

impl Number {
    pub fn int(value: i64) -> Self {
        Number::Int(BigInt::from(value))
    }

    /// Nearest real; integers beyond `f64` range saturate to infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(v) => v.to_f64().unwrap_or(if v.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Real(v) => *v,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(v) => v.is_zero(),
            Number::Real(v) => *v == 0.0,
        }
    }

    pub fn negate(self) -> Number {
        match self {
            Number::Int(v) => Number::Int(-v),
            Number::Real(v) => Number::Real(-v),
        }
    }

    pub fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            (a, b) => Number::Real(a.as_f64() + b.as_f64()),
        }
    }

    pub fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a - b),
            (a, b) => Number::Real(a.as_f64() - b.as_f64()),
        }
    }

    pub fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            (a, b) => Number::Real(a.as_f64() * b.as_f64()),
        }
    }

    /// True division: the result is always real.
    pub fn div(self, rhs: Number) -> Result<Number, CalculationError> {
        if rhs.is_zero() {
            return Err(CalculationError::DivisionByZero);
        }
        Ok(Number::Real(self.as_f64() / rhs.as_f64()))
    }

    /// Division rounded toward negative infinity.
    pub fn floor_div(self, rhs: Number) -> Result<Number, CalculationError> {
        if rhs.is_zero() {
            return Err(CalculationError::DivisionByZero);
        }
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                // BigInt division truncates toward zero.
                let q = &a / &b;
                let r = &a % &b;
                let adjust = !r.is_zero() && (r.is_negative() != b.is_negative());
                Ok(Number::Int(if adjust { q - 1 } else { q }))
            }
            (a, b) => Ok(Number::Real((a.as_f64() / b.as_f64()).floor())),
        }
    }

    pub fn pow(self, rhs: Number) -> Result<Number, CalculationError> {
        if self.is_zero() && rhs.as_f64() < 0.0 {
            return Err(CalculationError::DivisionByZero);
        }
        if let (Number::Int(base), Number::Int(exp)) = (&self, &rhs) {
            if !exp.is_negative() {
                if let Some(v) = int_pow(base, exp) {
                    return Ok(Number::Int(v));
                }
            }
        }
        let (base, exp) = (self.as_f64(), rhs.as_f64());
        let value = base.powf(exp);
        let overflowed = value.is_infinite() && base.is_finite() && exp.is_finite();
        // A negative base with a fractional exponent has no real result.
        if overflowed || (value.is_nan() && !base.is_nan() && !exp.is_nan()) {
            return Err(CalculationError::MalformedExpression);
        }
        Ok(Number::Real(value))
    }
}

/// Exact `base ** exp` for a non-negative exponent, or `None` when the result
/// would exceed `MAX_POW_BITS`.
fn int_pow(base: &BigInt, exp: &BigInt) -> Option<BigInt> {
    if exp.is_zero() {
        return Some(BigInt::one());
    }
    if base.is_zero() || base.is_one() {
        return Some(base.clone());
    }
    if *base == -BigInt::one() {
        let odd = (exp % 2u32).is_one();
        return Some(if odd { base.clone() } else { BigInt::one() });
    }
    let exp = exp.to_u32()?;
    if base.bits().saturating_mul(u64::from(exp)) > MAX_POW_BITS {
        return None;
    }
    Some(base.pow(exp))
}

/// Formats a finite real with shortest round-trip digits, using exponent form
/// `1e+20` / `1.5e-05` outside the positional range.
fn format_real(v: f64) -> String {
    let scientific = format!("{:e}", v);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if v != 0.0 && !(MIN_POSITIONAL_EXP..MAX_POSITIONAL_EXP).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Real(v) if v.is_nan() => write!(f, "nan"),
            Number::Real(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "inf" } else { "-inf" })
            }
            Number::Real(v) => write!(f, "{}", format_real(*v)),
        }
    }
}

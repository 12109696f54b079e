//! Checked integer operations.
//!
//! Each function takes operands that the context has already validated and
//! returns either the exact result or the reason it could not be produced.
//! Nothing here wraps: every overflow is caught by a `checked_*` primitive
//! before a value escapes.

use crate::models::{EvalError, ValidationError};

/// `a + b`.
pub fn add(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_add(b).ok_or(EvalError::Overflow)
}

/// `a - b`.
pub fn sub(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_sub(b).ok_or(EvalError::Overflow)
}

/// `a * b`.
pub fn mul(a: i64, b: i64) -> Result<i64, EvalError> {
    a.checked_mul(b).ok_or(EvalError::Overflow)
}

/// `a / b`, truncating toward zero.
///
/// `i64::MIN / -1` is the only in-domain overflow.
pub fn div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(EvalError::DivisionByZero);
    }
    a.checked_div(b).ok_or(EvalError::Overflow)
}

/// `base ^ exp` for `exp >= 0`; `x ^ 0 == 1` for every `x`, including 0.
pub fn pow(base: i64, exp: i64) -> Result<i64, EvalError> {
    if exp < 0 {
        return Err(ValidationError::NegativeExponent.into());
    }

    // Bases whose powers stay bounded for any exponent, however large.
    match base {
        0 => return Ok(if exp == 0 { 1 } else { 0 }),
        1 => return Ok(1),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ => {}
    }

    // |base| >= 2 overflows long before the exponent leaves u32 range.
    let exp = u32::try_from(exp).map_err(|_| EvalError::Overflow)?;
    base.checked_pow(exp).ok_or(EvalError::Overflow)
}

/// `n!`, with `0! == 1! == 1`.
///
/// Overflows for `n >= 21`; the loop bails out on the first overflowing
/// step, so huge inputs cost at most ~20 multiplications.
pub fn fact(n: u64) -> Result<u64, EvalError> {
    (2..=n)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(EvalError::Overflow)
}

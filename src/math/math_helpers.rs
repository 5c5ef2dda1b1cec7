use crate::error::MathError;
use alloy_primitives::U256;

/// 2^128 as `f64`; the first value that does not fit in a `u128`.
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

#[inline]
pub fn ensure_finite(value: f64) -> Result<f64, MathError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::NonFinite)
    }
}

/// Truncates a non‑negative finite amount toward zero into a `u128`.
///
/// NaN and infinities give `NonFinite`, negative values give `Negative`,
/// values of 2^128 or more give `Overflow`. Nothing is wrapped or saturated.
pub fn floor_to_u128(value: f64) -> Result<u128, MathError> {
    let value = ensure_finite(value)?;

    if value < 0.0 {
        return Err(MathError::Negative);
    }
    if value >= TWO_POW_128 {
        return Err(MathError::Overflow);
    }

    Ok(value.trunc() as u128)
}

const MANTISSA_BITS: usize = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: usize = 1023;

/// Truncates a non‑negative finite amount toward zero into a `U256`
/// token amount. Rejects like [`floor_to_u128`], but only overflows at 2^256.
pub fn floor_to_u256(value: f64) -> Result<U256, MathError> {
    let value = ensure_finite(value)?;

    if value < 0.0 {
        return Err(MathError::Negative);
    }
    if value < TWO_POW_128 {
        return Ok(U256::from(value.trunc() as u128));
    }

    // past 2^128 every f64 is an integer: mantissa * 2^shift
    let bits = value.to_bits();
    let exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as usize;
    let mantissa = (bits & MANTISSA_MASK) | (1 << MANTISSA_BITS);
    let shift = exponent - EXPONENT_BIAS - MANTISSA_BITS;

    if shift + MANTISSA_BITS >= 256 {
        return Err(MathError::Overflow);
    }

    Ok(U256::from(mantissa) << shift)
}

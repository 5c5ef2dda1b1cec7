use crate::TICK_BASE;
use crate::error::StateError;

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

/// Returns the sqrt price `1.0001^(tick / 2)` at a given tick.
///
/// Total over every `i32`. Ticks far outside [`MIN_TICK`, `MAX_TICK`] overflow
/// to infinity or underflow to zero; use [`checked_sqrt_price_at_tick`] when
/// the tick comes from untrusted input.
#[inline]
pub fn sqrt_price_at_tick(tick: i32) -> f64 {
    TICK_BASE.powf(f64::from(tick) / 2.0)
}

/// Same as [`sqrt_price_at_tick`], but rejects ticks outside the Uniswap V3
/// tick domain with `StateError::TickOutOfBounds`.
pub fn checked_sqrt_price_at_tick(tick: i32) -> Result<f64, StateError> {
    check_tick(tick)?;
    Ok(sqrt_price_at_tick(tick))
}

#[inline]
pub fn check_tick(tick: i32) -> Result<(), StateError> {
    if (MIN_TICK..=MAX_TICK).contains(&tick) {
        Ok(())
    } else {
        Err(StateError::TickOutOfBounds(tick))
    }
}

/// Returns the sqrt prices at both bounds, smaller first, whatever the
/// order the ticks were given in.
#[inline]
pub fn ordered_sqrt_prices(tick_a: i32, tick_b: i32) -> (f64, f64) {
    let sqrt_a = sqrt_price_at_tick(tick_a);
    let sqrt_b = sqrt_price_at_tick(tick_b);

    if sqrt_a <= sqrt_b {
        (sqrt_a, sqrt_b)
    } else {
        (sqrt_b, sqrt_a)
    }
}

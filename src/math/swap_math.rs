use crate::error::MathError;
use crate::math::tick_math::{ordered_sqrt_prices, sqrt_price_at_tick};
use crate::position::TokenAmounts;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// token0 in, token1 out. The price moves down.
    ZeroForOne,
    /// token1 in, token0 out. The price moves up.
    OneForZero,
}

/// Outcome of an analytically simulated rebalancing swap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwapSimulation {
    /// `None` when the input was not single‑sided and nothing was swapped.
    pub direction: Option<SwapDirection>,
    /// Amount of the input token sold.
    pub amount_in: f64,
    /// Amount of the output token received, after the slippage penalty.
    pub amount_out: f64,
    /// Token amounts held once the swap has settled.
    pub post_swap: TokenAmounts,
}

impl SwapSimulation {
    fn unchanged(amounts: TokenAmounts) -> Self {
        Self {
            direction: None,
            amount_in: 0.0,
            amount_out: 0.0,
            post_swap: amounts,
        }
    }
}

/// Returns the token amounts held by one unit of liquidity in
/// `[tick_lower, tick_upper]` at `current_tick`, i.e. `(alpha, beta)`.
///
/// The current sqrt price is clamped into the range, so a tick below the
/// range gives `beta = 0` and a tick above it gives `alpha = 0`.
pub fn unit_liquidity_amounts(current_tick: i32, tick_lower: i32, tick_upper: i32) -> TokenAmounts {
    let (sqrt_pa, sqrt_pb) = ordered_sqrt_prices(tick_lower, tick_upper);
    let sqrt_p = sqrt_price_at_tick(current_tick).clamp(sqrt_pa, sqrt_pb);

    TokenAmounts::new(1.0 / sqrt_p - 1.0 / sqrt_pb, sqrt_p - sqrt_pa)
}

/// Sizes the swap that turns a single‑sided `amounts` into a pair
/// proportional to a position in `[tick_lower, tick_upper]` at `current_tick`.
///
/// The swap executes at the current price degraded by `slippage` against the
/// swapper: `(1 - slippage) * p` when selling token0, `(1 + slippage) * p`
/// when selling token1. This is a flat one‑shot penalty, not a walk through
/// pool liquidity.
///
/// Input holding both tokens, or neither, is returned unchanged with a zero
/// swap amount.
pub fn simulate_swap(
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    amounts: TokenAmounts,
    slippage: f64,
) -> Result<SwapSimulation, MathError> {
    let unit = unit_liquidity_amounts(current_tick, tick_lower, tick_upper);
    let (alpha, beta) = (unit.amount0, unit.amount1);

    let sqrt_p = sqrt_price_at_tick(current_tick);
    let price = sqrt_p * sqrt_p;

    match amounts.swap_direction() {
        Some(SwapDirection::ZeroForOne) => {
            let amount0 = amounts.amount0;
            let effective_price = (1.0 - slippage) * price;

            // (amount0 - x, x * p') proportional to (alpha, beta)
            let denominator = beta + alpha * effective_price;
            if denominator == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            // alpha == 0 above the range: everything is sold
            let amount_in = if alpha == 0.0 {
                amount0
            } else {
                ((beta * amount0) / denominator).clamp(0.0, amount0)
            };
            let amount_out = amount_in * effective_price;

            Ok(SwapSimulation {
                direction: Some(SwapDirection::ZeroForOne),
                amount_in,
                amount_out,
                post_swap: TokenAmounts::new(remaining(amount0, amount_in), amount_out),
            })
        }
        Some(SwapDirection::OneForZero) => {
            let amount1 = amounts.amount1;
            let effective_price = (1.0 + slippage) * price;

            // (y / p', amount1 - y) proportional to (alpha, beta)
            let denominator = beta / effective_price + alpha;
            if denominator == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            // beta == 0 below the range: everything is sold
            let amount_in = if beta == 0.0 {
                amount1
            } else {
                ((alpha * amount1) / denominator).clamp(0.0, amount1)
            };
            let amount_out = amount_in / effective_price;

            Ok(SwapSimulation {
                direction: Some(SwapDirection::OneForZero),
                amount_in,
                amount_out,
                post_swap: TokenAmounts::new(amount_out, remaining(amount1, amount_in)),
            })
        }
        None => Ok(SwapSimulation::unchanged(amounts)),
    }
}

#[inline]
fn remaining(amount: f64, sold: f64) -> f64 {
    if sold >= amount { 0.0 } else { amount - sold }
}

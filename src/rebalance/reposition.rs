use crate::error::{Error, MathError, StateError};
use crate::math::liquidity_math::liquidity_from_amounts;
use crate::math::math_helpers::{ensure_finite, floor_to_u128, floor_to_u256};
use crate::math::swap_math::{SwapDirection, simulate_swap};
use crate::math::tick_math::check_tick;
use crate::position::{Position, PositionStatus, TickRange, TokenAmounts};
use crate::rebalance::config::{RebalanceConfig, TokenPair};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A position to move from its old range into a new one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalanceRequest {
    pub current_tick: i32,
    pub old_range_low: i32,
    pub old_range_high: i32,
    pub new_range_low: i32,
    pub new_range_high: i32,
    pub liquidity: u128,
}

impl RebalanceRequest {
    pub fn old_range(&self) -> Result<TickRange, StateError> {
        TickRange::new(self.old_range_low, self.old_range_high)
    }

    pub fn new_range(&self) -> Result<TickRange, StateError> {
        TickRange::new(self.new_range_low, self.new_range_high)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RebalanceResult {
    /// Where the current tick sat relative to the old range.
    pub old_status: PositionStatus,
    pub direction: SwapDirection,
    pub token_in: Address,
    pub token_out: Address,
    /// Amount of `token_in` to sell, truncated toward zero.
    pub swap_amount_in: U256,
    /// Amount of `token_out` the simulated swap returns after slippage,
    /// truncated toward zero. Usable as a minimum‑out bound.
    pub expected_amount_out: U256,
    /// Token amounts held after the swap, ready to deposit.
    pub post_swap: TokenAmounts,
    /// Liquidity of the new position once `post_swap` is deposited.
    pub new_liquidity: f64,
}

impl RebalanceResult {
    /// `new_liquidity` truncated toward zero into the on‑chain liquidity type.
    pub fn new_liquidity_floor(&self) -> Result<u128, MathError> {
        floor_to_u128(self.new_liquidity)
    }
}

/// Bundles the token roles and tunables so repeated requests against the
/// same pool only carry ticks and liquidity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rebalancer {
    tokens: TokenPair,
    config: RebalanceConfig,
}

impl Rebalancer {
    pub fn new(tokens: TokenPair, config: RebalanceConfig) -> Self {
        Self { tokens, config }
    }

    #[inline]
    pub fn tokens(&self) -> &TokenPair {
        &self.tokens
    }

    #[inline]
    pub fn config(&self) -> &RebalanceConfig {
        &self.config
    }

    pub fn reposition_liquidity(&self, request: &RebalanceRequest) -> Result<RebalanceResult, Error> {
        reposition_liquidity(request, &self.tokens, &self.config)
    }
}

/// Computes how to move an out‑of‑range position into a new range.
///
/// 1. Values the position in its old range at the current tick.
/// 2. Sizes the single‑sided swap that matches the new range's composition.
/// 3. Rebuilds the liquidity the swapped amounts buy in the new range.
///
/// Fails with `StateError::PositionInRange` if the old range still holds
/// both tokens and with `StateError::EmptyPosition` if it holds neither.
/// Invalid ticks, ranges or slippage are rejected before any math runs.
#[instrument(
    level = "debug",
    skip(tokens, config),
    fields(
        tick = request.current_tick,
        old_range = ?(request.old_range_low, request.old_range_high),
        new_range = ?(request.new_range_low, request.new_range_high),
        slippage = config.slippage,
    )
)]
pub fn reposition_liquidity(
    request: &RebalanceRequest,
    tokens: &TokenPair,
    config: &RebalanceConfig,
) -> Result<RebalanceResult, Error> {
    config.validate()?;
    check_tick(request.current_tick)?;
    let old_range = request.old_range()?;
    let new_range = request.new_range()?;
    let tick = request.current_tick;

    let position = Position::new(old_range, request.liquidity as f64);
    let old_status = position.status(tick);
    let exit = position.token_amounts(tick);
    debug!(
        ?old_status,
        amount0 = exit.amount0,
        amount1 = exit.amount1,
        "exit valuation"
    );

    let Some(direction) = exit.swap_direction() else {
        let err = if exit.amount0 == 0.0 && exit.amount1 == 0.0 {
            StateError::EmptyPosition
        } else {
            StateError::PositionInRange {
                amount0: exit.amount0,
                amount1: exit.amount1,
            }
        };
        warn!(?old_status, %err, "position is not single-sided, refusing to rebalance");
        return Err(err.into());
    };

    let swap = simulate_swap(
        tick,
        new_range.lower(),
        new_range.upper(),
        exit,
        config.slippage,
    )?;
    let post_swap = TokenAmounts::new(
        ensure_finite(swap.post_swap.amount0)?,
        ensure_finite(swap.post_swap.amount1)?,
    );
    debug!(
        ?direction,
        amount_in = swap.amount_in,
        amount_out = swap.amount_out,
        post_amount0 = post_swap.amount0,
        post_amount1 = post_swap.amount1,
        "swap simulated"
    );

    let new_liquidity = ensure_finite(liquidity_from_amounts(
        tick,
        new_range.lower(),
        new_range.upper(),
        post_swap.amount0,
        post_swap.amount1,
    ))?;
    debug!(new_liquidity, "liquidity reconstructed");

    let (token_in, token_out) = tokens.for_direction(direction);

    Ok(RebalanceResult {
        old_status,
        direction,
        token_in,
        token_out,
        swap_amount_in: floor_to_u256(swap.amount_in)?,
        expected_amount_out: floor_to_u256(swap.amount_out)?,
        post_swap,
        new_liquidity,
    })
}

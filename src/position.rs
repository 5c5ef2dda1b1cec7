use crate::error::StateError;
use crate::math::liquidity_math::exit_amounts;
use crate::math::swap_math::SwapDirection;
use crate::math::tick_math::{check_tick, ordered_sqrt_prices};
use serde::{Deserialize, Serialize};

/// A pair of token amounts, each in the token's smallest unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub amount0: f64,
    pub amount1: f64,
}

impl TokenAmounts {
    #[inline]
    pub const fn new(amount0: f64, amount1: f64) -> Self {
        Self { amount0, amount1 }
    }

    /// Returns the direction a rebalancing swap must take when exactly one
    /// side is positive and the other is exactly zero, `None` otherwise.
    pub fn swap_direction(&self) -> Option<SwapDirection> {
        if self.amount0 > 0.0 && self.amount1 == 0.0 {
            Some(SwapDirection::ZeroForOne)
        } else if self.amount1 > 0.0 && self.amount0 == 0.0 {
            Some(SwapDirection::OneForZero)
        } else {
            None
        }
    }
}

/// A validated tick range with `lower < upper`, both inside the tick domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TickRange {
    lower: i32,
    upper: i32,
}

impl TickRange {
    /// Builds a range, rejecting bounds outside [`MIN_TICK`, `MAX_TICK`] and
    /// empty ranges (`lower >= upper`), whose sqrt price span is zero.
    ///
    /// [`MIN_TICK`]: crate::math::tick_math::MIN_TICK
    /// [`MAX_TICK`]: crate::math::tick_math::MAX_TICK
    pub fn new(lower: i32, upper: i32) -> Result<Self, StateError> {
        check_tick(lower)?;
        check_tick(upper)?;

        if lower >= upper {
            return Err(StateError::InvalidRange { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    #[inline]
    pub fn lower(&self) -> i32 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> i32 {
        self.upper
    }

    #[inline]
    pub fn sqrt_prices(&self) -> (f64, f64) {
        ordered_sqrt_prices(self.lower, self.upper)
    }

    pub fn status(&self, current_tick: i32) -> PositionStatus {
        if current_tick < self.lower {
            PositionStatus::BelowRange
        } else if current_tick > self.upper {
            PositionStatus::AboveRange
        } else {
            PositionStatus::InRange
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    /// Current tick below the range: the position holds only token0.
    BelowRange,
    /// Current tick within the range, bounds included.
    InRange,
    /// Current tick above the range: the position holds only token1.
    AboveRange,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub range: TickRange,
    pub liquidity: f64,
}

impl Position {
    pub fn new(range: TickRange, liquidity: f64) -> Self {
        Self { range, liquidity }
    }

    #[inline]
    pub fn status(&self, current_tick: i32) -> PositionStatus {
        self.range.status(current_tick)
    }

    /// Token amounts this position would yield if withdrawn at `current_tick`.
    pub fn token_amounts(&self, current_tick: i32) -> TokenAmounts {
        exit_amounts(
            current_tick,
            self.range.lower,
            self.range.upper,
            self.liquidity,
        )
    }
}

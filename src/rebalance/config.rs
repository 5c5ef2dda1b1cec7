use crate::DEFAULT_SLIPPAGE;
use crate::error::StateError;
use crate::math::swap_math::SwapDirection;
use alloy_primitives::{Address, U160};
use serde::{Deserialize, Serialize};

/// Tunables of the rebalancing pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebalanceConfig {
    /// Fractional price penalty applied to the simulated swap, in `[0, 1)`.
    pub slippage: f64,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            slippage: DEFAULT_SLIPPAGE,
        }
    }
}

impl RebalanceConfig {
    pub fn new(slippage: f64) -> Result<Self, StateError> {
        let config = Self { slippage };
        config.validate()?;
        Ok(config)
    }

    /// Checks a config built by hand or deserialized from an external source.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.slippage.is_finite() && (0.0..1.0).contains(&self.slippage) {
            Ok(())
        } else {
            Err(StateError::InvalidSlippage(self.slippage))
        }
    }
}

/// Concrete token identifiers behind the pool's two roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub token0: Address,
    pub token1: Address,
}

impl TokenPair {
    #[inline]
    pub const fn new(token0: Address, token1: Address) -> Self {
        Self { token0, token1 }
    }

    /// Builds the pair in canonical Uniswap order: the numerically smaller
    /// address becomes token0.
    pub fn sorted(token_a: Address, token_b: Address) -> Self {
        let a: U160 = token_a.into();
        let b: U160 = token_b.into();

        if a < b {
            Self::new(token_a, token_b)
        } else {
            Self::new(token_b, token_a)
        }
    }

    /// Returns `(token_in, token_out)` for a swap in `direction`.
    #[inline]
    pub fn for_direction(&self, direction: SwapDirection) -> (Address, Address) {
        match direction {
            SwapDirection::ZeroForOne => (self.token0, self.token1),
            SwapDirection::OneForZero => (self.token1, self.token0),
        }
    }
}

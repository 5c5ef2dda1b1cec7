//! Concentrated‑liquidity range rebalancing math in pure Rust.
//!
//! Given a Uniswap V3‑style position that has drifted out of its tick range,
//! this crate computes how to move it into a new range:
//! - `math::tick_math` converts ticks to sqrt prices.
//! - `math::liquidity_math` values a position (exit amounts) and rebuilds
//!   liquidity from token amounts.
//! - `math::swap_math` sizes the single‑sided swap that makes the withdrawn
//!   amounts proportional to the new range, under a flat slippage penalty.
//! - `rebalance` chains the three stages behind one entry point.
//!
//! Everything is synchronous and side‑effect free. No I/O, no shared state.
//!
//! # Examples
//!
//! ## Pure math
//! ```no_run
//! use clmm_rebalance_math::math::{liquidity_math, tick_math};
//!
//! let sqrt_price = tick_math::sqrt_price_at_tick(0);
//! assert_eq!(sqrt_price, 1.0);
//!
//! let amounts = liquidity_math::exit_amounts(-100, -50, 50, 1_000_000.0);
//! assert!(amounts.amount0 > 0.0 && amounts.amount1 == 0.0);
//! ```
//!
//! ## Repositioning a position
//! ```no_run
//! use clmm_rebalance_math::{
//!     Address, RebalanceConfig, RebalanceRequest, Rebalancer, TokenPair,
//! };
//!
//! # let whype = Address::repeat_byte(0x55);
//! # let usdt = Address::repeat_byte(0xb8);
//! let rebalancer = Rebalancer::new(TokenPair::new(whype, usdt), RebalanceConfig::default());
//!
//! let request = RebalanceRequest {
//!     current_tick: -237582,
//!     old_range_low: -237900,
//!     old_range_high: -237600,
//!     new_range_low: -237700,
//!     new_range_high: -237400,
//!     liquidity: 21_319_375_676_934_521,
//! };
//!
//! let result = rebalancer.reposition_liquidity(&request).unwrap();
//! println!(
//!     "swap {} of {} for {}, new liquidity {}",
//!     result.swap_amount_in, result.token_in, result.token_out, result.new_liquidity
//! );
//! ```

pub use alloy_primitives::{Address, U256};

pub mod error;
pub mod math;
pub mod position;
pub mod rebalance;

pub use math::swap_math::SwapDirection;
pub use position::{Position, PositionStatus, TickRange, TokenAmounts};
pub use rebalance::config::{RebalanceConfig, TokenPair};
pub use rebalance::reposition::{
    RebalanceRequest, RebalanceResult, Rebalancer, reposition_liquidity,
};

/// Base of the tick price scale: `price = TICK_BASE ^ tick`.
pub const TICK_BASE: f64 = 1.0001;

/// Slippage applied to the simulated swap price when none is configured (0.5%).
pub const DEFAULT_SLIPPAGE: f64 = 0.005;

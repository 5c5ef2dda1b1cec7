use crate::math::tick_math::{ordered_sqrt_prices, sqrt_price_at_tick};
use crate::position::TokenAmounts;

/// Returns the token amounts a position of `liquidity` between
/// `tick_lower` and `tick_upper` would yield if withdrawn at `current_tick`.
///
/// Below the range the position is pure token0, above it pure token1, and
/// inside it holds a mix of both.
pub fn exit_amounts(
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: f64,
) -> TokenAmounts {
    let sqrt_p = sqrt_price_at_tick(current_tick);
    let sqrt_pa = sqrt_price_at_tick(tick_lower);
    let sqrt_pb = sqrt_price_at_tick(tick_upper);

    if current_tick < tick_lower {
        TokenAmounts::new(liquidity * (1.0 / sqrt_pa - 1.0 / sqrt_pb), 0.0)
    } else if current_tick > tick_upper {
        TokenAmounts::new(0.0, liquidity * (sqrt_pb - sqrt_pa))
    } else {
        TokenAmounts::new(
            liquidity * (1.0 / sqrt_p - 1.0 / sqrt_pb),
            liquidity * (sqrt_p - sqrt_pa),
        )
    }
}

/// Returns the liquidity obtained by depositing `amount0` and `amount1` in
/// the range `[tick_a, tick_b]` at `current_tick`.
///
/// Inside the range the smaller of the two per-token liquidities wins: the
/// surplus of the other token stays undeposited. A collapsed range
/// (`tick_a == tick_b`) divides by zero and yields a non-finite value.
pub fn liquidity_from_amounts(
    current_tick: i32,
    tick_a: i32,
    tick_b: i32,
    amount0: f64,
    amount1: f64,
) -> f64 {
    let (sqrt_min, sqrt_max) = ordered_sqrt_prices(tick_a, tick_b);

    if current_tick <= tick_a {
        amount0 / (1.0 / sqrt_min - 1.0 / sqrt_max)
    } else if current_tick >= tick_b {
        amount1 / (sqrt_max - sqrt_min)
    } else {
        let sqrt_p = sqrt_price_at_tick(current_tick);
        let liquidity0 = amount0 / (1.0 / sqrt_p - 1.0 / sqrt_max);
        let liquidity1 = amount1 / (sqrt_p - sqrt_min);
        liquidity0.min(liquidity1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LIQUIDITY: f64 = 21_319_375_676_934_521.0;

    #[test]
    fn exit_amounts_below_range_is_all_token0() {
        let amounts = exit_amounts(-237950, -237900, -237600, LIQUIDITY);

        assert!(amounts.amount0 > 0.0);
        assert_eq!(amounts.amount1, 0.0);
    }

    #[test]
    fn exit_amounts_above_range_is_all_token1() {
        let amounts = exit_amounts(-237582, -237900, -237600, LIQUIDITY);

        assert_eq!(amounts.amount0, 0.0);
        assert!(amounts.amount1 > 0.0);
    }

    #[test]
    fn exit_amounts_in_range_holds_both_tokens() {
        let amounts = exit_amounts(-237750, -237900, -237600, LIQUIDITY);

        assert!(amounts.amount0 > 0.0);
        assert!(amounts.amount1 > 0.0);
    }

    #[test]
    fn exit_amounts_out_of_range_do_not_depend_on_distance() {
        // once out of range, the price no longer moves the composition
        let near = exit_amounts(-237901, -237900, -237600, LIQUIDITY);
        let far = exit_amounts(-300000, -237900, -237600, LIQUIDITY);
        assert_eq!(near, far);

        let near = exit_amounts(-237599, -237900, -237600, LIQUIDITY);
        let far = exit_amounts(0, -237900, -237600, LIQUIDITY);
        assert_eq!(near, far);
    }

    #[test]
    fn exit_amounts_on_range_bounds_are_single_sided() {
        let at_lower = exit_amounts(-100, -100, 100, 1_000_000.0);
        assert!(at_lower.amount0 > 0.0);
        assert_eq!(at_lower.amount1, 0.0);

        let at_upper = exit_amounts(100, -100, 100, 1_000_000.0);
        assert_eq!(at_upper.amount0, 0.0);
        assert!(at_upper.amount1 > 0.0);
    }

    #[test]
    fn exit_amounts_zero_liquidity_is_empty() {
        let amounts = exit_amounts(0, -100, 100, 0.0);
        assert_eq!(amounts, TokenAmounts::new(0.0, 0.0));
    }

    #[test]
    fn liquidity_round_trips_through_exit_amounts() {
        for tick in [-237900, -237800, -237750, -237601, -237600] {
            let amounts = exit_amounts(tick, -237900, -237600, LIQUIDITY);
            let liquidity =
                liquidity_from_amounts(tick, -237900, -237600, amounts.amount0, amounts.amount1);

            assert_relative_eq!(liquidity, LIQUIDITY, max_relative = 1e-9);
        }
    }

    #[test]
    fn liquidity_from_amounts_is_capped_by_binding_token() {
        let amounts = exit_amounts(0, -1000, 1000, 5_000_000.0);

        let extra_token1 =
            liquidity_from_amounts(0, -1000, 1000, amounts.amount0, amounts.amount1 * 3.0);
        assert_relative_eq!(extra_token1, 5_000_000.0, max_relative = 1e-9);

        let extra_token0 =
            liquidity_from_amounts(0, -1000, 1000, amounts.amount0 * 3.0, amounts.amount1);
        assert_relative_eq!(extra_token0, 5_000_000.0, max_relative = 1e-9);
    }

    #[test]
    fn liquidity_from_amounts_ignores_unused_token_out_of_range() {
        let below = liquidity_from_amounts(-2000, -1000, 1000, 1_000.0, 1e30);
        let below_without = liquidity_from_amounts(-2000, -1000, 1000, 1_000.0, 0.0);
        assert_eq!(below, below_without);

        let above = liquidity_from_amounts(2000, -1000, 1000, 1e30, 1_000.0);
        let above_without = liquidity_from_amounts(2000, -1000, 1000, 0.0, 1_000.0);
        assert_eq!(above, above_without);
    }

    #[test]
    fn liquidity_from_amounts_collapsed_range_is_non_finite() {
        let liquidity = liquidity_from_amounts(-10, 0, 0, 1_000.0, 0.0);
        assert!(!liquidity.is_finite());
    }
}

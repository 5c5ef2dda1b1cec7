#![allow(dead_code)]

use clmm_rebalance_math::math::liquidity_math::{exit_amounts, liquidity_from_amounts};
use clmm_rebalance_math::math::swap_math::simulate_swap;
use clmm_rebalance_math::math::tick_math::sqrt_price_at_tick;
use clmm_rebalance_math::{
    Address, RebalanceConfig, RebalanceRequest, Rebalancer, TokenAmounts, TokenPair,
};
use criterion::Criterion;
use std::hint::black_box;

const TICK: i32 = -237582;
const LIQUIDITY: u128 = 21_319_375_676_934_521;

pub fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("sqrt_price_at_tick", |b| {
        b.iter(|| sqrt_price_at_tick(black_box(TICK)))
    });
}

pub fn bench_liquidity_math(c: &mut Criterion) {
    c.bench_function("exit_amounts", |b| {
        b.iter(|| {
            exit_amounts(
                black_box(TICK),
                black_box(-237900),
                black_box(-237600),
                black_box(LIQUIDITY as f64),
            )
        })
    });

    c.bench_function("liquidity_from_amounts", |b| {
        b.iter(|| {
            liquidity_from_amounts(
                black_box(TICK),
                black_box(-237700),
                black_box(-237400),
                black_box(1.5e15),
                black_box(9.0e8),
            )
        })
    });
}

pub fn bench_swap_math(c: &mut Criterion) {
    let input = TokenAmounts::new(0.0, 2.2e9);

    c.bench_function("simulate_swap", |b| {
        b.iter(|| {
            simulate_swap(
                black_box(TICK),
                black_box(-237700),
                black_box(-237400),
                black_box(input),
                black_box(0.005),
            )
        })
    });
}

pub fn bench_reposition(c: &mut Criterion) {
    let rebalancer = Rebalancer::new(
        TokenPair::new(Address::repeat_byte(0x55), Address::repeat_byte(0xb8)),
        RebalanceConfig::default(),
    );
    let request = RebalanceRequest {
        current_tick: TICK,
        old_range_low: -237900,
        old_range_high: -237600,
        new_range_low: -237700,
        new_range_high: -237400,
        liquidity: LIQUIDITY,
    };

    c.bench_function("reposition_liquidity", |b| {
        b.iter(|| rebalancer.reposition_liquidity(black_box(&request)))
    });
}

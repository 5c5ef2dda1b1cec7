use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("Math error - non-finite value")]
    NonFinite,
    #[error("Math error - negative value")]
    Negative,
}

#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("State error - tick {0} out of bounds")]
    TickOutOfBounds(i32),

    #[error("State error - invalid tick range [{lower}, {upper}]")]
    InvalidRange { lower: i32, upper: i32 },

    #[error("State error - slippage {0} outside [0, 1)")]
    InvalidSlippage(f64),

    #[error(
        "State error - expected out-of-range position, got amount0 = {amount0}, amount1 = {amount1}"
    )]
    PositionInRange { amount0: f64, amount1: f64 },

    #[error("State error - position holds no tokens")]
    EmptyPosition,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] crate::error::MathError),

    #[error(transparent)]
    StateError(#[from] crate::error::StateError),
}

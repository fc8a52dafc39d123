use thiserror::Error;

use crate::amount::MAX_PRECISION;



/// Errors raised while converting between atomic amounts and display strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The atomic amount is not an integer literal
    #[error("Invalid input")]
    InvalidInput,

    /// The human readable amount is not a decimal literal
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    /// `decimals` or `digits` is above [MAX_PRECISION]
    #[error("Precision {0} exceeds the maximum of {max}", max = MAX_PRECISION)]
    PrecisionTooLarge(u32),

    /// The atomic amount does not fit in a U256
    #[error("Amount overflows U256: {0}")]
    Overflow(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GasError {
    /// The gas limit does not even cover moving the balance and the data
    #[error("Gas limit {gas_limit} is below the required minimum of {required}")]
    InsufficientGasLimit { gas_limit: u128, required: u128 },

    #[error("Gas computation overflowed")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Malformed provider message: {0}")]
    Json(#[from] serde_json::Error),

    /// The wallet answered with an error payload
    #[error("Provider error: {0}")]
    Provider(String),

    /// A response arrived for a request it does not answer
    #[error("Unexpected response {received}, expected {expected}")]
    UnexpectedResponse { expected: String, received: String },
}

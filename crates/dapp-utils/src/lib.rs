pub mod decimal;
pub mod format;
pub mod gas;
pub mod parse;
pub mod validation;


// * Re-exports

pub use dapp_types;
pub use alloy_primitives::U256;

pub use format::{format_amount, format_units};
pub use gas::{calculate_fee, move_balance_gas, recommend_gas_price};
pub use parse::{parse_amount, parse_amount_u256};
pub use validation::{string_is_float, string_is_integer};

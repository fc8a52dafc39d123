use tracing::debug;

use dapp_types::gas::{GAS_PER_DATA_BYTE, GAS_PRICE_MODIFIER_DIVISOR, MIN_GAS_LIMIT, MIN_GAS_PRICE};
use dapp_types::{GasError, GasPriceRequest};


/// Gas spent on moving the balance and storing `data_len` bytes of data
pub fn move_balance_gas(data_len: u128) -> Result<u128, GasError> {
    data_len
        .checked_mul(GAS_PER_DATA_BYTE)
        .and_then(|gas| gas.checked_add(MIN_GAS_LIMIT))
        .ok_or(GasError::Overflow)
}

/// Fee paid by a transaction
///
/// The move balance part of the gas is charged at the full `gas_price`,
/// the rest of `gas_limit` at `gas_price / GAS_PRICE_MODIFIER_DIVISOR`.
pub fn calculate_fee(gas_limit: u128, gas_price: u128, data_len: u128) -> Result<u128, GasError> {
    let (move_gas, exec_gas) = split_gas(gas_limit, data_len)?;

    let move_fee = move_gas.checked_mul(gas_price).ok_or(GasError::Overflow)?;
    let exec_fee = exec_gas.checked_mul(gas_price).ok_or(GasError::Overflow)? / GAS_PRICE_MODIFIER_DIVISOR;

    move_fee.checked_add(exec_fee).ok_or(GasError::Overflow)
}

/// Recommend a gas price for a transaction
///
/// Without gas station metadata, for the standard speed or a zero price per unit this is
/// [MIN_GAS_PRICE]. Otherwise it is the lowest gas price whose fee covers `ppu * gas_limit`.
pub fn recommend_gas_price(request: &GasPriceRequest) -> Result<u128, GasError> {
    let (move_gas, exec_gas) = split_gas(request.gas_limit, request.data_len)?;

    let ppu = match request.gas_station_metadata.as_ref().and_then(|m| request.speed.ppu(m)) {
        Some(ppu) if ppu > 0 => ppu,
        _ => return Ok(MIN_GAS_PRICE),
    };

    let target = ppu
        .checked_mul(request.gas_limit)
        .and_then(|fee| fee.checked_mul(GAS_PRICE_MODIFIER_DIVISOR))
        .ok_or(GasError::Overflow)?;

    let weighted_gas = move_gas
        .checked_mul(GAS_PRICE_MODIFIER_DIVISOR)
        .and_then(|gas| gas.checked_add(exec_gas))
        .ok_or(GasError::Overflow)?;

    let gas_price = target.div_ceil(weighted_gas).max(MIN_GAS_PRICE);

    debug!(
        "Recommended gas price {} for {:?} speed, gas limit {}, ppu {}",
        gas_price,
        request.speed,
        request.gas_limit,
        ppu
    );

    Ok(gas_price)
}

/// Split `gas_limit` into the move balance gas and the execution gas
fn split_gas(gas_limit: u128, data_len: u128) -> Result<(u128, u128), GasError> {
    let move_gas = move_balance_gas(data_len)?;

    if gas_limit < move_gas {
        return Err(GasError::InsufficientGasLimit { gas_limit, required: move_gas });
    }

    Ok((move_gas, gas_limit - move_gas))
}

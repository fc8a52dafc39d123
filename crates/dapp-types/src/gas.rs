use serde::{Deserialize, Serialize};

/// Lowest gas price accepted by the network
pub const MIN_GAS_PRICE: u128 = 1_000_000_000;

/// Gas needed to move a balance with no data attached
pub const MIN_GAS_LIMIT: u128 = 50_000;

pub const GAS_PER_DATA_BYTE: u128 = 1_500;

/// Execution gas is charged at `gas_price / GAS_PRICE_MODIFIER_DIVISOR`
pub const GAS_PRICE_MODIFIER_DIVISOR: u128 = 100;

/// Price per unit tiers published by a gas station
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasStationMetadata {
    pub fast: u128,
    pub faster: u128,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasSpeed {
    #[default]
    Standard,
    Fast,
    Faster,
}

impl GasSpeed {
    /// The price per unit this speed asks for, `None` for the standard speed
    pub fn ppu(&self, metadata: &GasStationMetadata) -> Option<u128> {
        match self {
            Self::Standard => None,
            Self::Fast => Some(metadata.fast),
            Self::Faster => Some(metadata.faster),
        }
    }
}

/// Input of the gas price recommendation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceRequest {
    /// Length in bytes of the transaction data field
    #[serde(default)]
    pub data_len: u128,

    pub gas_limit: u128,

    #[serde(default)]
    pub speed: GasSpeed,

    #[serde(default)]
    pub gas_station_metadata: Option<GasStationMetadata>,
}

impl GasPriceRequest {
    pub fn new(gas_limit: u128, data_len: u128) -> Self {
        Self {
            data_len,
            gas_limit,
            speed: GasSpeed::Standard,
            gas_station_metadata: None,
        }
    }

    pub fn with_speed(mut self, speed: GasSpeed, metadata: GasStationMetadata) -> Self {
        self.speed = speed;
        self.gas_station_metadata = Some(metadata);
        self
    }
}

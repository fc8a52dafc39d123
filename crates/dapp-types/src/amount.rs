use serde::{Deserialize, Serialize};

/// Default number of atomic digits in one whole unit
pub const DECIMALS: u32 = 18;

/// Default display precision
pub const DIGITS: u32 = 4;

pub const ZERO: &str = "0";

/// Largest `decimals` or `digits` accepted when a non zero amount is rendered or parsed
pub const MAX_PRECISION: u32 = 255;

/// Options accepted by the amount formatter
///
/// Field names serialize in camelCase so the same JSON a dApp page sends can be loaded as is.
/// Every field except `input` is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatAmountOptions {
    /// Raw atomic amount, an integer literal with an optional leading `-`
    pub input: String,

    #[serde(default = "default_decimals")]
    pub decimals: u32,

    #[serde(default = "default_digits")]
    pub digits: u32,

    /// Group the integer part with thousands separators
    #[serde(default)]
    pub add_commas: bool,

    /// Render `<0.0001` instead of all zero decimals for sub-precision amounts
    #[serde(default)]
    pub show_is_less_than_decimals_label: bool,

    /// When true the decimals are shown up to the last non zero digit,
    /// when false they are truncated to exactly `digits`
    #[serde(default = "default_show_last_non_zero_decimal")]
    pub show_last_non_zero_decimal: bool,
}

fn default_decimals() -> u32 {
    DECIMALS
}

fn default_digits() -> u32 {
    DIGITS
}

fn default_show_last_non_zero_decimal() -> bool {
    true
}

impl FormatAmountOptions {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            decimals: DECIMALS,
            digits: DIGITS,
            add_commas: false,
            show_is_less_than_decimals_label: false,
            show_last_non_zero_decimal: true,
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_commas(mut self, add_commas: bool) -> Self {
        self.add_commas = add_commas;
        self
    }

    pub fn with_less_than_label(mut self, show: bool) -> Self {
        self.show_is_less_than_decimals_label = show;
        self
    }

    pub fn with_last_non_zero_decimal(mut self, show: bool) -> Self {
        self.show_last_non_zero_decimal = show;
        self
    }
}

impl Default for FormatAmountOptions {
    fn default() -> Self {
        Self::new(ZERO)
    }
}

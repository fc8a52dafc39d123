pub mod amount;
pub mod error;
pub mod gas;
pub mod messages;


// * Re-exports

pub use amount::{FormatAmountOptions, DECIMALS, DIGITS, MAX_PRECISION, ZERO};
pub use error::{AmountError, GasError, MessageError};
pub use gas::{GasPriceRequest, GasSpeed, GasStationMetadata};
pub use messages::{
    ProviderRequest,
    ProviderResponse,
    RequestType,
    ResponsePayload,
    ResponseType,
    SignMessageStatus,
};

//! Message contracts between a dApp page and a cross-window wallet provider.
//!
//! Every message travels as JSON of the shape `{ "type": ..., "payload": ... }`.

use serde::{Deserialize, Serialize};

pub mod payload;

pub use payload::{ProviderRequest, ProviderResponse, ResponsePayload};


/// Requests sent by the dApp to the wallet window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    SignTransactionsRequest,
    SignMessageRequest,
    LoginRequest,
    LogoutRequest,
    CancelAction,
    FinalizeHandshake,
    FinalizeResetStateRequest,
}

/// Responses posted back by the wallet window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseType {
    SignTransactionsResponse,
    SignMessageResponse,
    LoginResponse,
    LogoutResponse,
    CancelResponse,
    HandshakeResponse,
    ResetStateResponse,
}

impl RequestType {
    pub const ALL: [RequestType; 7] = [
        Self::SignTransactionsRequest,
        Self::SignMessageRequest,
        Self::LoginRequest,
        Self::LogoutRequest,
        Self::CancelAction,
        Self::FinalizeHandshake,
        Self::FinalizeResetStateRequest,
    ];

    /// The response type that answers this request
    pub fn response_type(&self) -> ResponseType {
        match self {
            Self::SignTransactionsRequest => ResponseType::SignTransactionsResponse,
            Self::SignMessageRequest => ResponseType::SignMessageResponse,
            Self::LoginRequest => ResponseType::LoginResponse,
            Self::LogoutRequest => ResponseType::LogoutResponse,
            Self::CancelAction => ResponseType::CancelResponse,
            Self::FinalizeHandshake => ResponseType::HandshakeResponse,
            Self::FinalizeResetStateRequest => ResponseType::ResetStateResponse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignTransactionsRequest => "SIGN_TRANSACTIONS_REQUEST",
            Self::SignMessageRequest => "SIGN_MESSAGE_REQUEST",
            Self::LoginRequest => "LOGIN_REQUEST",
            Self::LogoutRequest => "LOGOUT_REQUEST",
            Self::CancelAction => "CANCEL_ACTION",
            Self::FinalizeHandshake => "FINALIZE_HANDSHAKE",
            Self::FinalizeResetStateRequest => "FINALIZE_RESET_STATE_REQUEST",
        }
    }
}

impl ResponseType {
    /// The request type this response answers
    pub fn request_type(&self) -> RequestType {
        match self {
            Self::SignTransactionsResponse => RequestType::SignTransactionsRequest,
            Self::SignMessageResponse => RequestType::SignMessageRequest,
            Self::LoginResponse => RequestType::LoginRequest,
            Self::LogoutResponse => RequestType::LogoutRequest,
            Self::CancelResponse => RequestType::CancelAction,
            Self::HandshakeResponse => RequestType::FinalizeHandshake,
            Self::ResetStateResponse => RequestType::FinalizeResetStateRequest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignTransactionsResponse => "SIGN_TRANSACTIONS_RESPONSE",
            Self::SignMessageResponse => "SIGN_MESSAGE_RESPONSE",
            Self::LoginResponse => "LOGIN_RESPONSE",
            Self::LogoutResponse => "LOGOUT_RESPONSE",
            Self::CancelResponse => "CANCEL_RESPONSE",
            Self::HandshakeResponse => "HANDSHAKE_RESPONSE",
            Self::ResetStateResponse => "RESET_STATE_RESPONSE",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a message signing flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignMessageStatus {
    Pending,
    Failed,
    Signed,
    Cancelled,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RequestType, ResponseType};
use crate::error::MessageError;



/// A request posted by the dApp to the wallet window
///
/// Unit variants travel without a `payload` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ProviderRequest {
    /// Plain transaction objects, signed as a batch
    #[serde(rename = "SIGN_TRANSACTIONS_REQUEST")]
    SignTransactions(Vec<Value>),

    #[serde(rename = "SIGN_MESSAGE_REQUEST")]
    SignMessage { message: String },

    /// Login, optionally asking the wallet to sign a native auth token
    #[serde(rename = "LOGIN_REQUEST")]
    Login {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },

    #[serde(rename = "LOGOUT_REQUEST")]
    Logout,

    #[serde(rename = "CANCEL_ACTION")]
    CancelAction,

    #[serde(rename = "FINALIZE_HANDSHAKE")]
    FinalizeHandshake {
        #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
    },

    #[serde(rename = "FINALIZE_RESET_STATE_REQUEST")]
    FinalizeResetState,
}

impl ProviderRequest {
    pub fn request_type(&self) -> RequestType {
        match self {
            Self::SignTransactions(_) => RequestType::SignTransactionsRequest,
            Self::SignMessage { .. } => RequestType::SignMessageRequest,
            Self::Login { .. } => RequestType::LoginRequest,
            Self::Logout => RequestType::LogoutRequest,
            Self::CancelAction => RequestType::CancelAction,
            Self::FinalizeHandshake { .. } => RequestType::FinalizeHandshake,
            Self::FinalizeResetState => RequestType::FinalizeResetStateRequest,
        }
    }

    pub fn from_json(data: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, MessageError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Data or error carried by a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A response posted back by the wallet window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    #[serde(default)]
    pub payload: ResponsePayload,
}

impl ProviderResponse {
    pub fn success(response_type: ResponseType, data: Value) -> Self {
        Self {
            response_type,
            payload: ResponsePayload { data: Some(data), error: None },
        }
    }

    pub fn failure(response_type: ResponseType, error: impl ToString) -> Self {
        Self {
            response_type,
            payload: ResponsePayload { data: None, error: Some(error.to_string()) },
        }
    }

    pub fn is_error(&self) -> bool {
        self.payload.error.is_some()
    }

    /// Whether this response is the one expected for `request`
    pub fn answers(&self, request: &ProviderRequest) -> bool {
        request.request_type().response_type() == self.response_type
    }

    /// Match this response against `request` and extract its data
    pub fn into_result(self, request: &ProviderRequest) -> Result<Option<Value>, MessageError> {
        let expected = request.request_type().response_type();
        if expected != self.response_type {
            return Err(MessageError::UnexpectedResponse {
                expected: expected.to_string(),
                received: self.response_type.to_string(),
            });
        }

        match self.payload.error {
            Some(error) => Err(MessageError::Provider(error)),
            None => Ok(self.payload.data),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, MessageError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, MessageError> {
        Ok(serde_json::to_string(self)?)
    }
}

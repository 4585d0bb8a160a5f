use serde::{Deserialize, Serialize};

use crate::messages::{SAVE_FAILED, SAVED, STATUS_OK};

/// Body of `POST /`.
///
/// Every field defaults to empty so a partial body still deserializes; the
/// server decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitPayload {
    pub name: String,
    pub phone: String,
    #[serde(alias = "consultationType")]
    pub consultation: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl SubmitResponse {
    pub fn saved() -> Self {
        Self {
            success: true,
            error: None,
            message: SAVED.to_string(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            message: SAVE_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl StatusResponse {
    pub fn ok(timestamp: String) -> Self {
        Self {
            status: "OK".to_string(),
            message: STATUS_OK.to_string(),
            timestamp,
        }
    }
}

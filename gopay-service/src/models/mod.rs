use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound top-up request from a partner bank.
///
/// Every field defaults when missing or `null`, so an incomplete request
/// reaches the decision logic and fails validation there instead of being
/// rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TopupRequest {
    #[serde(default)]
    pub partner_id: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub phone_number: Option<String>,

    #[serde(default)]
    #[validate(required, range(min = 1))]
    pub amount: Option<i64>,

    /// Caller's correlation id, echoed back verbatim.
    #[serde(default, rename = "bniTransactionId")]
    pub upstream_transaction_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopupStatus {
    Success,
    Failed,
}

impl TopupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopupStatus::Success => "SUCCESS",
            TopupStatus::Failed => "FAILED",
        }
    }
}

/// Why a top-up was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InvalidParameters,
    NotRegistered,
}

impl FailureReason {
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::InvalidParameters => "invalid parameters",
            FailureReason::NotRegistered => "phone number not registered",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::InvalidParameters => "invalid_parameters",
            FailureReason::NotRegistered => "not_registered",
        }
    }
}

pub const SUCCESS_MESSAGE: &str = "top-up processed successfully";

/// Outcome of a top-up. Built only through [`TopupResponse::success`] and
/// [`TopupResponse::failed`], so a reference id exists exactly when the
/// status is `SUCCESS`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopupResponse {
    status: TopupStatus,
    #[serde(rename = "gopayRefId", skip_serializing_if = "Option::is_none")]
    reference_id: Option<String>,
    #[serde(rename = "bniTransactionId", skip_serializing_if = "Option::is_none")]
    upstream_transaction_id: Option<String>,
    message: String,
}

impl TopupResponse {
    pub fn success(reference_id: String, upstream_transaction_id: Option<String>) -> Self {
        Self {
            status: TopupStatus::Success,
            reference_id: Some(reference_id),
            upstream_transaction_id,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(reason: FailureReason, upstream_transaction_id: Option<String>) -> Self {
        Self {
            status: TopupStatus::Failed,
            reference_id: None,
            upstream_transaction_id,
            message: reason.message().to_string(),
        }
    }

    pub fn status(&self) -> TopupStatus {
        self.status
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    pub fn upstream_transaction_id(&self) -> Option<&str> {
        self.upstream_transaction_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

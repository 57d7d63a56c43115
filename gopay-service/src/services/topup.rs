//! Top-up decision logic.
//!
//! A request is checked in a fixed order: parameter validation first, then
//! registry membership. Every outcome is returned as a [`TopupResponse`];
//! nothing here fails.

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::models::{FailureReason, TopupRequest, TopupResponse, TopupStatus};
use crate::services::allow_list::AllowList;
use crate::services::metrics::record_topup;

pub const REFERENCE_ID_PREFIX: &str = "GP-SIM-";

/// Fresh reference id for a successful top-up. Unique per call; nothing
/// tracks previously issued ids.
pub fn generate_reference_id() -> String {
    format!("{}{}", REFERENCE_ID_PREFIX, Uuid::new_v4())
}

#[derive(Debug, Clone)]
pub struct TopupService {
    allow_list: Arc<AllowList>,
}

impl TopupService {
    pub fn new(allow_list: Arc<AllowList>) -> Self {
        Self { allow_list }
    }

    /// Decide the outcome of a top-up request.
    ///
    /// Repeating a request with the same upstream transaction id is not
    /// deduplicated: each successful call issues a new reference id.
    pub fn decide(&self, request: &TopupRequest) -> TopupResponse {
        let upstream_id = request.upstream_transaction_id.clone();

        tracing::info!(
            phone_number = request.phone_number.as_deref().unwrap_or_default(),
            amount = request.amount,
            upstream_transaction_id = upstream_id.as_deref().unwrap_or_default(),
            "Received top-up request"
        );

        let phone_number = match (request.validate(), request.phone_number.as_deref()) {
            (Ok(()), Some(phone_number)) => phone_number,
            (result, _) => {
                tracing::warn!(
                    upstream_transaction_id = upstream_id.as_deref().unwrap_or_default(),
                    errors = ?result.err(),
                    "Top-up rejected: invalid parameters"
                );
                return self.failed(FailureReason::InvalidParameters, upstream_id);
            }
        };

        if !self.allow_list.is_registered(phone_number) {
            tracing::warn!(
                upstream_transaction_id = upstream_id.as_deref().unwrap_or_default(),
                "Top-up failed: phone number not registered"
            );
            return self.failed(FailureReason::NotRegistered, upstream_id);
        }

        let reference_id = generate_reference_id();
        tracing::info!(
            upstream_transaction_id = upstream_id.as_deref().unwrap_or_default(),
            reference_id = %reference_id,
            "Top-up succeeded"
        );
        record_topup(TopupStatus::Success, None);
        TopupResponse::success(reference_id, upstream_id)
    }

    fn failed(&self, reason: FailureReason, upstream_id: Option<String>) -> TopupResponse {
        record_topup(TopupStatus::Failed, Some(reason));
        TopupResponse::failed(reason, upstream_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SUCCESS_MESSAGE;

    fn service() -> TopupService {
        TopupService::new(Arc::new(AllowList::registered()))
    }

    fn request(phone_number: &str, amount: i64, upstream_id: &str) -> TopupRequest {
        TopupRequest {
            partner_id: Some("BNI".to_string()),
            phone_number: Some(phone_number.to_string()),
            amount: Some(amount),
            upstream_transaction_id: Some(upstream_id.to_string()),
        }
    }

    #[test]
    fn registered_number_succeeds() {
        let response = service().decide(&request("081293846571", 50000, "T1"));

        assert_eq!(response.status(), TopupStatus::Success);
        assert_eq!(response.upstream_transaction_id(), Some("T1"));
        assert_eq!(response.message(), SUCCESS_MESSAGE);

        let reference_id = response.reference_id().expect("reference id on success");
        assert!(reference_id.starts_with(REFERENCE_ID_PREFIX));
        assert!(reference_id.len() > REFERENCE_ID_PREFIX.len());
        assert!(Uuid::parse_str(&reference_id[REFERENCE_ID_PREFIX.len()..]).is_ok());
    }

    #[test]
    fn unregistered_number_fails() {
        let response = service().decide(&request("000000000000", 50000, "T2"));

        assert_eq!(response.status(), TopupStatus::Failed);
        assert_eq!(response.upstream_transaction_id(), Some("T2"));
        assert_eq!(response.message(), "phone number not registered");
        assert!(response.reference_id().is_none());
    }

    #[test]
    fn empty_phone_number_is_invalid() {
        let response = service().decide(&request("", 50000, "T3"));

        assert_eq!(response.status(), TopupStatus::Failed);
        assert_eq!(response.upstream_transaction_id(), Some("T3"));
        assert_eq!(response.message(), "invalid parameters");
        assert!(response.reference_id().is_none());
    }

    #[test]
    fn missing_phone_number_is_invalid() {
        let mut req = request("081293846571", 50000, "T5");
        req.phone_number = None;
        let response = service().decide(&req);

        assert_eq!(response.status(), TopupStatus::Failed);
        assert_eq!(response.message(), "invalid parameters");
    }

    #[test]
    fn non_positive_amount_is_invalid() {
        for amount in [0, -1, i64::MIN] {
            let response = service().decide(&request("081293846571", amount, "T4"));

            assert_eq!(response.status(), TopupStatus::Failed);
            assert_eq!(response.upstream_transaction_id(), Some("T4"));
            assert_eq!(response.message(), "invalid parameters");
            assert!(response.reference_id().is_none());
        }
    }

    #[test]
    fn missing_amount_is_invalid() {
        let mut req = request("081293846571", 50000, "T11");
        req.amount = None;
        let response = service().decide(&req);

        assert_eq!(response.status(), TopupStatus::Failed);
        assert_eq!(response.upstream_transaction_id(), Some("T11"));
        assert_eq!(response.message(), "invalid parameters");
    }

    #[test]
    fn validation_runs_before_registry_lookup() {
        // Unregistered and invalid: validation wins.
        let response = service().decide(&request("000000000000", 0, "T6"));
        assert_eq!(response.message(), "invalid parameters");
    }

    #[test]
    fn repeated_requests_get_distinct_reference_ids() {
        let service = service();
        let req = request("085773092184", 10000, "T7");

        let first = service.decide(&req);
        let second = service.decide(&req);

        assert_eq!(first.status(), TopupStatus::Success);
        assert_eq!(second.status(), TopupStatus::Success);
        assert_ne!(first.reference_id(), second.reference_id());
    }

    #[test]
    fn partner_id_does_not_affect_outcome() {
        let service = service();
        let mut req = request("081293846571", 50000, "T8");
        req.partner_id = None;
        assert_eq!(service.decide(&req).status(), TopupStatus::Success);

        req.partner_id = Some(String::new());
        assert_eq!(service.decide(&req).status(), TopupStatus::Success);
    }

    #[test]
    fn absent_upstream_id_stays_absent() {
        let mut req = request("000000000000", 50000, "unused");
        req.upstream_transaction_id = None;
        assert!(service().decide(&req).upstream_transaction_id().is_none());
    }

    #[test]
    fn injected_allow_list_is_used() {
        let service = TopupService::new(Arc::new(AllowList::from_numbers(["0800"])));

        assert_eq!(
            service.decide(&request("0800", 1, "T9")).status(),
            TopupStatus::Success
        );
        assert_eq!(
            service.decide(&request("081293846571", 1, "T10")).status(),
            TopupStatus::Failed
        );
    }
}

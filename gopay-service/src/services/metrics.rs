use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

use crate::models::{FailureReason, TopupStatus};

static METRICS_HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Install the global Prometheus recorder. Safe to call more than once;
/// only the first call installs.
pub fn init_metrics() -> Result<(), AppError> {
    METRICS_HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map(|_| ())
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "failed to install Prometheus recorder: {}",
                e
            ))
        })
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(|handle| handle.as_ref().ok())
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count one top-up decision.
pub fn record_topup(status: TopupStatus, reason: Option<FailureReason>) {
    let reason = reason.map(|r| r.as_str()).unwrap_or("none");
    counter!("gopay_topup_total", "status" => status.as_str(), "reason" => reason).increment(1);
}

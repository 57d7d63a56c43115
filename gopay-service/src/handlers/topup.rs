use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;

use crate::{
    models::{TopupRequest, TopupResponse},
    AppState,
};

/// `POST /api/v1/gopay/topup`
///
/// Business outcomes (success, invalid parameters, unregistered number) are
/// all 200 with the result in the body. Only a body that is not a JSON
/// top-up request is rejected with 400.
pub async fn process_topup(
    State(state): State<AppState>,
    payload: Result<Json<TopupRequest>, JsonRejection>,
) -> Result<Json<TopupResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed top-up body");
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    })?;

    Ok(Json(state.topup.decide(&request)))
}

//! Handlers for payment endpoints.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::payments::ProcessPaymentRequest;
use crate::api::dto::ApiResponse;
use crate::api::extract::AppJson;
use crate::domain::entities::Payment;
use crate::error::AppError;
use crate::state::AppState;

/// Charges through the payment gateway and records the payment.
///
/// # Endpoint
///
/// `POST /api/v1/payments/process`
///
/// # Errors
///
/// A gateway failure is reported as 500 `Payment processing failed`; the
/// request itself is never retried here.
pub async fn process_payment_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProcessPaymentRequest>,
) -> Result<Json<ApiResponse<Payment>>, AppError> {
    payload.validate()?;

    let payment = state
        .payment_service
        .process_payment(&payload.booking_id, payload.amount, &payload.currency)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Payment processed successfully",
        payment,
    )))
}

/// # Endpoint
///
/// `GET /api/v1/payments/details/{id}`
pub async fn payment_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Payment>>, AppError> {
    let payment = state.payment_service.get_payment(&id).await?;

    Ok(Json(ApiResponse::ok(payment)))
}

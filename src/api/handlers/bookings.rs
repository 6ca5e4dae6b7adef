//! Handlers for booking endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::api::dto::bookings::CreateBookingRequest;
use crate::api::dto::{ApiResponse, Page, PageParams};
use crate::api::extract::AppJson;
use crate::domain::entities::Booking;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `POST /api/v1/bookings/create`
pub async fn create_booking_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), AppError> {
    payload.validate()?;

    let booking = state
        .booking_service
        .create_booking(payload.into_new_booking())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Booking created successfully",
            booking,
        )),
    ))
}

/// # Endpoint
///
/// `GET /api/v1/bookings/list?page=&limit=`
pub async fn list_bookings_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ApiResponse<Page<Booking>>>, AppError> {
    let bookings = state.booking_service.list_bookings().await?;

    Ok(Json(ApiResponse::ok(Page::paginate(bookings, &params))))
}

/// Cancels a booking. Cancelling an already-cancelled booking is a no-op
/// success.
///
/// # Endpoint
///
/// `PUT /api/v1/bookings/cancel/{id}`
pub async fn cancel_booking_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let booking = state.booking_service.cancel_booking(&id).await?;

    Ok(Json(ApiResponse::with_message("Booking cancelled", booking)))
}

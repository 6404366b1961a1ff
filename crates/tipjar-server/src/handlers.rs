//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;

use tipjar_core::{
    api::CHECKOUT_FAILED_MESSAGE, AmountPolicy, CreateCheckoutSessionRequest,
    CreateCheckoutSessionResponse, ErrorBody,
};
use tipjar_payments::DonationCheckoutParams;

use crate::config::{ServerConfig, FALLBACK_ORIGIN};
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payment_provider: &'static str,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(message)))
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payment_provider: state.gateway.name(),
    })
}

/// Create a hosted checkout session for one donation
///
/// The body is read as JSON whatever its `Content-Type`. Validation failures
/// answer 400 with the policy message. Everything else answers 500 with a
/// generic message; the cause is only logged.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateCheckoutSessionResponse>, ApiError> {
    let payload: CreateCheckoutSessionRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Unreadable checkout request: {}", e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, CHECKOUT_FAILED_MESSAGE)
    })?;

    let amount = AmountPolicy::DONATION.validate(payload.amount).map_err(|e| {
        tracing::debug!(amount = ?payload.amount, "Rejected donation amount: {}", e);
        error_response(StatusCode::BAD_REQUEST, e.server_message())
    })?;

    let origin = request_origin(&state.config, &headers);
    let params = DonationCheckoutParams::for_donation(amount, &origin);

    let session_id = state.gateway.create_session(&params).await.map_err(|e| {
        tracing::error!(
            provider = state.gateway.name(),
            amount = %amount,
            "Error creating checkout session: {}",
            e
        );
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
    })?;

    Ok(Json(CreateCheckoutSessionResponse {
        session_id: session_id.into_inner(),
    }))
}

/// Origin for the success/cancel redirect URLs
///
/// `PUBLIC_BASE_URL` wins; otherwise the request's own host is used, honouring
/// `X-Forwarded-Proto` from a terminating proxy.
fn request_origin(config: &ServerConfig, headers: &HeaderMap) -> String {
    if let Some(base) = &config.public_base_url {
        return base.clone();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    let Some(host) = host else {
        return FALLBACK_ORIGIN.into();
    };

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| matches!(*v, "http" | "https"))
        .unwrap_or("http");

    format!("{scheme}://{host}")
}

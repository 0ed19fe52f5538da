// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Refresh-token exchange failed. `status` is `None` for transport errors.
    #[error("Strava token exchange failed{}: {body}", fmt_status(.status))]
    UpstreamAuth { status: Option<u16>, body: String },

    #[error("Strava activity fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn fmt_status(status: &Option<u16>) -> String {
    status
        .map(|s| format!(" (HTTP {})", s))
        .unwrap_or_default()
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    /// Every failure in the request path becomes a 500 carrying the message.
    fn into_response(self) -> Response {
        let error = self.to_string();
        tracing::error!(error = %error, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

//! Router assembly and the shared JSON error response.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route is a thin translation layer: extract, take the lock, make one
//! service call, serialize. Service errors become `{code, message}` bodies
//! with a status picked per error variant.

pub mod attendants;
pub mod board;
pub mod quick_replies;
pub mod tags;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::ErrorCode;
use crate::services::board::BoardError;
use crate::services::quick_reply::QuickReplyError;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Error response carrying a status and a grepable `E_*` code.
#[derive(Debug)]
pub struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) code: &'static str,
    pub(crate) message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { status, code: err.error_code(), message: err.to_string() }
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        Self::new(board::board_error_to_status(&err), &err)
    }
}

impl From<QuickReplyError> for ApiError {
    fn from(err: QuickReplyError) -> Self {
        Self::new(quick_replies::quick_reply_error_to_status(&err), &err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, message = %self.message, "request failed");
        }
        (self.status, Json(ErrorBody { code: self.code, message: self.message })).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/board", get(board::get_board))
        .route("/api/board/search", post(board::search))
        .route("/api/board/filter", post(board::filter))
        .route("/api/columns", post(board::create_column))
        .route("/api/columns/{id}", patch(board::update_column).delete(board::delete_column))
        .route("/api/columns/{id}/conversations", post(board::create_conversation))
        .route("/api/columns/{id}/import", post(board::import_conversations))
        .route("/api/conversations/{id}", get(board::get_conversation).patch(board::update_conversation))
        .route("/api/conversations/{id}/move", post(board::move_conversation))
        .route("/api/conversations/{id}/open", post(board::open_conversation))
        .route("/api/conversations/{id}/transfer", post(board::transfer_conversation))
        .route("/api/attendants", get(attendants::list_attendants).post(attendants::create_attendant))
        .route(
            "/api/attendants/{id}",
            patch(attendants::update_attendant).delete(attendants::delete_attendant),
        )
        .route("/api/attendants/{id}/select", post(attendants::select_attendant))
        .route("/api/attendants/{id}/permissions", patch(attendants::update_permission))
        .route("/api/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/api/tags/palette", get(tags::palette))
        .route("/api/tags/{id}", patch(tags::update_tag).delete(tags::delete_tag))
        .route(
            "/api/quick-replies",
            get(quick_replies::list_quick_replies).post(quick_replies::create_quick_reply),
        )
        .route(
            "/api/quick-replies/{id}",
            patch(quick_replies::update_quick_reply).delete(quick_replies::delete_quick_reply),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

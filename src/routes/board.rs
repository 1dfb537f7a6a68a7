//! Board routes: the visible view, columns and conversations of the
//! selected attendant.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::model::{Column, Conversation, ConversationPatch, NewConversation};
use crate::routes::ApiError;
use crate::services::board::{BoardError, MoveOutcome, RemovedColumn};
use crate::services::manager::{AttendantTransfer, BoardManager};
use crate::services::view::ViewFilter;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub attendant_id: String,
    pub filter: ViewFilter,
    pub filtered: bool,
    pub columns: Vec<Column>,
}

pub(crate) fn board_response(manager: &BoardManager) -> BoardResponse {
    BoardResponse {
        attendant_id: manager.active_attendant().to_owned(),
        filter: manager.filter().clone(),
        filtered: manager.filter().is_active(),
        columns: manager.columns().to_vec(),
    }
}

pub(crate) fn board_error_to_status(err: &BoardError) -> StatusCode {
    match err {
        BoardError::ColumnNotFound(_)
        | BoardError::ConversationNotFound(_)
        | BoardError::AttendantNotFound(_)
        | BoardError::TagNotFound(_) => StatusCode::NOT_FOUND,
        BoardError::FirstColumnProtected(_)
        | BoardError::ConfirmationRequired { .. }
        | BoardError::DuplicateConversation(_)
        | BoardError::AttendantSelected(_) => StatusCode::CONFLICT,
        BoardError::SameAttendant(_) | BoardError::Blank(_) | BoardError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
        BoardError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        BoardError::NoAttendants => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub query: String,
}

#[derive(Deserialize)]
pub struct FilterBody {
    pub tag_id: Option<String>,
}

/// `GET /api/board`: selected attendant, active filter, visible columns.
pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let board = state.board.read().await;
    Json(board_response(&board))
}

/// `POST /api/board/search`: replace the view with a text search. An empty
/// query restores the unfiltered board.
pub async fn search(State(state): State<AppState>, Json(body): Json<SearchBody>) -> Json<BoardResponse> {
    let mut board = state.board.write().await;
    board.search(&body.query);
    Json(board_response(&board))
}

/// `POST /api/board/filter`: replace the view with a tag filter.
pub async fn filter(State(state): State<AppState>, Json(body): Json<FilterBody>) -> Json<BoardResponse> {
    let mut board = state.board.write().await;
    board.filter_by_tag(body.tag_id.as_deref());
    Json(board_response(&board))
}

// =============================================================================
// COLUMNS
// =============================================================================

#[derive(Deserialize)]
pub struct ColumnBody {
    pub title: String,
}

#[derive(Deserialize)]
pub struct DeleteColumnParams {
    #[serde(default)]
    pub confirm: bool,
}

/// `POST /api/columns`: append a column.
pub async fn create_column(
    State(state): State<AppState>,
    Json(body): Json<ColumnBody>,
) -> Result<(StatusCode, Json<Column>), ApiError> {
    let column = state.board.write().await.add_column(&body.title)?;
    Ok((StatusCode::CREATED, Json(column)))
}

/// `PATCH /api/columns/:id`: rename a column.
pub async fn update_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(body): Json<ColumnBody>,
) -> Result<Json<Column>, ApiError> {
    let column = state.board.write().await.update_column(&column_id, &body.title)?;
    Ok(Json(column))
}

/// `DELETE /api/columns/:id?confirm=true`: delete a column, moving its
/// conversations to the previous one.
pub async fn delete_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Query(params): Query<DeleteColumnParams>,
) -> Result<Json<RemovedColumn>, ApiError> {
    let removed = state.board.write().await.delete_column(&column_id, params.confirm)?;
    Ok(Json(removed))
}

// =============================================================================
// CONVERSATIONS
// =============================================================================

#[derive(Deserialize)]
pub struct MoveBody {
    pub column_id: String,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub moved: bool,
    pub from: Option<String>,
    pub to: String,
}

#[derive(Deserialize)]
pub struct TransferBody {
    pub attendant_id: String,
    pub column_id: String,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// `POST /api/columns/:id/conversations`: add a conversation to a column.
pub async fn create_conversation(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(body): Json<NewConversation>,
) -> Result<(StatusCode, Json<Conversation>), ApiError> {
    let conversation = state.board.write().await.add_conversation(&column_id, body)?;
    Ok((StatusCode::CREATED, Json(conversation)))
}

/// `POST /api/columns/:id/import`: bulk-load conversations from a channel.
pub async fn import_conversations(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(body): Json<Vec<Conversation>>,
) -> Result<Json<ImportResponse>, ApiError> {
    let imported = state.board.write().await.import_conversations(&column_id, body)?;
    Ok(Json(ImportResponse { imported }))
}

/// `POST /api/conversations/:id/move`: drop a conversation on a column.
pub async fn move_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(body): Json<MoveBody>,
) -> Result<Json<MoveResponse>, ApiError> {
    let outcome = state.board.write().await.move_conversation(&conversation_id, &body.column_id)?;
    let (moved, from) = match outcome {
        MoveOutcome::Moved { from } => (true, Some(from)),
        MoveOutcome::SameColumn | MoveOutcome::ConversationMissing => (false, None),
    };
    Ok(Json(MoveResponse { moved, from, to: body.column_id }))
}

/// `GET /api/conversations/:id`: a conversation on the selected attendant's
/// board, whether or not the current view shows it.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let board = state.board.read().await;
    let conversation = board
        .current_board()
        .conversation(&conversation_id)
        .cloned()
        .ok_or(BoardError::ConversationNotFound(conversation_id))?;
    Ok(Json(conversation))
}

/// `POST /api/conversations/:id/open`: open a conversation, clearing unread.
pub async fn open_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Conversation>, ApiError> {
    let conversation = state.board.write().await.open_conversation(&conversation_id)?;
    Ok(Json(conversation))
}

/// `PATCH /api/conversations/:id`: edit contact details, message or tags.
pub async fn update_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(patch): Json<ConversationPatch>,
) -> Result<Json<Conversation>, ApiError> {
    let conversation = state.board.write().await.update_conversation(&conversation_id, &patch)?;
    Ok(Json(conversation))
}

/// `POST /api/conversations/:id/transfer`: hand a conversation to another
/// attendant. The conversation leaves this board; the destination board is
/// not updated.
pub async fn transfer_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(body): Json<TransferBody>,
) -> Result<Json<AttendantTransfer>, ApiError> {
    let transfer = state
        .board
        .write()
        .await
        .change_attendant(&conversation_id, &body.attendant_id, &body.column_id)?;
    Ok(Json(transfer))
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;

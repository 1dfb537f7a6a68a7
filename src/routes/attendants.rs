//! Attendant roster routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::model::{Attendant, Permission};
use crate::routes::ApiError;
use crate::routes::board::{BoardResponse, board_response};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AttendantsResponse {
    pub selected: String,
    pub attendants: Vec<Attendant>,
}

#[derive(Deserialize)]
pub struct CreateAttendantBody {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Deserialize)]
pub struct UpdateAttendantBody {
    pub active: bool,
}

#[derive(Deserialize)]
pub struct PermissionBody {
    pub permission: Permission,
    pub enabled: bool,
}

/// `GET /api/attendants`: roster plus the selected attendant id.
pub async fn list_attendants(State(state): State<AppState>) -> Json<AttendantsResponse> {
    let board = state.board.read().await;
    Json(AttendantsResponse { selected: board.active_attendant().to_owned(), attendants: board.attendants().to_vec() })
}

/// `POST /api/attendants`: add an attendant with an empty board.
pub async fn create_attendant(
    State(state): State<AppState>,
    Json(body): Json<CreateAttendantBody>,
) -> Result<(StatusCode, Json<Attendant>), ApiError> {
    let attendant = state.board.write().await.add_attendant(&body.name, &body.email, &body.avatar)?;
    Ok((StatusCode::CREATED, Json(attendant)))
}

/// `PATCH /api/attendants/:id`: toggle the active flag.
pub async fn update_attendant(
    State(state): State<AppState>,
    Path(attendant_id): Path<String>,
    Json(body): Json<UpdateAttendantBody>,
) -> Result<Json<Attendant>, ApiError> {
    let attendant = state.board.write().await.set_attendant_active(&attendant_id, body.active)?;
    Ok(Json(attendant))
}

/// `PATCH /api/attendants/:id/permissions`: grant or revoke one permission.
pub async fn update_permission(
    State(state): State<AppState>,
    Path(attendant_id): Path<String>,
    Json(body): Json<PermissionBody>,
) -> Result<Json<Attendant>, ApiError> {
    let attendant = state
        .board
        .write()
        .await
        .set_permission(&attendant_id, body.permission, body.enabled)?;
    Ok(Json(attendant))
}

/// `DELETE /api/attendants/:id`: remove an attendant and their board.
pub async fn delete_attendant(
    State(state): State<AppState>,
    Path(attendant_id): Path<String>,
) -> Result<Json<Attendant>, ApiError> {
    let attendant = state.board.write().await.remove_attendant(&attendant_id)?;
    Ok(Json(attendant))
}

/// `POST /api/attendants/:id/select`: switch boards; the view resets.
pub async fn select_attendant(
    State(state): State<AppState>,
    Path(attendant_id): Path<String>,
) -> Result<Json<BoardResponse>, ApiError> {
    let mut board = state.board.write().await;
    board.select_attendant(&attendant_id)?;
    Ok(Json(board_response(&board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::board::{ColumnBody, SearchBody, search, update_column};
    use crate::services::view::ViewFilter;
    use crate::state::test_helpers::test_app_state;

    #[tokio::test]
    async fn list_reports_selected() {
        let Json(list) = list_attendants(State(test_app_state())).await;
        assert_eq!(list.selected, "att-1");
        assert_eq!(list.attendants.len(), 3);
    }

    #[tokio::test]
    async fn select_resets_search() {
        let state = test_app_state();
        search(State(state.clone()), Json(SearchBody { query: "maria".into() })).await;

        let Json(view) = select_attendant(State(state), Path("att-2".into())).await.unwrap();
        assert_eq!(view.attendant_id, "att-2");
        assert_eq!(view.filter, ViewFilter::None);
        assert_eq!(view.columns[0].conversations.len(), 2);
    }

    #[tokio::test]
    async fn select_unknown_is_not_found() {
        let err = select_attendant(State(test_app_state()), Path("att-9".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "E_ATTENDANT_NOT_FOUND");
    }

    #[tokio::test]
    async fn create_toggle_delete() {
        let state = test_app_state();
        let body = CreateAttendantBody { name: "Ana Souza".into(), email: "ana@example.com".into(), avatar: String::new() };
        let (status, Json(att)) = create_attendant(State(state.clone()), Json(body)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(updated) =
            update_attendant(State(state.clone()), Path(att.id.clone()), Json(UpdateAttendantBody { active: false }))
                .await
                .unwrap();
        assert!(!updated.active);

        let Json(removed) = delete_attendant(State(state.clone()), Path(att.id.clone())).await.unwrap();
        assert_eq!(removed.id, att.id);
        let Json(list) = list_attendants(State(state)).await;
        assert_eq!(list.attendants.len(), 3);
    }

    #[tokio::test]
    async fn create_with_bad_email_is_bad_request() {
        let body = CreateAttendantBody { name: "Ana".into(), email: "ana".into(), avatar: String::new() };
        let err = create_attendant(State(test_app_state()), Json(body)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "E_INVALID_EMAIL");
    }

    #[tokio::test]
    async fn revoked_permission_is_forbidden() {
        let state = test_app_state();
        let body = PermissionBody { permission: Permission::RenameColumns, enabled: false };
        let Json(att) = update_permission(State(state.clone()), Path("att-1".into()), Json(body)).await.unwrap();
        assert!(!att.permissions.rename_columns);

        let err = update_column(
            State(state),
            Path("column-1".into()),
            Json(ColumnBody { title: "Demo".into() }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.code, "E_PERMISSION_DENIED");
    }

    #[test]
    fn permission_body_uses_snake_case_names() {
        let body: PermissionBody =
            serde_json::from_str(r#"{ "permission": "transfer_conversations", "enabled": false }"#).unwrap();
        assert_eq!(body.permission, Permission::TransferConversations);
        assert!(!body.enabled);
    }

    #[tokio::test]
    async fn deleting_selected_attendant_is_conflict() {
        let err = delete_attendant(State(test_app_state()), Path("att-1".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }
}

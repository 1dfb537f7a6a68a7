//! Quick reply routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::routes::ApiError;
use crate::services::quick_reply::{QuickReply, QuickReplyError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QuickReplyBody {
    pub key: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub key: Option<String>,
}

pub(crate) fn quick_reply_error_to_status(err: &QuickReplyError) -> StatusCode {
    match err {
        QuickReplyError::EmptyKey | QuickReplyError::InvalidKey(_) | QuickReplyError::EmptyMessage => {
            StatusCode::BAD_REQUEST
        }
        QuickReplyError::DuplicateKey(_) => StatusCode::CONFLICT,
        QuickReplyError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// `GET /api/quick-replies[?key=ola]`: all snippets, or the one matching `key`.
pub async fn list_quick_replies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<QuickReply>> {
    let book = state.quick_replies.read().await;
    let replies = match params.key.as_deref() {
        Some(key) => book.find_by_key(key).cloned().into_iter().collect(),
        None => book.list().to_vec(),
    };
    Json(replies)
}

/// `POST /api/quick-replies`
pub async fn create_quick_reply(
    State(state): State<AppState>,
    Json(body): Json<QuickReplyBody>,
) -> Result<(StatusCode, Json<QuickReply>), ApiError> {
    let reply = state.quick_replies.write().await.add(&body.key, &body.message)?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// `PATCH /api/quick-replies/:id`
pub async fn update_quick_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<QuickReplyBody>,
) -> Result<Json<QuickReply>, ApiError> {
    let reply = state.quick_replies.write().await.update(&id, &body.key, &body.message)?;
    Ok(Json(reply))
}

/// `DELETE /api/quick-replies/:id`
pub async fn delete_quick_reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuickReply>, ApiError> {
    let reply = state.quick_replies.write().await.delete(&id)?;
    Ok(Json(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::test_app_state;

    fn body(key: &str, message: &str) -> Json<QuickReplyBody> {
        Json(QuickReplyBody { key: key.into(), message: message.into() })
    }

    #[test]
    fn quick_reply_error_to_status_maps_variants() {
        assert_eq!(quick_reply_error_to_status(&QuickReplyError::InvalidKey("a b".into())), StatusCode::BAD_REQUEST);
        assert_eq!(quick_reply_error_to_status(&QuickReplyError::DuplicateKey("ola".into())), StatusCode::CONFLICT);
        assert_eq!(quick_reply_error_to_status(&QuickReplyError::NotFound("msg-1".into())), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_list_and_find_by_key() {
        let state = test_app_state();
        let (status, Json(ola)) = create_quick_reply(State(state.clone()), body("ola", "Olá!")).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        create_quick_reply(State(state.clone()), body("tchau", "Até logo!")).await.unwrap();

        let Json(all) = list_quick_replies(State(state.clone()), Query(ListParams { key: None })).await;
        assert_eq!(all.len(), 2);

        let Json(found) = list_quick_replies(State(state), Query(ListParams { key: Some("ola".into()) })).await;
        assert_eq!(found, vec![ola]);
    }

    #[tokio::test]
    async fn duplicate_key_is_conflict() {
        let state = test_app_state();
        create_quick_reply(State(state.clone()), body("ola", "Olá!")).await.unwrap();
        let err = create_quick_reply(State(state), body("ola", "Oi")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "E_DUPLICATE_KEY");
    }

    #[tokio::test]
    async fn update_and_delete() {
        let state = test_app_state();
        let (_, Json(ola)) = create_quick_reply(State(state.clone()), body("ola", "Olá!")).await.unwrap();

        let Json(updated) =
            update_quick_reply(State(state.clone()), Path(ola.id.clone()), body("oi", "Oi, tudo bem?")).await.unwrap();
        assert_eq!(updated.key, "oi");

        delete_quick_reply(State(state.clone()), Path(ola.id.clone())).await.unwrap();
        let err = delete_quick_reply(State(state), Path(ola.id)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}

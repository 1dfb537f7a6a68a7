//! Tag catalog routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::model::{Palette, Tag, TagColor};
use crate::routes::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateTagBody {
    pub name: String,
    pub color: TagColor,
}

#[derive(Deserialize)]
pub struct UpdateTagBody {
    pub name: Option<String>,
    pub color: Option<TagColor>,
}

#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub hex: &'static str,
}

/// `GET /api/tags/palette`: named colors offered by the tag editor.
pub async fn palette() -> Json<Vec<PaletteEntry>> {
    Json(Palette::ALL.into_iter().map(|p| PaletteEntry { name: p.as_str(), hex: p.hex() }).collect())
}

/// `GET /api/tags`
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<Tag>> {
    Json(state.board.read().await.tags().to_vec())
}

/// `POST /api/tags`: add a tag to the catalog.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(body): Json<CreateTagBody>,
) -> Result<(StatusCode, Json<Tag>), ApiError> {
    let tag = state.board.write().await.create_tag(&body.name, body.color)?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// `PATCH /api/tags/:id`: rename/recolor; conversations carrying the tag
/// pick up the change.
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Json(body): Json<UpdateTagBody>,
) -> Result<Json<Tag>, ApiError> {
    let tag = state
        .board
        .write()
        .await
        .update_tag(&tag_id, body.name.as_deref(), body.color)?;
    Ok(Json(tag))
}

/// `DELETE /api/tags/:id`: remove from the catalog only.
pub async fn delete_tag(State(state): State<AppState>, Path(tag_id): Path<String>) -> Result<Json<Tag>, ApiError> {
    let tag = state.board.write().await.delete_tag(&tag_id)?;
    Ok(Json(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::test_app_state;

    #[tokio::test]
    async fn palette_lists_named_colors() {
        let Json(entries) = palette().await;
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].name, "red");
        assert_eq!(entries[0].hex, "#EF4444");
    }

    #[tokio::test]
    async fn create_tag_accepts_hex_color_body() {
        let state = test_app_state();
        let body: CreateTagBody = serde_json::from_str(r##"{"name":"VIP","color":"#aa00ff"}"##).unwrap();
        let (status, Json(tag)) = create_tag(State(state.clone()), Json(body)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(tag.color, TagColor::Hex("#AA00FF".into()));

        let Json(tags) = list_tags(State(state)).await;
        assert_eq!(tags.last(), Some(&tag));
    }

    #[tokio::test]
    async fn update_tag_relabels_board() {
        let state = test_app_state();
        let body = UpdateTagBody { name: Some("Lead".into()), color: Some(TagColor::Named(Palette::Pink)) };
        let Json(tag) = update_tag(State(state.clone()), Path("tag-1".into()), Json(body)).await.unwrap();
        assert_eq!(tag.name, "Lead");

        let board = state.board.read().await;
        assert_eq!(board.columns()[0].conversations[0].tags[0], tag);
    }

    #[tokio::test]
    async fn delete_unknown_tag_is_not_found() {
        let err = delete_tag(State(test_app_state()), Path("tag-99".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "E_TAG_NOT_FOUND");
    }
}

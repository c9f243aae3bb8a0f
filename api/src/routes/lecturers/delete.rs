use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::lecturer;
use sea_orm::EntityTrait;
use util::state::AppState;

/// DELETE /api/lecturers/{lecturer_id}
///
/// Remove a lecturer. Selections referencing them go too; issues filed
/// against them are left in place with a dangling reference.
///
/// ### Responses
/// - `200 OK` — confirmation message (also for an already-absent id)
/// - `500 Internal Server Error` — database error
pub async fn delete_lecturer(
    State(app_state): State<AppState>,
    Path(lecturer_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match lecturer::Entity::delete_by_id(lecturer_id).exec(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Lecturer deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete lecturer: {err}"
            ))),
        )
            .into_response(),
    }
}

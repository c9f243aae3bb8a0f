use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student;
use sea_orm::EntityTrait;
use util::state::AppState;

/// DELETE /api/students/{student_id}
///
/// Remove a student. Their selection rows go with them; issues they filed
/// are left in place with a dangling reference.
///
/// ### Responses
/// - `200 OK` — confirmation message (also for an already-absent id)
/// - `500 Internal Server Error` — database error
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match student::Entity::delete_by_id(student_id).exec(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Student deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete student: {err}"
            ))),
        )
            .into_response(),
    }
}

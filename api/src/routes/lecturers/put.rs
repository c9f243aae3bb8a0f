use crate::response::ApiResponse;
use crate::routes::lecturers::common::{LecturerResponse, UpdateLecturerRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::lecturer::Model as LecturerModel;
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

/// PUT /api/lecturers/{lecturer_id}
///
/// Partial update; omitted fields are left unchanged. Returns the
/// post-update document.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` — validation failure or duplicate email
/// - `404 Not Found` — no lecturer with that id
/// - `500 Internal Server Error` — database error
pub async fn update_lecturer(
    State(app_state): State<AppState>,
    Path(lecturer_id): Path<i64>,
    Json(req): Json<UpdateLecturerRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {err}"))),
        )
            .into_response();
    }

    match LecturerModel::update_details(db, lecturer_id, req.name, req.email, req.course).await {
        Ok(lecturer) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LecturerResponse::from(lecturer),
                "Lecturer updated successfully",
            )),
        )
            .into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Lecturer not found")),
        )
            .into_response(),
        Err(err) => {
            let (status, msg) = if err.to_string().contains("UNIQUE constraint failed") {
                (
                    StatusCode::BAD_REQUEST,
                    "A lecturer with this email already exists".to_string(),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to update lecturer: {err}"),
                )
            };
            (status, Json(ApiResponse::<()>::error(msg))).into_response()
        }
    }
}

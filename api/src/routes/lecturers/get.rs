use crate::response::ApiResponse;
use crate::routes::lecturers::common::LecturerResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::lecturer::{self, Model as LecturerModel};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /api/lecturers
///
/// Retrieve all lecturers.
///
/// ### Responses
/// - `200 OK`
/// - `500 Internal Server Error` — database error
pub async fn get_lecturers(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match lecturer::Entity::find()
        .order_by_asc(lecturer::Column::Id)
        .all(db)
        .await
    {
        Ok(lecturers) => {
            let lecturers: Vec<LecturerResponse> =
                lecturers.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    lecturers,
                    "Lecturers retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve lecturers: {err}"
            ))),
        )
            .into_response(),
    }
}

/// GET /api/lecturers/{lecturer_id}
///
/// Retrieve a single lecturer.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` — no lecturer with that id
/// - `500 Internal Server Error` — database error
pub async fn get_lecturer_by_id(
    State(app_state): State<AppState>,
    Path(lecturer_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match LecturerModel::find_by_id(db, lecturer_id).await {
        Ok(Some(lecturer)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LecturerResponse::from(lecturer),
                "Lecturer retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Lecturer not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve lecturer: {err}"
            ))),
        )
            .into_response(),
    }
}

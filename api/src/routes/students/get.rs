use crate::response::ApiResponse;
use crate::routes::students::common::{StudentResponse, expand_student, expand_students};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::{self, Model as StudentModel};
use sea_orm::{EntityTrait, QueryOrder};
use util::state::AppState;

/// GET /api/students
///
/// Retrieve all students with their lecturer selections expanded.
///
/// ### Responses
/// - `200 OK`
/// - `500 Internal Server Error` — database error
pub async fn get_students(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    let students = match student::Entity::find()
        .order_by_asc(student::Column::Id)
        .all(db)
        .await
    {
        Ok(students) => students,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to retrieve students: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_students(db, students).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::<Vec<StudentResponse>>::success(
                students,
                "Students retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve students: {err}"
            ))),
        )
            .into_response(),
    }
}

/// GET /api/students/{student_id}
///
/// Retrieve a single student with selections expanded.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` — no student with that id
/// - `500 Internal Server Error` — database error
pub async fn get_student_by_id(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let student = match StudentModel::find_by_id(db, student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Student not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to retrieve student: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_student(db, student).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                student,
                "Student retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve student: {err}"
            ))),
        )
            .into_response(),
    }
}

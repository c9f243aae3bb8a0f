use crate::response::ApiResponse;
use crate::routes::students::common::{
    UpdateMarksRequest, UpdateSelectionsRequest, UpdateStudentRequest, expand_student,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as StudentModel;
use db::models::student_selection::{Model as SelectionModel, NewSelection};
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

/// PUT /api/students/{student_id}
///
/// Partial update of a student's identity fields; omitted fields are left
/// unchanged. Returns the post-update document.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` — validation failure or duplicate email/school id
/// - `404 Not Found` — no student with that id
/// - `500 Internal Server Error` — database error
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {err}"))),
        )
            .into_response();
    }

    let student = match StudentModel::update_profile(
        db,
        student_id,
        req.first_name,
        req.last_name,
        req.email,
        req.school_id,
    )
    .await
    {
        Ok(student) => student,
        Err(DbErr::RecordNotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Student not found")),
            )
                .into_response();
        }
        Err(err) => {
            let (status, msg) = if err.to_string().contains("UNIQUE constraint failed") {
                (
                    StatusCode::BAD_REQUEST,
                    "A student with this email or school ID already exists".to_string(),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to update student: {err}"),
                )
            };
            return (status, Json(ApiResponse::<()>::error(msg))).into_response();
        }
    };

    match expand_student(db, student).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(student, "Student updated successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to update student: {err}"
            ))),
        )
            .into_response(),
    }
}

/// PUT /api/students/{student_id}/selections
///
/// Replace the student's lecturer selections wholesale with the supplied
/// set.
///
/// ### Request Body
/// ```json
/// { "selections": [{ "lecturerId": 2, "marks": 71.0 }, { "lecturerId": 5 }] }
/// ```
///
/// ### Responses
/// - `200 OK` — the student with the new selections expanded
/// - `400 Bad Request` — a selection references an unknown lecturer
/// - `404 Not Found` — no student with that id
/// - `500 Internal Server Error` — database error
pub async fn update_student_selections(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateSelectionsRequest>,
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
                    "Failed to update selections: {err}"
                ))),
            )
                .into_response();
        }
    };

    let entries = req
        .selections
        .into_iter()
        .map(|entry| NewSelection {
            lecturer_id: entry.lecturer_id,
            marks: entry.marks,
        })
        .collect();

    if let Err(err) = SelectionModel::replace_for_student(db, student.id, entries).await {
        let (status, msg) = if err.to_string().contains("FOREIGN KEY constraint failed") {
            (
                StatusCode::BAD_REQUEST,
                "Selection references an unknown lecturer".to_string(),
            )
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to update selections: {err}"),
            )
        };
        return (status, Json(ApiResponse::<()>::error(msg))).into_response();
    }

    match expand_student(db, student).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                student,
                "Selections updated successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to update selections: {err}"
            ))),
        )
            .into_response(),
    }
}

/// PUT /api/students/{student_id}/lecturer/{lecturer_id}/marks
///
/// Set the marks on the one selection matching the (student, lecturer)
/// pair.
///
/// ### Request Body
/// ```json
/// { "marks": 88.5 }
/// ```
///
/// ### Responses
/// - `200 OK` — the student with selections expanded
/// - `404 Not Found` — no such student, or no selection for that lecturer
/// - `500 Internal Server Error` — database error
pub async fn update_student_marks(
    State(app_state): State<AppState>,
    Path((student_id, lecturer_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateMarksRequest>,
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
                    "Failed to update marks: {err}"
                ))),
            )
                .into_response();
        }
    };

    match SelectionModel::set_marks(db, student.id, lecturer_id, req.marks).await {
        Ok(_) => {}
        Err(DbErr::RecordNotFound(_)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Selection not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to update marks: {err}"
                ))),
            )
                .into_response();
        }
    }

    match expand_student(db, student).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(student, "Marks updated successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to update marks: {err}"
            ))),
        )
            .into_response(),
    }
}

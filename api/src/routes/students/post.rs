use crate::response::ApiResponse;
use crate::routes::students::common::{CreateStudentRequest, expand_student};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::student::Model as StudentModel;
use db::models::student_selection::{Model as SelectionModel, NewSelection};
use util::state::AppState;
use validator::Validate;

/// POST /api/students
///
/// Register a new student, optionally with an initial set of lecturer
/// selections.
///
/// ### Request Body
/// ```json
/// {
///   "firstName": "Amina",
///   "lastName": "Otieno",
///   "email": "amina@university.ac",
///   "schoolId": "S-1001",
///   "selections": [{ "lecturerId": 2, "marks": null }]
/// }
/// ```
///
/// ### Responses
/// - `201 Created` — the student with selections expanded
/// - `400 Bad Request` — validation failure, duplicate email/school id, or
///   a selection referencing an unknown lecturer
/// - `500 Internal Server Error` — database error
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {err}"))),
        )
            .into_response();
    }

    let student = match StudentModel::create(
        db,
        &req.first_name,
        &req.last_name,
        &req.email,
        &req.school_id,
    )
    .await
    {
        Ok(student) => student,
        Err(err) => {
            let (status, msg) = if err.to_string().contains("UNIQUE constraint failed") {
                (
                    StatusCode::BAD_REQUEST,
                    "A student with this email or school ID already exists".to_string(),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to create student: {err}"),
                )
            };
            return (status, Json(ApiResponse::<()>::error(msg))).into_response();
        }
    };

    if let Some(selections) = req.selections {
        let entries = selections
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
                    format!("Failed to create student: {err}"),
                )
            };
            return (status, Json(ApiResponse::<()>::error(msg))).into_response();
        }
    }

    match expand_student(db, student).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(student, "Student created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to create student: {err}"
            ))),
        )
            .into_response(),
    }
}

use crate::response::ApiResponse;
use crate::routes::lecturers::common::{CreateLecturerRequest, LecturerResponse};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::lecturer::Model as LecturerModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/lecturers
///
/// Register a new lecturer.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Dr. Mwangi",
///   "email": "mwangi@university.ac",
///   "course": "CS101"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` — validation failure or duplicate email
/// - `500 Internal Server Error` — database error
pub async fn create_lecturer(
    State(app_state): State<AppState>,
    Json(req): Json<CreateLecturerRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {err}"))),
        )
            .into_response();
    }

    match LecturerModel::create(db, &req.name, &req.email, &req.course).await {
        Ok(lecturer) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                LecturerResponse::from(lecturer),
                "Lecturer created successfully",
            )),
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
                    format!("Failed to create lecturer: {err}"),
                )
            };
            (status, Json(ApiResponse::<()>::error(msg))).into_response()
        }
    }
}

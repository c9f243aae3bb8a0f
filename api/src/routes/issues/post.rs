use crate::response::ApiResponse;
use crate::routes::issues::common::{CreateIssueRequest, expand_issue, non_empty};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::issue::{IssuePriority, IssueType, Model as IssueModel};
use db::models::student::Model as StudentModel;
use db::models::student_selection::Model as SelectionModel;
use util::state::AppState;
use validator::Validate;

/// POST /api/issues
///
/// A student files a new issue against a lecturer. The student must be
/// registered under that lecturer (one of their selections must reference
/// it); `student` and `lecturer` are immutable afterwards. The new issue
/// always starts out `pending`.
///
/// ### Request Body
/// ```json
/// {
///   "studentId": 1,
///   "lecturerId": 2,
///   "issueType": "missing_marks",
///   "subject": "CAT 2 marks missing",
///   "description": "My CAT 2 marks are not reflected on the portal",
///   "priority": "medium",
///   "attachments": ["marked-script.pdf"]
/// }
/// ```
/// `issueType` defaults to `missing_marks`, `priority` to `medium` and
/// `attachments` to an empty list.
///
/// ### Responses
/// - `201 Created` — the issue with `student` and `lecturer` expanded
/// - `400 Bad Request` — validation failure, unknown enum value, or the
///   student is not registered under the lecturer
/// - `404 Not Found` — the student does not exist
/// - `500 Internal Server Error` — database error
pub async fn create_issue(
    State(app_state): State<AppState>,
    Json(req): Json<CreateIssueRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(err) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format!("Validation failed: {err}"))),
        )
            .into_response();
    }

    let issue_type = match non_empty(req.issue_type) {
        Some(raw) => match raw.parse::<IssueType>() {
            Ok(issue_type) => issue_type,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(format!(
                        "Invalid issue type '{raw}'"
                    ))),
                )
                    .into_response();
            }
        },
        None => IssueType::default(),
    };

    let priority = match non_empty(req.priority) {
        Some(raw) => match raw.parse::<IssuePriority>() {
            Ok(priority) => priority,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(format!("Invalid priority '{raw}'"))),
                )
                    .into_response();
            }
        },
        None => IssuePriority::default(),
    };

    // Verify the student exists and is registered under this lecturer.
    let student = match StudentModel::find_by_id(db, req.student_id).await {
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
                    "Failed to create issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    match SelectionModel::is_registered(db, student.id, req.lecturer_id).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    "You are not registered under this lecturer",
                )),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to create issue: {err}"
                ))),
            )
                .into_response();
        }
    }

    let issue = match IssueModel::create(
        db,
        req.student_id,
        req.lecturer_id,
        issue_type,
        &req.subject,
        &req.description,
        priority,
        req.attachments.unwrap_or_default(),
    )
    .await
    {
        Ok(issue) => issue,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to create issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_issue(db, issue).await {
        Ok(issue) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(issue, "Issue created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to create issue: {err}"
            ))),
        )
            .into_response(),
    }
}

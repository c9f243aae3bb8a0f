use crate::response::ApiResponse;
use crate::routes::issues::common::{
    IssueResponse, ListIssuesQuery, expand_issue, expand_issues, non_empty,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::issue::{self, IssueStatus, Model as IssueModel};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use util::state::AppState;

/// GET /api/issues
///
/// Retrieve all issues, most recent first, with optional equality filters.
///
/// ### Query Parameters
/// - `studentId` (optional): only issues filed by this student
/// - `lecturerId` (optional): only issues filed against this lecturer
/// - `status` (optional): only issues in this status
///
/// ### Responses
/// - `200 OK` — array of issues with `student`, `lecturer` and `resolvedBy`
///   expanded
/// - `400 Bad Request` — unknown `status` value
/// - `500 Internal Server Error` — database error
pub async fn get_issues(
    State(app_state): State<AppState>,
    Query(params): Query<ListIssuesQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    let mut condition = Condition::all();

    if let Some(student_id) = params.student_id {
        condition = condition.add(issue::Column::StudentId.eq(student_id));
    }
    if let Some(lecturer_id) = params.lecturer_id {
        condition = condition.add(issue::Column::LecturerId.eq(lecturer_id));
    }
    if let Some(status) = non_empty(params.status) {
        match status.parse::<IssueStatus>() {
            Ok(status) => condition = condition.add(issue::Column::Status.eq(status)),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<()>::error(format!(
                        "Invalid status value '{status}'"
                    ))),
                )
                    .into_response();
            }
        }
    }

    let issues = match issue::Entity::find()
        .filter(condition)
        .order_by_desc(issue::Column::CreatedAt)
        .order_by_desc(issue::Column::Id)
        .all(db)
        .await
    {
        Ok(issues) => issues,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to retrieve issues: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_issues(db, issues).await {
        Ok(issues) => (
            StatusCode::OK,
            Json(ApiResponse::<Vec<IssueResponse>>::success(
                issues,
                "Issues retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve issues: {err}"
            ))),
        )
            .into_response(),
    }
}

/// GET /api/issues/{issue_id}
///
/// Retrieve a single issue with its references expanded.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` — no issue with that id
/// - `500 Internal Server Error` — database error
pub async fn get_issue_by_id(
    State(app_state): State<AppState>,
    Path(issue_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let issue = match IssueModel::find_by_id(db, issue_id).await {
        Ok(Some(issue)) => issue,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error("Issue not found")),
            )
                .into_response();
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to retrieve issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_issue(db, issue).await {
        Ok(issue) => (
            StatusCode::OK,
            Json(ApiResponse::success(issue, "Issue retrieved successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve issue: {err}"
            ))),
        )
            .into_response(),
    }
}

/// GET /api/issues/student/{student_id}
///
/// All issues filed by one student, most recent first. An unknown student id
/// yields an empty list, not a 404.
///
/// ### Responses
/// - `200 OK`
/// - `500 Internal Server Error` — database error
pub async fn get_student_issues(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let issues = match issue::Entity::find()
        .filter(issue::Column::StudentId.eq(student_id))
        .order_by_desc(issue::Column::CreatedAt)
        .order_by_desc(issue::Column::Id)
        .all(db)
        .await
    {
        Ok(issues) => issues,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!(
                    "Failed to retrieve issues: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_issues(db, issues).await {
        Ok(issues) => (
            StatusCode::OK,
            Json(ApiResponse::<Vec<IssueResponse>>::success(
                issues,
                "Issues retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to retrieve issues: {err}"
            ))),
        )
            .into_response(),
    }
}

use crate::response::ApiResponse;
use crate::routes::issues::common::{
    UpdateIssueRequest, UpdateIssueStatusRequest, expand_issue,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::issue::{IssueStatus, Model as IssueModel};
use sea_orm::DbErr;
use util::state::AppState;

/// PUT /api/issues/{issue_id}/status
///
/// The resolving party rewrites an issue's status. There is no restriction
/// on the source state: a resolved issue may be re-resolved or reopened.
/// Iff the new status is `resolved`, `resolution`, `resolvedBy` and
/// `resolvedAt` are populated; other transitions leave any prior resolution
/// fields in place.
///
/// ### Request Body
/// ```json
/// {
///   "status": "resolved",
///   "resolution": "Marks uploaded to the portal",
///   "resolvedBy": 2
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the updated issue with all references expanded
/// - `400 Bad Request` — unknown status value
/// - `404 Not Found` — no issue with that id
/// - `500 Internal Server Error` — database error
pub async fn update_issue_status(
    State(app_state): State<AppState>,
    Path(issue_id): Path<i64>,
    Json(req): Json<UpdateIssueStatusRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let status = match req.status.parse::<IssueStatus>() {
        Ok(status) => status,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(format!(
                    "Invalid status value '{}'",
                    req.status
                ))),
            )
                .into_response();
        }
    };

    let issue =
        match IssueModel::set_status(db, issue_id, status, req.resolution, req.resolved_by).await {
            Ok(issue) => issue,
            Err(DbErr::RecordNotFound(_)) => {
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
                        "Failed to update issue status: {err}"
                    ))),
                )
                    .into_response();
            }
        };

    match expand_issue(db, issue).await {
        Ok(issue) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                issue,
                "Issue status updated successfully",
            )),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to update issue status: {err}"
            ))),
        )
            .into_response(),
    }
}

/// PUT /api/issues/{issue_id}
///
/// Student self-edit of an issue they filed. Only allowed while the issue is
/// still `pending`; `subject`, `description` and `attachments` are the only
/// editable fields and omitted ones are left unchanged. Registration is not
/// re-checked: `student` and `lecturer` are immutable after creation.
///
/// ### Request Body
/// ```json
/// {
///   "subject": "CAT 2 and CAT 3 marks missing",
///   "attachments": ["marked-script.pdf", "portal-screenshot.png"]
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the updated issue with `student` and `lecturer` expanded
/// - `400 Bad Request` — the issue is no longer pending
/// - `404 Not Found` — no issue with that id
/// - `500 Internal Server Error` — database error
pub async fn update_issue(
    State(app_state): State<AppState>,
    Path(issue_id): Path<i64>,
    Json(req): Json<UpdateIssueRequest>,
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
                    "Failed to update issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    // Only allow updates while the issue is still pending.
    if issue.status != IssueStatus::Pending {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Cannot update issue that is not pending",
            )),
        )
            .into_response();
    }

    let updated = match IssueModel::update_content(
        db,
        issue_id,
        req.subject,
        req.description,
        req.attachments,
    )
    .await
    {
        Ok(updated) => updated,
        Err(DbErr::RecordNotFound(_)) => {
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
                    "Failed to update issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    match expand_issue(db, updated).await {
        Ok(issue) => (
            StatusCode::OK,
            Json(ApiResponse::success(issue, "Issue updated successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to update issue: {err}"
            ))),
        )
            .into_response(),
    }
}

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::issue::{IssueStatus, Model as IssueModel};
use util::state::AppState;

/// DELETE /api/issues/{issue_id}
///
/// Student self-service deletion. Only allowed while the issue is still
/// `pending`; once a lecturer or admin has moved it to any other status it
/// is locked.
///
/// ### Responses
/// - `200 OK` — confirmation message
/// - `400 Bad Request` — the issue is no longer pending
/// - `404 Not Found` — no issue with that id
/// - `500 Internal Server Error` — database error
pub async fn delete_issue(
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
                    "Failed to delete issue: {err}"
                ))),
            )
                .into_response();
        }
    };

    // Only allow deletion while the issue is still pending.
    if issue.status != IssueStatus::Pending {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Cannot delete issue that is not pending",
            )),
        )
            .into_response();
    }

    match IssueModel::delete_by_id(db, issue_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Issue deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete issue: {err}"
            ))),
        )
            .into_response(),
    }
}

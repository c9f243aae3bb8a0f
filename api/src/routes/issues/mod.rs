use axum::Router;
use axum::routing::{get, put};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_issue;
use get::{get_issue_by_id, get_issues, get_student_issues};
use post::create_issue;
use put::{update_issue, update_issue_status};

pub fn issue_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_issues).post(create_issue))
        .route("/student/{student_id}", get(get_student_issues))
        .route(
            "/{issue_id}",
            get(get_issue_by_id).put(update_issue).delete(delete_issue),
        )
        .route("/{issue_id}/status", put(update_issue_status))
}

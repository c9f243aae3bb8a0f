use axum::Router;
use axum::routing::{get, put};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_student;
use get::{get_student_by_id, get_students};
use post::create_student;
use put::{update_student, update_student_marks, update_student_selections};

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students).post(create_student))
        .route(
            "/{student_id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .route("/{student_id}/selections", put(update_student_selections))
        .route(
            "/{student_id}/lecturer/{lecturer_id}/marks",
            put(update_student_marks),
        )
}

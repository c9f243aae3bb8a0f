use axum::Router;
use axum::routing::get;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_lecturer;
use get::{get_lecturer_by_id, get_lecturers};
use post::create_lecturer;
use put::update_lecturer;

pub fn lecturer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lecturers).post(create_lecturer))
        .route(
            "/{lecturer_id}",
            get(get_lecturer_by_id)
                .put(update_lecturer)
                .delete(delete_lecturer),
        )
}

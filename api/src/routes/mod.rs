//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one module per entity, each split into
//! `get`/`post`/`put`/`delete` handler files plus a `common` module for the
//! request/response DTOs.
//!
//! Route groups:
//! - `/health` → liveness check
//! - `/students` → student CRUD, selections, marks
//! - `/lecturers` → lecturer CRUD
//! - `/issues` → the issue lifecycle (create, list, resolve, edit, delete)

use crate::routes::{
    health::health_routes, issues::issue_routes, lecturers::lecturer_routes,
    students::student_routes,
};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod health;
pub mod issues;
pub mod lecturers;
pub mod students;

/// Builds the complete application router for all HTTP endpoints under `/api`.
///
/// There is no authentication layer: every endpoint trusts the caller
/// identity it is handed. The only mutation guard in the system is the
/// pending gate on issue edit/delete.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/students", student_routes())
        .nest("/lecturers", lecturer_routes())
        .nest("/issues", issue_routes())
        .with_state(app_state)
}

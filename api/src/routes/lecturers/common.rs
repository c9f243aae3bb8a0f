//! Request and response DTOs for the `/lecturers` route group.

use chrono::{DateTime, Utc};
use db::models::lecturer;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLecturerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLecturerRequest {
    pub name: Option<String>,
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,
    pub course: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<lecturer::Model> for LecturerResponse {
    fn from(lecturer: lecturer::Model) -> Self {
        Self {
            id: lecturer.id,
            name: lecturer.name,
            email: lecturer.email,
            course: lecturer.course,
            created_at: lecturer.created_at,
            updated_at: lecturer.updated_at,
        }
    }
}

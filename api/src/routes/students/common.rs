//! Request and response DTOs for the `/students` route group.

use crate::routes::common::LecturerSummary;
use chrono::{DateTime, Utc};
use db::models::student_selection::Model as SelectionModel;
use db::models::{lecturer, student, student_selection};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    pub lecturer_id: i64,
    pub marks: Option<f32>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    #[validate(email(message = "email must be valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "schoolId is required"))]
    pub school_id: String,
    pub selections: Option<Vec<SelectionEntry>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,
    pub school_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSelectionsRequest {
    pub selections: Vec<SelectionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarksRequest {
    pub marks: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub id: i64,
    pub lecturer: Option<LecturerSummary>,
    pub marks: Option<f32>,
}

/// A student with selections expanded; each selection carries a lecturer
/// summary (`null` if the lecturer has since been deleted).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school_id: String,
    pub selections: Vec<SelectionResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Expands selections and their lecturers for a batch of students with two
/// `IN` queries.
pub async fn expand_students(
    db: &DbConn,
    students: Vec<student::Model>,
) -> Result<Vec<StudentResponse>, DbErr> {
    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();

    let selections = student_selection::Entity::find()
        .filter(student_selection::Column::StudentId.is_in(student_ids))
        .order_by_asc(student_selection::Column::Id)
        .all(db)
        .await?;

    let lecturer_ids: Vec<i64> = selections.iter().map(|s| s.lecturer_id).collect();
    let lecturers: HashMap<i64, lecturer::Model> = lecturer::Entity::find()
        .filter(lecturer::Column::Id.is_in(lecturer_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|l| (l.id, l))
        .collect();

    let mut by_student: HashMap<i64, Vec<SelectionModel>> = HashMap::new();
    for selection in selections {
        by_student
            .entry(selection.student_id)
            .or_default()
            .push(selection);
    }

    let responses = students
        .into_iter()
        .map(|student| {
            let selections = by_student
                .remove(&student.id)
                .unwrap_or_default()
                .into_iter()
                .map(|selection| SelectionResponse {
                    id: selection.id,
                    lecturer: lecturers
                        .get(&selection.lecturer_id)
                        .cloned()
                        .map(Into::into),
                    marks: selection.marks,
                })
                .collect();

            StudentResponse {
                id: student.id,
                first_name: student.first_name,
                last_name: student.last_name,
                email: student.email,
                school_id: student.school_id,
                selections,
                created_at: student.created_at,
                updated_at: student.updated_at,
            }
        })
        .collect();

    Ok(responses)
}

pub async fn expand_student(
    db: &DbConn,
    student: student::Model,
) -> Result<StudentResponse, DbErr> {
    let mut expanded = expand_students(db, vec![student]).await?;
    Ok(expanded.remove(0))
}

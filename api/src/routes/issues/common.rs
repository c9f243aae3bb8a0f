//! Request and response DTOs for the `/issues` route group, plus the
//! reference-expansion helper.
//!
//! Wire JSON uses camelCase field names. Enum-valued request fields arrive
//! as strings and are parsed against the closed enums; unknown values are
//! client faults.

use crate::routes::common::{LecturerSummary, ResolverSummary, StudentSummary};
use chrono::{DateTime, Utc};
use db::models::issue::{IssuePriority, IssueStatus, IssueType};
use db::models::{issue, lecturer, student};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    pub student_id: i64,
    pub lecturer_id: i64,
    pub issue_type: Option<String>,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub priority: Option<String>,
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueRequest {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueStatusRequest {
    pub status: String,
    pub resolution: Option<String>,
    pub resolved_by: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIssuesQuery {
    pub student_id: Option<i64>,
    pub lecturer_id: Option<i64>,
    pub status: Option<String>,
}

/// An issue with its references expanded to summary projections. A referent
/// deleted after the issue was filed serializes as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResponse {
    pub id: i64,
    pub student: Option<StudentSummary>,
    pub lecturer: Option<LecturerSummary>,
    pub issue_type: IssueType,
    pub subject: String,
    pub description: String,
    pub priority: IssuePriority,
    pub attachments: Vec<String>,
    pub status: IssueStatus,
    pub resolution: Option<String>,
    pub resolved_by: Option<ResolverSummary>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Expands `student`, `lecturer` and `resolvedBy` for a batch of issues with
/// two `IN` queries rather than one lookup per reference.
pub async fn expand_issues(
    db: &DbConn,
    issues: Vec<issue::Model>,
) -> Result<Vec<IssueResponse>, DbErr> {
    let student_ids: Vec<i64> = issues.iter().map(|i| i.student_id).collect();
    let mut lecturer_ids: Vec<i64> = issues.iter().map(|i| i.lecturer_id).collect();
    lecturer_ids.extend(issues.iter().filter_map(|i| i.resolved_by));

    let students: HashMap<i64, student::Model> = student::Entity::find()
        .filter(student::Column::Id.is_in(student_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let lecturers: HashMap<i64, lecturer::Model> = lecturer::Entity::find()
        .filter(lecturer::Column::Id.is_in(lecturer_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|l| (l.id, l))
        .collect();

    let responses = issues
        .into_iter()
        .map(|issue| {
            let student = students.get(&issue.student_id).cloned().map(Into::into);
            let lecturer = lecturers.get(&issue.lecturer_id).cloned().map(Into::into);
            let resolved_by = issue
                .resolved_by
                .and_then(|id| lecturers.get(&id))
                .cloned()
                .map(Into::into);

            IssueResponse {
                id: issue.id,
                student,
                lecturer,
                issue_type: issue.issue_type,
                subject: issue.subject,
                description: issue.description,
                priority: issue.priority,
                attachments: issue.attachments.0,
                status: issue.status,
                resolution: issue.resolution,
                resolved_by,
                resolved_at: issue.resolved_at,
                created_at: issue.created_at,
                updated_at: issue.updated_at,
            }
        })
        .collect();

    Ok(responses)
}

pub async fn expand_issue(db: &DbConn, issue: issue::Model) -> Result<IssueResponse, DbErr> {
    let mut expanded = expand_issues(db, vec![issue]).await?;
    Ok(expanded.remove(0))
}

/// Treats `Some("")` as absent; the original API ignores empty string inputs
/// for optional enum fields.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

//! Student-filed issues against lecturers and their lifecycle.
//!
//! An issue is created `pending`. Student self-service edits and deletes are
//! only allowed while it stays `pending`; the status-update path may rewrite
//! the status freely and populates the resolution fields when the new status
//! is `resolved`.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, FromJsonQueryResult, IntoActiveModel};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "issues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub lecturer_id: i64,

    pub issue_type: IssueType,
    pub subject: String,
    pub description: String,
    pub priority: IssuePriority,

    #[sea_orm(column_type = "Json")]
    pub attachments: AttachmentList,

    pub status: IssueStatus,

    pub resolution: Option<String>,
    pub resolved_by: Option<i64>,
    pub resolved_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered attachment references (URLs or storage keys), stored as a JSON array.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct AttachmentList(pub Vec<String>);

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "issue_type")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssueType {
    #[default]
    #[sea_orm(string_value = "missing_marks")]
    MissingMarks,

    #[sea_orm(string_value = "incorrect_marks")]
    IncorrectMarks,

    #[sea_orm(string_value = "remark_request")]
    RemarkRequest,

    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "issue_priority")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssuePriority {
    #[sea_orm(string_value = "low")]
    Low,

    #[default]
    #[sea_orm(string_value = "medium")]
    Medium,

    #[sea_orm(string_value = "high")]
    High,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "issue_status")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IssueStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "resolved")]
    Resolved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::Id"
    )]
    Lecturer,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        student_id: i64,
        lecturer_id: i64,
        issue_type: IssueType,
        subject: &str,
        description: &str,
        priority: IssuePriority,
        attachments: Vec<String>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            student_id: Set(student_id),
            lecturer_id: Set(lecturer_id),
            issue_type: Set(issue_type),
            subject: Set(subject.to_owned()),
            description: Set(description.to_owned()),
            priority: Set(priority),
            attachments: Set(AttachmentList(attachments)),
            status: Set(IssueStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Rewrites the status unconditionally; there is no restriction on the
    /// source state. Iff the new status is `resolved`, the resolution fields
    /// are populated and `resolved_at` is stamped. Transitions away from
    /// `resolved` leave prior resolution fields untouched.
    pub async fn set_status(
        db: &DbConn,
        issue_id: i64,
        status: IssueStatus,
        resolution: Option<String>,
        resolved_by: Option<i64>,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(issue_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Issue not found".to_string()))?;

        let mut active_model = model.into_active_model();
        active_model.status = Set(status);

        if status == IssueStatus::Resolved {
            if let Some(resolution) = resolution {
                active_model.resolution = Set(Some(resolution));
            }
            if let Some(resolved_by) = resolved_by {
                active_model.resolved_by = Set(Some(resolved_by));
            }
            active_model.resolved_at = Set(Some(Utc::now()));
        }

        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }

    /// Student self-edit: partial update of the authored fields. The pending
    /// gate is enforced by the caller, which has already loaded the issue.
    pub async fn update_content(
        db: &DbConn,
        issue_id: i64,
        subject: Option<String>,
        description: Option<String>,
        attachments: Option<Vec<String>>,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(issue_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Issue not found".to_string()))?;

        let mut active_model = model.into_active_model();

        if let Some(subject) = subject {
            active_model.subject = Set(subject);
        }
        if let Some(description) = description {
            active_model.description = Set(description);
        }
        if let Some(attachments) = attachments {
            active_model.attachments = Set(AttachmentList(attachments));
        }
        active_model.updated_at = Set(Utc::now());

        active_model.update(db).await
    }

    pub async fn delete_by_id(db: &DbConn, issue_id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(issue_id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{IssuePriority, IssueStatus, IssueType, Model as IssueModel};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_starts_pending_with_no_resolution() {
        let db = setup_test_db().await;

        let issue = IssueModel::create(
            &db,
            1,
            2,
            IssueType::MissingMarks,
            "Missing CAT 2 marks",
            "My CAT 2 marks are not on the portal",
            IssuePriority::Medium,
            vec![],
        )
        .await
        .unwrap();

        assert_eq!(issue.status, IssueStatus::Pending);
        assert_eq!(issue.resolution, None);
        assert_eq!(issue.resolved_by, None);
        assert_eq!(issue.resolved_at, None);
        assert!(issue.attachments.0.is_empty());
    }

    #[tokio::test]
    async fn resolving_sets_all_resolution_fields_together() {
        let db = setup_test_db().await;

        let issue = IssueModel::create(
            &db,
            1,
            2,
            IssueType::Other,
            "Subject",
            "Description",
            IssuePriority::Low,
            vec![],
        )
        .await
        .unwrap();

        let resolved = IssueModel::set_status(
            &db,
            issue.id,
            IssueStatus::Resolved,
            Some("Marks uploaded".to_string()),
            Some(2),
        )
        .await
        .unwrap();

        assert_eq!(resolved.status, IssueStatus::Resolved);
        assert_eq!(resolved.resolution.as_deref(), Some("Marks uploaded"));
        assert_eq!(resolved.resolved_by, Some(2));
        assert!(resolved.resolved_at.is_some());
    }

    #[tokio::test]
    async fn non_resolved_transition_leaves_resolution_fields_untouched() {
        let db = setup_test_db().await;

        let issue = IssueModel::create(
            &db,
            1,
            2,
            IssueType::MissingMarks,
            "Subject",
            "Description",
            IssuePriority::High,
            vec![],
        )
        .await
        .unwrap();

        let resolved = IssueModel::set_status(
            &db,
            issue.id,
            IssueStatus::Resolved,
            Some("Fixed".to_string()),
            Some(9),
        )
        .await
        .unwrap();
        let resolved_at = resolved.resolved_at;

        // Re-opening keeps the stale resolution fields in place.
        let reopened = IssueModel::set_status(&db, issue.id, IssueStatus::InProgress, None, None)
            .await
            .unwrap();

        assert_eq!(reopened.status, IssueStatus::InProgress);
        assert_eq!(reopened.resolution.as_deref(), Some("Fixed"));
        assert_eq!(reopened.resolved_by, Some(9));
        assert_eq!(reopened.resolved_at, resolved_at);
    }

    #[tokio::test]
    async fn update_content_is_partial() {
        let db = setup_test_db().await;

        let issue = IssueModel::create(
            &db,
            1,
            2,
            IssueType::MissingMarks,
            "Original subject",
            "Original description",
            IssuePriority::Medium,
            vec!["scan-1.pdf".to_string()],
        )
        .await
        .unwrap();

        let updated =
            IssueModel::update_content(&db, issue.id, Some("New subject".to_string()), None, None)
                .await
                .unwrap();

        assert_eq!(updated.subject, "New subject");
        assert_eq!(updated.description, "Original description");
        assert_eq!(updated.attachments.0, vec!["scan-1.pdf".to_string()]);
    }

    #[tokio::test]
    async fn status_strings_parse_case_insensitively() {
        assert_eq!(
            "resolved".parse::<IssueStatus>().unwrap(),
            IssueStatus::Resolved
        );
        assert_eq!(
            "In_Progress".parse::<IssueStatus>().unwrap(),
            IssueStatus::InProgress
        );
        assert!("escalated".parse::<IssueStatus>().is_err());
    }
}

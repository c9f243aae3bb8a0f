//! One row per lecturer a student is registered under. A student may only
//! file issues against lecturers present here.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{IntoActiveModel, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_selections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub lecturer_id: i64,

    pub marks: Option<f32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::Id",
        on_delete = "Cascade"
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

/// Input record for creating or replacing a student's selections.
#[derive(Debug, Clone)]
pub struct NewSelection {
    pub lecturer_id: i64,
    pub marks: Option<f32>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        student_id: i64,
        lecturer_id: i64,
        marks: Option<f32>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            student_id: Set(student_id),
            lecturer_id: Set(lecturer_id),
            marks: Set(marks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    /// All selections for one student, in insertion order.
    pub async fn find_for_student(db: &DbConn, student_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Whether the student is registered under the given lecturer.
    pub async fn is_registered(
        db: &DbConn,
        student_id: i64,
        lecturer_id: i64,
    ) -> Result<bool, DbErr> {
        let selection = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::LecturerId.eq(lecturer_id))
            .one(db)
            .await?;

        Ok(selection.is_some())
    }

    /// Replaces the student's selections wholesale with the supplied set.
    pub async fn replace_for_student(
        db: &DbConn,
        student_id: i64,
        entries: Vec<NewSelection>,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;

        for entry in entries {
            Model::create(db, student_id, entry.lecturer_id, entry.marks).await?;
        }

        Model::find_for_student(db, student_id).await
    }

    /// Sets the marks on the one selection matching the (student, lecturer) pair.
    pub async fn set_marks(
        db: &DbConn,
        student_id: i64,
        lecturer_id: i64,
        marks: f32,
    ) -> Result<Model, DbErr> {
        let model = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::LecturerId.eq(lecturer_id))
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Selection not found".to_string()))?;

        let mut active_model = model.into_active_model();
        active_model.marks = Set(Some(marks));
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::{Model as SelectionModel, NewSelection};
    use crate::models::lecturer::Model as LecturerModel;
    use crate::models::student::Model as StudentModel;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn replace_and_set_marks() {
        let db = setup_test_db().await;

        let student = StudentModel::create(&db, "Brian", "Kip", "brian@uni.ac", "S-2001")
            .await
            .unwrap();
        let l1 = LecturerModel::create(&db, "Dr. Mwangi", "mwangi@uni.ac", "CS101")
            .await
            .unwrap();
        let l2 = LecturerModel::create(&db, "Dr. Njeri", "njeri@uni.ac", "CS202")
            .await
            .unwrap();

        let selections = SelectionModel::replace_for_student(
            &db,
            student.id,
            vec![
                NewSelection {
                    lecturer_id: l1.id,
                    marks: None,
                },
                NewSelection {
                    lecturer_id: l2.id,
                    marks: Some(71.0),
                },
            ],
        )
        .await
        .unwrap();
        assert_eq!(selections.len(), 2);

        assert!(
            SelectionModel::is_registered(&db, student.id, l1.id)
                .await
                .unwrap()
        );

        let updated = SelectionModel::set_marks(&db, student.id, l1.id, 88.5)
            .await
            .unwrap();
        assert_eq!(updated.marks, Some(88.5));

        // Replacing again drops the old rows.
        let selections = SelectionModel::replace_for_student(
            &db,
            student.id,
            vec![NewSelection {
                lecturer_id: l2.id,
                marks: None,
            }],
        )
        .await
        .unwrap();
        assert_eq!(selections.len(), 1);
        assert!(
            !SelectionModel::is_registered(&db, student.id, l1.id)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn set_marks_without_selection_is_record_not_found() {
        let db = setup_test_db().await;

        let student = StudentModel::create(&db, "Carol", "Atieno", "carol@uni.ac", "S-2002")
            .await
            .unwrap();

        let err = SelectionModel::set_marks(&db, student.id, 42, 50.0)
            .await
            .unwrap_err();
        assert!(matches!(err, sea_orm::DbErr::RecordNotFound(_)));
    }
}

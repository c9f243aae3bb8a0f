use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_selection::Entity")]
    StudentSelection,
}

impl Related<super::student_selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentSelection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        first_name: &str,
        last_name: &str,
        email: &str,
        school_id: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            email: Set(email.to_owned()),
            school_id: Set(school_id.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Partial update of the identity fields. Omitted fields are left unchanged.
    pub async fn update_profile(
        db: &DbConn,
        id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        school_id: Option<String>,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student not found".to_string()))?;

        let mut active_model = model.into_active_model();

        if let Some(first_name) = first_name {
            active_model.first_name = Set(first_name);
        }
        if let Some(last_name) = last_name {
            active_model.last_name = Set(last_name);
        }
        if let Some(email) = email {
            active_model.email = Set(email);
        }
        if let Some(school_id) = school_id {
            active_model.school_id = Set(school_id);
        }
        active_model.updated_at = Set(Utc::now());

        active_model.update(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::Model as StudentModel;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_and_update_profile() {
        let db = setup_test_db().await;

        let student = StudentModel::create(&db, "Amina", "Otieno", "amina@uni.ac", "S-1001")
            .await
            .unwrap();
        assert_eq!(student.first_name, "Amina");
        assert_eq!(student.school_id, "S-1001");

        let updated = StudentModel::update_profile(
            &db,
            student.id,
            None,
            Some("Omondi".to_string()),
            None,
            None,
        )
        .await
        .unwrap();
        assert_eq!(updated.first_name, "Amina");
        assert_eq!(updated.last_name, "Omondi");
        assert!(updated.updated_at >= student.updated_at);
    }

    #[tokio::test]
    async fn update_missing_student_is_record_not_found() {
        let db = setup_test_db().await;

        let err = StudentModel::update_profile(&db, 999, Some("X".to_string()), None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, sea_orm::DbErr::RecordNotFound(_)));
    }
}

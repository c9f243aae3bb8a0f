use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lecturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub email: String,
    pub course: String,

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
        name: &str,
        email: &str,
        course: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            course: Set(course.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Partial update. Omitted fields are left unchanged.
    pub async fn update_details(
        db: &DbConn,
        id: i64,
        name: Option<String>,
        email: Option<String>,
        course: Option<String>,
    ) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Lecturer not found".to_string()))?;

        let mut active_model = model.into_active_model();

        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(email) = email {
            active_model.email = Set(email);
        }
        if let Some(course) = course {
            active_model.course = Set(course);
        }
        active_model.updated_at = Set(Utc::now());

        active_model.update(db).await
    }
}

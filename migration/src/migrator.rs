use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607150001_create_students::Migration),
            Box::new(migrations::m202607150002_create_lecturers::Migration),
            Box::new(migrations::m202607150003_create_student_selections::Migration),
            Box::new(migrations::m202607200001_create_issues::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202607200001_create_issues"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign keys on student_id / lecturer_id / resolved_by: issues keep
        // their references after the referenced row is deleted.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("issues"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("student_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("lecturer_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("issue_type"))
                            .enumeration(
                                Alias::new("issue_type"),
                                vec![
                                    Alias::new("missing_marks"),
                                    Alias::new("incorrect_marks"),
                                    Alias::new("remark_request"),
                                    Alias::new("other"),
                                ],
                            )
                            .not_null()
                            .default("missing_marks"),
                    )
                    .col(ColumnDef::new(Alias::new("subject")).text().not_null())
                    .col(ColumnDef::new(Alias::new("description")).text().not_null())
                    .col(
                        ColumnDef::new(Alias::new("priority"))
                            .enumeration(
                                Alias::new("issue_priority"),
                                vec![
                                    Alias::new("low"),
                                    Alias::new("medium"),
                                    Alias::new("high"),
                                ],
                            )
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("attachments"))
                            .json()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(
                                Alias::new("issue_status"),
                                vec![
                                    Alias::new("pending"),
                                    Alias::new("in_progress"),
                                    Alias::new("resolved"),
                                    Alias::new("rejected"),
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Alias::new("resolution")).text().null())
                    .col(ColumnDef::new(Alias::new("resolved_by")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("resolved_at")).timestamp().null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("issues")).to_owned())
            .await
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_users_table::Users, m20260101_000003_create_reviews_table::Reviews,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::CommentId))
                    .col(integer(Comments::ReviewId))
                    .col(string(Comments::Author))
                    .col(text(Comments::Body))
                    .col(integer(Comments::Votes).default(0))
                    .col(
                        timestamp_with_time_zone(Comments::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // The error chain keys on "review" in this constraint name to answer 404.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_review_id")
                            .from(Comments::Table, Comments::ReviewId)
                            .to(Reviews::Table, Reviews::ReviewId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comments::Table, Comments::Author)
                            .to(Users::Table, Users::Username)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comments {
    Table,
    CommentId,
    ReviewId,
    Author,
    Body,
    Votes,
    CreatedAt,
}

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_categories_table;
mod m20260101_000002_create_users_table;
mod m20260101_000003_create_reviews_table;
mod m20260101_000004_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_categories_table::Migration),
            Box::new(m20260101_000002_create_users_table::Migration),
            Box::new(m20260101_000003_create_reviews_table::Migration),
            Box::new(m20260101_000004_create_comments_table::Migration),
        ]
    }
}

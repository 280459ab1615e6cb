use crate::server::{data::category::CategoryRepository, error::AppError};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_slug;

use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, seed::seed_test_data};

mod create;
mod get_by_review_id;

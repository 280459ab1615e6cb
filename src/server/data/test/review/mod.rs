use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::review::{GetReviewsParams, IncrementVotesParams, ReviewSortColumn, SortOrder},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, seed::seed_test_data};

mod assert_exists;
mod get_all;
mod get_by_id;
mod increment_votes;

fn params(sort_by: ReviewSortColumn, order: SortOrder, category: Option<&str>) -> GetReviewsParams {
    GetReviewsParams {
        sort_by,
        order,
        category: category.map(str::to_string),
    }
}

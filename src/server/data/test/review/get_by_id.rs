use super::*;

/// Tests the comment count of a review matches its comments.
///
/// Review 3 of the seed data carries three comments.
///
/// Expected: Ok with comment_count 3 and the stored review fields
#[tokio::test]
async fn returns_review_with_comment_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(3).await?;

    assert_eq!(result.comment_count, 3);
    assert_eq!(result.review.review_id, 3);
    assert_eq!(result.review.title, "Ultimate Werewolf");
    assert_eq!(result.review.owner, "bainesface");
    assert_eq!(result.review.votes, 5);

    Ok(())
}

/// Tests a review without comments reports a zero count rather than disappearing from the join.
///
/// Expected: Ok with comment_count 0
#[tokio::test]
async fn returns_zero_count_for_review_without_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(review.review_id).await?;

    assert_eq!(result.comment_count, 0);
    assert_eq!(result.review.title, review.title);

    Ok(())
}

/// Tests fetching a review id that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the id
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Review not found for id 999999")
    );

    Ok(())
}

use super::*;

/// Tests an existing review passes the check.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_existing_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    repo.assert_exists(review.review_id).await?;

    Ok(())
}

/// Tests a missing review fails the check.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo.assert_exists(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

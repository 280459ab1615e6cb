use super::*;

/// Tests a positive increment is added to the stored votes.
///
/// Expected: Ok with votes 2 and every other field unchanged
#[tokio::test]
async fn adds_positive_increment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let before = entity::prelude::Review::find_by_id(1).one(db).await?.unwrap();

    let repo = ReviewRepository::new(db);
    let updated = repo
        .increment_votes(IncrementVotesParams {
            review_id: 1,
            inc_votes: 1,
        })
        .await?;

    assert_eq!(updated.votes, 2);
    assert_eq!(updated.title, before.title);
    assert_eq!(updated.review_body, before.review_body);
    assert_eq!(updated.created_at, before.created_at);

    Ok(())
}

/// Tests a negative increment is subtracted and persisted.
///
/// Expected: Ok with votes 6, stored row matches the returned one
#[tokio::test]
async fn subtracts_negative_increment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .increment_votes(IncrementVotesParams {
            review_id: 13,
            inc_votes: -10,
        })
        .await?;

    assert_eq!(updated.votes, 6);

    let stored = entity::prelude::Review::find_by_id(13).one(db).await?.unwrap();
    assert_eq!(stored.votes, 6);

    Ok(())
}

/// Tests votes are allowed to go below zero.
///
/// Expected: Ok with negative votes
#[tokio::test]
async fn allows_negative_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let owner = factory::create_user(db).await?;
    let review = factory::review::ReviewFactory::new(db, &category.slug, &owner.username)
        .votes(0)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .increment_votes(IncrementVotesParams {
            review_id: review.review_id,
            inc_votes: -3,
        })
        .await?;

    assert_eq!(updated.votes, -3);

    Ok(())
}

/// Tests incrementing a review id that does not exist.
///
/// Expected: Err(AppError::NotFound), no row touched
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .increment_votes(IncrementVotesParams {
            review_id: 999999,
            inc_votes: 1,
        })
        .await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Review not found for id 999999")
    );

    Ok(())
}

/// Tests an increment that would overflow the vote tally.
///
/// Expected: Err(AppError::BadRequest), stored votes unchanged
#[tokio::test]
async fn rejects_overflowing_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .increment_votes(IncrementVotesParams {
            review_id: 13,
            inc_votes: i32::MAX,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Invalid input"));

    let stored = entity::prelude::Review::find_by_id(13).one(db).await?.unwrap();
    assert_eq!(stored.votes, 16);

    Ok(())
}

use super::*;

/// Tests comments are returned newest first.
///
/// Expected: Ok with the review's comments ordered by created_at descending
#[tokio::test]
async fn returns_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let now = Utc::now();

    factory::comment::CommentFactory::new(db, review.review_id, &owner.username)
        .body("oldest")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, review.review_id, &owner.username)
        .body("newest")
        .created_at(now)
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, review.review_id, &owner.username)
        .body("middle")
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_review_id(review.review_id).await?;

    let bodies: Vec<_> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["newest", "middle", "oldest"]);
    assert!(comments.iter().all(|c| c.review_id == review.review_id));

    Ok(())
}

/// Tests only comments of the requested review are returned.
///
/// Expected: Ok with the three seeded comments of review 2
#[tokio::test]
async fn returns_only_comments_of_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_review_id(2).await?;

    assert_eq!(comments.len(), 3);
    assert!(comments.iter().all(|c| c.review_id == 2));

    Ok(())
}

/// Tests a review without comments.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_review_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_review_id(1).await?;

    assert!(comments.is_empty());

    Ok(())
}

use super::*;

/// Tests the default listing is newest first.
///
/// Expected: Ok with all 13 seeded reviews, created_at descending
#[tokio::test]
async fn returns_reviews_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&params(ReviewSortColumn::CreatedAt, SortOrder::Desc, None))
        .await?;

    assert_eq!(reviews.len(), 13);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].review.created_at >= pair[1].review.created_at));
    // Catan carries the oldest timestamp
    assert_eq!(reviews[12].review.review_id, 13);

    Ok(())
}

/// Tests sorting by votes ascending.
///
/// Expected: Ok with Agricola (1 vote) first and Scythe (100 votes) last
#[tokio::test]
async fn sorts_by_votes_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&params(ReviewSortColumn::Votes, SortOrder::Asc, None))
        .await?;

    assert_eq!(reviews[0].review.title, "Agricola");
    assert_eq!(reviews[12].review.votes, 100);
    assert!(reviews
        .windows(2)
        .all(|pair| pair[0].review.votes <= pair[1].review.votes));

    Ok(())
}

/// Tests sorting by the derived comment count.
///
/// Reviews 2 and 3 both have three comments; ties fall back to ascending review id.
///
/// Expected: Ok with review 2 then review 3 at the top, all others at zero
#[tokio::test]
async fn sorts_by_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&params(ReviewSortColumn::CommentCount, SortOrder::Desc, None))
        .await?;

    assert_eq!(reviews[0].review.review_id, 2);
    assert_eq!(reviews[0].comment_count, 3);
    assert_eq!(reviews[1].review.review_id, 3);
    assert_eq!(reviews[1].comment_count, 3);
    assert!(reviews[2..].iter().all(|r| r.comment_count == 0));

    Ok(())
}

/// Tests filtering by category slug.
///
/// Expected: Ok with only the single dexterity review
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&params(
            ReviewSortColumn::CreatedAt,
            SortOrder::Desc,
            Some("dexterity"),
        ))
        .await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].review.title, "Jenga");
    assert_eq!(reviews[0].review.category, "dexterity");

    Ok(())
}

/// Tests filtering by a category without reviews.
///
/// The repository does not distinguish unknown slugs from empty categories.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_category_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo
        .get_all(&params(
            ReviewSortColumn::CreatedAt,
            SortOrder::Desc,
            Some("children's games"),
        ))
        .await?;

    assert!(reviews.is_empty());

    Ok(())
}

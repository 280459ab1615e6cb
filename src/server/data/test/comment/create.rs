use super::*;

/// Tests creating a comment returns the stored row.
///
/// Expected: Ok with a new id, zero votes and the given author and body
#[tokio::test]
async fn creates_comment_on_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            review_id: 1,
            author: "dav3rid".to_string(),
            body: "Muddy boots, happy sheep".to_string(),
        })
        .await?;

    assert_eq!(comment.comment_id, 7);
    assert_eq!(comment.review_id, 1);
    assert_eq!(comment.author, "dav3rid");
    assert_eq!(comment.body, "Muddy boots, happy sheep");
    assert_eq!(comment.votes, 0);

    let stored = entity::prelude::Comment::find_by_id(7).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests an unknown author is rejected by the author foreign key.
///
/// Expected: Err(DbErr) and no comment inserted
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParams {
            review_id: 1,
            author: "nobody".to_string(),
            body: "Who am I?".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 6);

    Ok(())
}

/// Tests a missing review is rejected by the review foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_test_data(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(CreateCommentParams {
            review_id: 999,
            author: "mallionaire".to_string(),
            body: "Into the void".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

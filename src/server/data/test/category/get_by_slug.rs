use super::*;

/// Tests fetching an existing category by slug.
///
/// Expected: Ok with the matching category
#[tokio::test]
async fn returns_existing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .slug("social deduction")
        .description("Players attempt to uncover each other's hidden role")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let category = repo.get_by_slug("social deduction").await?;

    assert_eq!(category.slug, "social deduction");
    assert_eq!(
        category.description,
        "Players attempt to uncover each other's hidden role"
    );

    Ok(())
}

/// Tests fetching a slug that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the slug
#[tokio::test]
async fn fails_with_not_found_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.get_by_slug("bananas").await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Category not found for slug bananas")
    );

    Ok(())
}

use super::*;

/// Tests listing categories returns them ordered by slug.
///
/// Expected: Ok with every category sorted alphabetically
#[tokio::test]
async fn returns_categories_ordered_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .slug("strategy")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .slug("dexterity")
        .description("Games involving physical skill")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].slug, "dexterity");
    assert_eq!(categories[0].description, "Games involving physical skill");
    assert_eq!(categories[1].slug, "strategy");

    Ok(())
}

/// Tests listing categories from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}

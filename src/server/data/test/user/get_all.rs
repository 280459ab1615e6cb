use super::*;

/// Tests users are returned ordered by username with every field populated.
///
/// Expected: Ok with users sorted by username
#[tokio::test]
async fn returns_users_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("mallionaire")
        .name("haz")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bainesface")
        .name("sarah")
        .avatar_url("https://avatars2.githubusercontent.com/u/24394918?s=400&v=4")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "bainesface");
    assert_eq!(users[0].name, "sarah");
    assert_eq!(
        users[0].avatar_url,
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4"
    );
    assert_eq!(users[1].username, "mallionaire");

    Ok(())
}

/// Tests listing users from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

//! Canonical seed dataset for integration tests.
//!
//! Inserts a fixed set of rows so tests can rely on known ids and values: review 1 starts
//! with 1 vote, review 13 with 16 votes, reviews 2 and 3 carry three comments each, and the
//! `children's games` category has no reviews at all.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

const PLACEHOLDER_IMG: &str =
    "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png";

const CATEGORIES: [(&str, &str); 4] = [
    ("euro game", "Abstact games that involve little luck"),
    ("social deduction", "Players attempt to uncover each other's hidden role"),
    ("dexterity", "Games involving physical skill"),
    ("children's games", "Games suitable for children"),
];

const USERS: [(&str, &str, &str); 4] = [
    (
        "mallionaire",
        "haz",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "philippaclaire9",
        "philippa",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "bainesface",
        "sarah",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "dav3rid",
        "dave",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

struct SeedReview {
    title: &'static str,
    designer: &'static str,
    owner: &'static str,
    category: &'static str,
    review_body: &'static str,
    review_img_url: &'static str,
    votes: i32,
    created_at_millis: i64,
}

const REVIEWS: [SeedReview; 13] = [
    SeedReview {
        title: "Agricola",
        designer: "Uwe Rosenberg",
        owner: "mallionaire",
        category: "euro game",
        review_body: "Farmyard fun!",
        review_img_url: PLACEHOLDER_IMG,
        votes: 1,
        created_at_millis: 1610964020514,
    },
    SeedReview {
        title: "Jenga",
        designer: "Leslie Scott",
        owner: "philippaclaire9",
        category: "dexterity",
        review_body: "Fiddly fun for all the family",
        review_img_url: PLACEHOLDER_IMG,
        votes: 5,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "Ultimate Werewolf",
        designer: "Akihisa Okui",
        owner: "bainesface",
        category: "social deduction",
        review_body: "We couldn't find the werewolf!",
        review_img_url: PLACEHOLDER_IMG,
        votes: 5,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "Dolor reprehenderit",
        designer: "Gamey McGameface",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Consequat velit occaecat voluptate do. Dolor pariatur fugiat sint et proident ex do consequat est.",
        review_img_url: "https://images.pexels.com/photos/278888/pexels-photo-278888.jpeg",
        votes: 7,
        created_at_millis: 1611315350936,
    },
    SeedReview {
        title: "Proident tempor et.",
        designer: "Seymour Buttz",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Labore occaecat sunt qui commodo anim anim aliqua adipisicing aliquip fugiat.",
        review_img_url: "https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg",
        votes: 5,
        created_at_millis: 1610010368077,
    },
    SeedReview {
        title: "Occaecat consequat officia in quis commodo.",
        designer: "Ollie Tabooger",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Fugiat fugiat enim officia laborum quis. Aliquip laboris non nulla nostrud magna exercitation in ullamco aute laborum cillum nisi sint.",
        review_img_url: "https://images.pexels.com/photos/207924/pexels-photo-207924.jpeg",
        votes: 8,
        created_at_millis: 1600010368077,
    },
    SeedReview {
        title: "Mollit elit qui incididunt veniam occaecat cupidatat",
        designer: "Avery Wunzboogerz",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Consectetur incididunt aliquip sunt officia. Magna ex nulla consectetur laboris incididunt ea non qui.",
        review_img_url: "https://images.pexels.com/photos/278888/pexels-photo-278888.jpeg",
        votes: 9,
        created_at_millis: 1611093465100,
    },
    SeedReview {
        title: "One Night Ultimate Werewolf",
        designer: "Akihisa Okui",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "We couldn't find the werewolf!",
        review_img_url: PLACEHOLDER_IMG,
        votes: 5,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "A truly Quacking Game; Quacks of Quedlinburg",
        designer: "Wolfgang Warsch",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Ever wish you could try a cake without eating it? Whip up some potions in this push your luck game.",
        review_img_url: "https://images.pexels.com/photos/279321/pexels-photo-279321.jpeg",
        votes: 10,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "Build you own tour de Yorkshire",
        designer: "Asger Harding Granerud",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Cold rain pours on the faces of your team of cyclists, you pulled to the front of the pack early and now you're taking on exhaustion cards like there's no tomorrow.",
        review_img_url: "https://images.pexels.com/photos/258045/pexels-photo-258045.jpeg",
        votes: 10,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "That's just what an evil person would say!",
        designer: "Fiona Lohoar",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "If you've ever wanted to accuse your siblings, cousins or friends of being part of a plot to murder everyone while you're sat around a dinner table, then this is the game for you.",
        review_img_url: "https://images.pexels.com/photos/220057/pexels-photo-220057.jpeg",
        votes: 8,
        created_at_millis: 1610964101251,
    },
    SeedReview {
        title: "Scythe; you're gonna need a bigger table!",
        designer: "Jamey Stegmaier",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "Spend 30 minutes just setting up all of the boards (!) meeple and decks, just to forget how to play.",
        review_img_url: "https://images.pexels.com/photos/4200740/pexels-photo-4200740.jpeg",
        votes: 100,
        created_at_millis: 1611311824839,
    },
    SeedReview {
        title: "Settlers of Catan: Don't Settle For Less",
        designer: "Klaus Teuber",
        owner: "mallionaire",
        category: "social deduction",
        review_body: "You have stumbled across an uncharted island rich in natural resources, but you are not alone; other adventurers have come ashore too, and the race to settle the island of Catan has begun!",
        review_img_url: "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg",
        votes: 16,
        created_at_millis: 785318400,
    },
];

/// (review_id, author, body, votes, created_at_millis)
const COMMENTS: [(i32, &str, &str, i32, i64); 6] = [
    (2, "bainesface", "I loved this game too!", 16, 1511354613389),
    (3, "mallionaire", "My dog loved this game too!", 13, 1610964545410),
    (3, "philippaclaire9", "I didn't know dogs could play games", 10, 1610964588110),
    (2, "bainesface", "EPIC board game!", 16, 1511354163389),
    (
        2,
        "mallionaire",
        "Now this is a story all about how, board games turned my life upside down",
        13,
        1610965445410,
    ),
    (
        3,
        "philippaclaire9",
        "Not sure about dogs, but my cat likes to get involved with board games",
        10,
        1616874588110,
    ),
];

fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Inserts the canonical dataset into an empty review schema.
///
/// Reviews are inserted in order into a fresh table, so they receive ids 1 through 13;
/// comments receive ids 1 through 6.
///
/// # Returns
/// - `Ok(())` - All rows inserted
/// - `Err(DbErr)` - Tables missing, already seeded, or another insert failure
pub async fn seed_test_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    entity::prelude::Category::insert_many(CATEGORIES.iter().map(|(slug, description)| {
        entity::category::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            description: ActiveValue::Set(description.to_string()),
        }
    }))
    .exec(db)
    .await?;

    entity::prelude::User::insert_many(USERS.iter().map(|(username, name, avatar_url)| {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            name: ActiveValue::Set(name.to_string()),
            avatar_url: ActiveValue::Set(avatar_url.to_string()),
        }
    }))
    .exec(db)
    .await?;

    entity::prelude::Review::insert_many(REVIEWS.iter().map(|review| {
        entity::review::ActiveModel {
            review_id: ActiveValue::NotSet,
            title: ActiveValue::Set(review.title.to_string()),
            category: ActiveValue::Set(review.category.to_string()),
            designer: ActiveValue::Set(review.designer.to_string()),
            owner: ActiveValue::Set(review.owner.to_string()),
            review_body: ActiveValue::Set(review.review_body.to_string()),
            review_img_url: ActiveValue::Set(review.review_img_url.to_string()),
            votes: ActiveValue::Set(review.votes),
            created_at: ActiveValue::Set(timestamp(review.created_at_millis)),
        }
    }))
    .exec(db)
    .await?;

    entity::prelude::Comment::insert_many(COMMENTS.iter().map(
        |(review_id, author, body, votes, created_at_millis)| entity::comment::ActiveModel {
            comment_id: ActiveValue::NotSet,
            review_id: ActiveValue::Set(*review_id),
            author: ActiveValue::Set(author.to_string()),
            body: ActiveValue::Set(body.to_string()),
            votes: ActiveValue::Set(*votes),
            created_at: ActiveValue::Set(timestamp(*created_at_millis)),
        },
    ))
    .exec(db)
    .await?;

    Ok(())
}

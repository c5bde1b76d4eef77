//! Sample reviews shipped with the built-in gallery

use super::models::{Review, ReviewStatus};
use chrono::NaiveDate;

const SEED: &[(u64, u64, &str, u8, &str, (i32, u32, u32), ReviewStatus)] = &[
    (
        1,
        1,
        "Jane D.",
        5,
        "Absolutely stunning piece! The colors are even more vibrant in person. It has become the centerpiece of my living room.",
        (2023, 10, 15),
        ReviewStatus::Approved,
    ),
    (
        2,
        1,
        "Mark S.",
        4,
        "Beautiful and intricate work. My only wish is that it was slightly larger. Still, very happy with the purchase.",
        (2023, 11, 1),
        ReviewStatus::Approved,
    ),
    (
        3,
        2,
        "Emily R.",
        5,
        "The \"Golden Sun\" truly lights up the room. The detail is incredible. Worth every penny!",
        (2023, 9, 20),
        ReviewStatus::Approved,
    ),
    (
        4,
        4,
        "Chris T.",
        5,
        "The print quality is fantastic. The colors are rich and the paper is high quality. Looks great framed.",
        (2023, 12, 5),
        ReviewStatus::Approved,
    ),
    (
        5,
        1,
        "Anonymous",
        3,
        "It is okay.",
        (2023, 12, 10),
        ReviewStatus::Pending,
    ),
    (
        6,
        5,
        "Samantha B.",
        5,
        "I feel like I can step right into this forest. It brings such a sense of peace to my study. I love it.",
        (2023, 11, 28),
        ReviewStatus::Approved,
    ),
];

pub fn reviews() -> Vec<Review> {
    SEED.iter()
        .filter_map(|&(id, artwork_id, author, rating, text, (y, m, d), status)| {
            Some(Review {
                id,
                artwork_id,
                author: author.to_string(),
                rating,
                text: text.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                status,
            })
        })
        .collect()
}

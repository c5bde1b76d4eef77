//! Review Domain Models

use crate::catalog::models::ArtworkId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

pub type ReviewId = u64;

/// Minimum review length, counted after trimming whitespace
pub const MIN_REVIEW_TEXT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub artwork_id: ArtworkId,
    pub author: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
    pub status: ReviewStatus,
}

/// A visitor's review submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    #[serde(default)]
    pub author: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Please select a star rating."))]
    pub rating: u8,

    #[validate(custom = "validate_review_text")]
    pub text: String,
}

fn validate_review_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < MIN_REVIEW_TEXT_LEN {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Borrowed(
            "Your review must be at least 10 characters long.",
        ));
        return Err(err);
    }
    Ok(())
}

/// Average of the approved ratings; zero when there are none
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f64,
    pub review_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ModerationInput {
    pub status: ReviewStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModerationQuery {
    pub status: Option<ReviewStatus>,
}

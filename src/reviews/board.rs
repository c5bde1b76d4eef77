//! Review board: submissions, moderation and per-artwork ratings

use super::models::{RatingSummary, Review, ReviewDraft, ReviewId, ReviewStatus};
use crate::catalog::models::ArtworkId;
use crate::catalog::source::CatalogSource;
use crate::error::{Result, StorefrontError};
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};
use validator::Validate;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

pub struct ReviewBoard {
    reviews: DashMap<ReviewId, Review>,
    next_id: AtomicU64,
}

impl ReviewBoard {
    pub fn new(reviews: Vec<Review>) -> Self {
        let next_id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        Self {
            reviews: reviews.into_iter().map(|r| (r.id, r)).collect(),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn seeded() -> Self {
        Self::new(super::seed::reviews())
    }

    /// Approved reviews for one artwork, newest first.
    pub fn approved_for(&self, artwork_id: ArtworkId) -> Vec<Review> {
        let mut approved: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.artwork_id == artwork_id && r.status == ReviewStatus::Approved)
            .map(|r| r.value().clone())
            .collect();
        approved.sort_by_key(|r| (Reverse(r.date), Reverse(r.id)));
        approved
    }

    pub fn rating_summary(&self, artwork_id: ArtworkId) -> RatingSummary {
        summarize(&self.approved_for(artwork_id))
    }

    /// Stores a new review as pending, dated today.
    pub fn submit(
        &self,
        catalog: &dyn CatalogSource,
        artwork_id: ArtworkId,
        draft: ReviewDraft,
    ) -> Result<Review> {
        self.submit_on(catalog, artwork_id, draft, Utc::now().date_naive())
    }

    pub fn submit_on(
        &self,
        catalog: &dyn CatalogSource,
        artwork_id: ArtworkId,
        draft: ReviewDraft,
        date: NaiveDate,
    ) -> Result<Review> {
        if !catalog.contains(artwork_id) {
            return Err(StorefrontError::ArtworkNotFound(artwork_id));
        }
        draft.validate()?;

        let author = draft
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        let review = Review {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            artwork_id,
            author,
            rating: draft.rating,
            text: draft.text.trim().to_string(),
            date,
            status: ReviewStatus::Pending,
        };
        self.reviews.insert(review.id, review.clone());
        tracing::info!(review_id = review.id, artwork_id, "review submitted for moderation");

        Ok(review)
    }

    pub fn moderate(&self, review_id: ReviewId, status: ReviewStatus) -> Result<Review> {
        let mut review = self
            .reviews
            .get_mut(&review_id)
            .ok_or(StorefrontError::ReviewNotFound(review_id))?;
        review.status = status;
        tracing::info!(review_id, ?status, "review moderated");

        Ok(review.clone())
    }

    /// Reviews with the given status (all reviews when `None`), oldest id first.
    pub fn with_status(&self, status: Option<ReviewStatus>) -> Vec<Review> {
        let mut matched: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .map(|r| r.value().clone())
            .collect();
        matched.sort_by_key(|r| r.id);
        matched
    }
}

fn summarize(reviews: &[Review]) -> RatingSummary {
    if reviews.is_empty() {
        return RatingSummary {
            average_rating: 0.0,
            review_count: 0,
        };
    }

    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    RatingSummary {
        average_rating: f64::from(total) / reviews.len() as f64,
        review_count: reviews.len(),
    }
}

// src/models/review.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A review as returned by the review service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,            // Server-side identity, display only
    pub product_id: String,         // ID of the product the review is about
    pub review_text: String,        // Free text of the review
    #[serde(default)]
    pub sentiment: Option<String>,  // Filled in once sentiment analysis completes
    #[serde(default)]
    pub created_at: Option<String>, // ISO-8601, possibly without an offset
}

/// Body of `POST /api/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: String,
    pub review_text: String,
}

/// The two form values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub product_id: String,
    pub review_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("product id is required")]
    MissingProductId,
    #[error("review text is required")]
    MissingReviewText,
}

impl ReviewDraft {
    pub fn new(product_id: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            review_text: review_text.into(),
        }
    }

    /// Presence check only. Whitespace counts as content.
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        if self.product_id.is_empty() {
            return Err(ValidationError::MissingProductId);
        }
        if self.review_text.is_empty() {
            return Err(ValidationError::MissingReviewText);
        }
        Ok(NewReview {
            product_id: self.product_id.clone(),
            review_text: self.review_text.clone(),
        })
    }
}

impl Review {
    /// Text for the sentiment column; the service marks unanalysed reviews `PENDING`.
    pub fn sentiment_text(&self) -> &str {
        self.sentiment.as_deref().unwrap_or("PENDING")
    }
}

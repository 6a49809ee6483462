use gloo_net::http::Request;
use leptos::logging::log;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::review::{NewReview, Review};

/// The two calls the page makes against the review service.
#[allow(async_fn_in_trait)]
pub trait ReviewsApi {
    /// `POST /api/reviews`. Any 2xx counts as accepted; the body is ignored.
    async fn submit(&self, review: &NewReview) -> Result<(), ApiError>;

    /// `GET /api/reviews`, in whatever order the service returns them.
    async fn list(&self) -> Result<Vec<Review>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpReviewsApi {
    config: ApiConfig,
}

impl HttpReviewsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ReviewsApi for HttpReviewsApi {
    async fn submit(&self, review: &NewReview) -> Result<(), ApiError> {
        let url = self.config.reviews_url();
        log!("[API] POST {} for product {}", url, review.product_id);

        let response = Request::post(&url).json(review)?.send().await?;
        if !response.ok() {
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        let url = self.config.reviews_url();
        log!("[API] GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        let body = response.text().await?;
        let reviews: Vec<Review> = serde_json::from_str(&body)?;
        log!("[API] Received {} reviews", reviews.len());
        Ok(reviews)
    }
}

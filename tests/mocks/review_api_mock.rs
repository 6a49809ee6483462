//! In-memory stand-in for the review service plus a view that records what
//! the board did to it.
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use reviewboard::board::BoardView;
use reviewboard::client::ReviewsApi;
use reviewboard::error::ApiError;
use reviewboard::models::review::{NewReview, Review, ReviewDraft};
use tokio::sync::oneshot;

/// How the mock answers `POST /api/reviews`.
#[derive(Debug, Clone, Copy)]
pub enum SubmitBehavior {
    Accept,
    Reject(u16),
    Unreachable,
}

struct QueuedList {
    result: Result<Vec<Review>, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

pub struct MockReviewsApi {
    behavior: Cell<SubmitBehavior>,
    stored: RefCell<Vec<Review>>,
    queued_lists: RefCell<VecDeque<QueuedList>>,
    pub submitted: RefCell<Vec<NewReview>>,
    pub list_calls: Cell<usize>,
}

impl MockReviewsApi {
    pub fn new(behavior: SubmitBehavior) -> Self {
        Self {
            behavior: Cell::new(behavior),
            stored: RefCell::new(Vec::new()),
            queued_lists: RefCell::new(VecDeque::new()),
            submitted: RefCell::new(Vec::new()),
            list_calls: Cell::new(0),
        }
    }

    pub fn with_reviews(behavior: SubmitBehavior, reviews: Vec<Review>) -> Self {
        let api = Self::new(behavior);
        *api.stored.borrow_mut() = reviews;
        api
    }

    /// The next `list` call answers with `result` instead of the stored reviews.
    pub fn queue_list(&self, result: Result<Vec<Review>, ApiError>) {
        self.queued_lists
            .borrow_mut()
            .push_back(QueuedList { result, gate: None });
    }

    /// Like `queue_list`, but the answer is held back until the returned sender fires.
    pub fn queue_gated_list(&self, result: Result<Vec<Review>, ApiError>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.queued_lists.borrow_mut().push_back(QueuedList {
            result,
            gate: Some(gate),
        });
        release
    }
}

impl ReviewsApi for MockReviewsApi {
    async fn submit(&self, review: &NewReview) -> Result<(), ApiError> {
        self.submitted.borrow_mut().push(review.clone());
        match self.behavior.get() {
            SubmitBehavior::Accept => {
                let mut stored = self.stored.borrow_mut();
                let id = stored.len() as i64 + 1;
                stored.push(Review {
                    id: Some(id),
                    product_id: review.product_id.clone(),
                    review_text: review.review_text.clone(),
                    sentiment: Some("P+".into()),
                    created_at: Some("2024-05-01T10:20:30.5".into()),
                });
                Ok(())
            }
            SubmitBehavior::Reject(status) => Err(ApiError::Rejected { status }),
            SubmitBehavior::Unreachable => {
                Err(ApiError::Transport("connection refused".into()))
            }
        }
    }

    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        let queued = self.queued_lists.borrow_mut().pop_front();
        match queued {
            Some(QueuedList { result, gate }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Ok(self.stored.borrow().clone()),
        }
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub product_id: RefCell<String>,
    pub review_text: RefCell<String>,
    pub status: RefCell<Option<String>>,
    pub rows: RefCell<Option<Vec<Review>>>,
    pub renders: Cell<usize>,
}

impl RecordingView {
    pub fn with_draft(product_id: &str, review_text: &str) -> Self {
        let view = Self::default();
        *view.product_id.borrow_mut() = product_id.to_string();
        *view.review_text.borrow_mut() = review_text.to_string();
        view
    }

    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.rows
            .borrow()
            .iter()
            .flatten()
            .map(|review| review.product_id.clone())
            .collect()
    }
}

impl BoardView for RecordingView {
    fn draft(&self) -> ReviewDraft {
        ReviewDraft::new(self.product_id.borrow().clone(), self.review_text.borrow().clone())
    }

    fn clear_draft(&self) {
        self.product_id.borrow_mut().clear();
        self.review_text.borrow_mut().clear();
    }

    fn show_status(&self, message: &str) {
        *self.status.borrow_mut() = Some(message.to_string());
    }

    fn render(&self, reviews: Vec<Review>) {
        self.renders.set(self.renders.get() + 1);
        *self.rows.borrow_mut() = Some(reviews);
    }
}

pub fn review(product_id: &str, review_text: &str) -> Review {
    Review {
        id: None,
        product_id: product_id.to_string(),
        review_text: review_text.to_string(),
        sentiment: Some("NEU".into()),
        created_at: Some("2024-04-30T08:00:00".into()),
    }
}

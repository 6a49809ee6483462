//! Submission and loading logic for the review board page.
//!
//! The page owns its UI state and exposes it through [`BoardView`]; the
//! controller only talks to the service through [`ReviewsApi`], so the whole
//! flow runs unchanged against a mock.
use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::{error, log, warn};

use crate::client::ReviewsApi;
use crate::error::ApiError;
use crate::models::review::{Review, ReviewDraft, ValidationError};

pub const VALIDATION_MESSAGE: &str = "Please fill in both fields.";
pub const SUCCESS_MESSAGE: &str = "Review submitted successfully! Sentiment analysis in progress.";
pub const FAILURE_MESSAGE: &str = "Error submitting review.";

/// The UI region the board reads from and writes to.
pub trait BoardView {
    fn draft(&self) -> ReviewDraft;
    fn clear_draft(&self);
    fn show_status(&self, message: &str);
    /// Replace every row of the table with `reviews`.
    fn render(&self, reviews: Vec<Review>);
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(ValidationError),
    Accepted,
    Failed(ApiError),
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid(_) => VALIDATION_MESSAGE,
            SubmitOutcome::Accepted => SUCCESS_MESSAGE,
            SubmitOutcome::Failed(_) => FAILURE_MESSAGE,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// The table now shows this many reviews.
    Rendered(usize),
    /// A newer load was already applied; this response was dropped.
    Stale,
    Failed(ApiError),
}

/// Hands out load tickets and remembers the newest one applied.
#[derive(Debug, Default, Clone)]
pub struct LoadSequencer {
    issued: Rc<Cell<u64>>,
    applied: Rc<Cell<u64>>,
}

impl LoadSequencer {
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Returns false if a load issued after `ticket` has already been applied.
    pub fn try_apply(&self, ticket: u64) -> bool {
        if ticket <= self.applied.get() {
            return false;
        }
        self.applied.set(ticket);
        true
    }
}

pub struct ReviewBoard<A> {
    api: Rc<A>,
    loads: LoadSequencer,
}

impl<A> Clone for ReviewBoard<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            loads: self.loads.clone(),
        }
    }
}

impl<A: ReviewsApi> ReviewBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            loads: LoadSequencer::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full list and render it. On failure the view is left as it was.
    pub async fn load(&self, view: &impl BoardView) -> LoadOutcome {
        let ticket = self.loads.issue();
        match self.api.list().await {
            Ok(reviews) => {
                if !self.loads.try_apply(ticket) {
                    warn!("[LOADER] Dropping response for load #{}, a newer list is shown", ticket);
                    return LoadOutcome::Stale;
                }
                let count = reviews.len();
                log!("[LOADER] Rendering {} reviews (load #{})", count, ticket);
                view.render(reviews);
                LoadOutcome::Rendered(count)
            }
            Err(err) => {
                error!("[LOADER] Error fetching reviews: {}", err);
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Validate the draft, post it, and refresh the list once it is accepted.
    pub async fn submit(&self, view: &impl BoardView) -> SubmitOutcome {
        let review = match view.draft().validate() {
            Ok(review) => review,
            Err(err) => {
                log!("[SUBMIT] Rejected locally: {}", err);
                view.show_status(VALIDATION_MESSAGE);
                return SubmitOutcome::Invalid(err);
            }
        };

        match self.api.submit(&review).await {
            Ok(()) => {
                log!("[SUBMIT] Review for {} accepted", review.product_id);
                view.show_status(SUCCESS_MESSAGE);
                view.clear_draft();
                self.load(view).await;
                SubmitOutcome::Accepted
            }
            Err(err) => {
                match &err {
                    ApiError::Rejected { status } => {
                        log!("[SUBMIT] Service rejected review with status {}", status)
                    }
                    other => error!("[SUBMIT] Error: {}", other),
                }
                view.show_status(FAILURE_MESSAGE);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

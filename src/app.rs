/// Main application entry point for the review board.
/// Wires the review form and the reviews table to the review service.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

use crate::board::{BoardView, ReviewBoard};
use crate::client::HttpReviewsApi;
use crate::components::{review_form::ReviewForm, reviews_table::ReviewsTable};
use crate::config::ApiConfig;
use crate::models::review::{Review, ReviewDraft};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/reviewboard.css"/>
        <Title text="Product Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewBoardPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Page state handed to the board as signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub product_id: RwSignal<String>,
    pub review_text: RwSignal<String>,
    pub status: RwSignal<Option<String>>,
    pub reviews: RwSignal<Option<Vec<Review>>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            product_id: create_rw_signal(String::new()),
            review_text: create_rw_signal(String::new()),
            status: create_rw_signal(None),
            reviews: create_rw_signal(None),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for SignalView {
    fn draft(&self) -> ReviewDraft {
        ReviewDraft::new(self.product_id.get_untracked(), self.review_text.get_untracked())
    }

    fn clear_draft(&self) {
        self.product_id.set(String::new());
        self.review_text.set(String::new());
    }

    fn show_status(&self, message: &str) {
        self.status.set(Some(message.to_string()));
    }

    fn render(&self, reviews: Vec<Review>) {
        self.reviews.set(Some(reviews));
    }
}

#[component]
pub fn ReviewBoardPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let board = store_value(ReviewBoard::new(HttpReviewsApi::new(config)));
    let view_state = SignalView::new();

    // Effects only run in the browser, so the first load never hits the server render.
    create_effect(move |_| {
        let board = board.get_value();
        spawn_local(async move {
            board.load(&view_state).await;
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        let board = board.get_value();
        spawn_local(async move {
            board.submit(&view_state).await;
        });
    });

    view! {
        <div>
            <h1>{ "Product Reviews" }</h1>
            <ReviewForm
                product_id=view_state.product_id
                review_text=view_state.review_text
                status=view_state.status
                on_submit=on_submit
            />
            <h2>{ "Reviews" }</h2>
            <ReviewsTable reviews=view_state.reviews />
        </div>
    }
}

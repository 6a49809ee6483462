use leptos::*;
use crate::models::review::Review;
use crate::models::sentiment::SentimentClass;
use crate::utils::time::format_created_at;

pub const EMPTY_PLACEHOLDER: &str = "No reviews yet.";

/// Table of reviews in service order.
/// `None` means nothing has loaded yet and the body stays empty.
#[component]
pub fn ReviewsTable(reviews: RwSignal<Option<Vec<Review>>>) -> impl IntoView {
    view! {
        <table id="reviews-table">
            <thead>
                <tr>
                    <th>{ "Product ID" }</th>
                    <th>{ "Review" }</th>
                    <th>{ "Sentiment" }</th>
                    <th>{ "Created At" }</th>
                </tr>
            </thead>
            <tbody id="reviews-body">
                { move || match reviews.get() {
                    None => Vec::new(),
                    Some(list) if list.is_empty() => vec![view! {
                        <tr><td colspan="4">{ EMPTY_PLACEHOLDER }</td></tr>
                    }],
                    Some(list) => list.into_iter().map(review_row).collect::<Vec<_>>(),
                } }
            </tbody>
        </table>
    }
}

fn review_row(review: Review) -> HtmlElement<html::Tr> {
    let sentiment = review.sentiment_text().to_string();
    let sentiment_class = SentimentClass::from_label(review.sentiment.as_deref()).css_class();
    let created_at = format_created_at(review.created_at.as_deref());

    view! {
        <tr>
            <td>{ review.product_id }</td>
            <td>{ review.review_text }</td>
            <td class=sentiment_class>{ sentiment }</td>
            <td>{ created_at }</td>
        </tr>
    }
}
